//! # Runtime Dispatch
//!
//! Executes one transaction against the ledger state in place. Every
//! operation checks its preconditions before it writes, so a rejected call
//! leaves the state untouched, with one exception: a claim marks its
//! nullifier before the payout transfer, and that transfer can still fail.
//! Under [`NullifierPolicy::BurnOnFailure`] the mark is kept; under
//! [`NullifierPolicy::Atomic`] that single entry is released again.

use relief_core::{Amount, ConsistencyError, Nullifier, ReliefError};
use relief_crypto::Ed25519PublicKey;
use relief_zkp::{ClaimProof, ClaimVerifier};
use serde::{Deserialize, Serialize};

use crate::admin::AccessControl;
use crate::balances::{AccountId, Balances};
use crate::compensation::{ClaimPayout, ClaimProcessor};
use crate::config::{ConfigError, NullifierPolicy, RuntimeConfig};
use crate::nullifier::NullifierLedger;
use crate::oracle::{OracleKeys, OracleRegistry};

/// A sender-authenticated entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum RuntimeCall {
    /// Claim the empty administrator slot for the sender.
    SetAdmin,
    /// Hand administration to `new_admin`. Sender must be the administrator.
    ChangeAdmin { new_admin: AccountId },
    /// Register both oracle keys. Sender must be the administrator.
    SetupPublicKeys {
        disaster: Ed25519PublicKey,
        identity: Ed25519PublicKey,
    },
    /// Submit a compensation claim.
    Claim { proof: ClaimProof },
}

impl RuntimeCall {
    /// Entry point name as shown in receipts.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetAdmin => "setAdmin",
            Self::ChangeAdmin { .. } => "changeAdmin",
            Self::SetupPublicKeys { .. } => "setupPublicKeys",
            Self::Claim { .. } => "claim",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: AccountId,
    #[serde(flatten)]
    pub call: RuntimeCall,
}

impl Transaction {
    pub fn new(sender: AccountId, call: RuntimeCall) -> Self {
        Self { sender, call }
    }
}

/// What a successful call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Done,
    Paid(ClaimPayout),
}

/// All ledger state.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RuntimeState {
    access: AccessControl,
    oracles: OracleRegistry,
    nullifiers: NullifierLedger,
    balances: Balances,
}

/// The relief ledger runtime.
pub struct Runtime {
    config: RuntimeConfig,
    state: RuntimeState,
    verifier: Box<dyn ClaimVerifier>,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Runtime {
    /// Genesis state for `config`. Claims are checked with `verifier`.
    pub fn new(
        config: RuntimeConfig,
        verifier: Box<dyn ClaimVerifier>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = RuntimeState {
            access: AccessControl::new(config.admin_initial_balance),
            oracles: OracleRegistry::new(),
            nullifiers: NullifierLedger::new(),
            balances: Balances::new(config.total_supply),
        };
        Ok(Self {
            config,
            state,
            verifier,
        })
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Execute `tx`, committing its effects only on success.
    pub fn apply(&mut self, tx: &Transaction) -> Result<CallOutcome, ReliefError> {
        let fresh_nullifier = match &tx.call {
            RuntimeCall::Claim { proof } => Some(proof.public_output.nullifier)
                .filter(|n| !self.state.nullifiers.is_spent(n)),
            _ => None,
        };
        let result = dispatch(self.verifier.as_ref(), &mut self.state, tx);
        if let Err(err) = &result {
            let marked = fresh_nullifier.filter(|n| self.state.nullifiers.is_spent(n));
            if let Some(nullifier) = marked {
                match self.config.nullifier_policy {
                    NullifierPolicy::BurnOnFailure => tracing::warn!(
                        sender = %tx.sender,
                        nullifier = %nullifier,
                        "claim failed after its nullifier was marked; nullifier stays spent"
                    ),
                    NullifierPolicy::Atomic => {
                        self.state.nullifiers.release(&nullifier);
                    }
                }
            }
            tracing::warn!(
                sender = %tx.sender,
                call = tx.call.name(),
                error = %err,
                "transaction rejected"
            );
        }
        result
    }

    /// The current administrator, if the slot has been claimed.
    pub fn admin(&self) -> Option<AccountId> {
        self.state.access.current().copied()
    }

    pub fn oracle_keys(&self) -> Result<OracleKeys, ConsistencyError> {
        self.state.oracles.get_keys()
    }

    pub fn is_nullifier_spent(&self, nullifier: &Nullifier) -> bool {
        self.state.nullifiers.is_spent(nullifier)
    }

    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.state.balances.balance_of(account)
    }

    pub fn balances(&self) -> &Balances {
        &self.state.balances
    }
}

fn dispatch(
    verifier: &dyn ClaimVerifier,
    state: &mut RuntimeState,
    tx: &Transaction,
) -> Result<CallOutcome, ReliefError> {
    match &tx.call {
        RuntimeCall::SetAdmin => {
            state
                .access
                .claim_administration(tx.sender, &mut state.balances)?;
        }
        RuntimeCall::ChangeAdmin { new_admin } => {
            state.access.change_administration(&tx.sender, *new_admin)?;
        }
        RuntimeCall::SetupPublicKeys { disaster, identity } => {
            state
                .oracles
                .set_keys(&state.access, &tx.sender, *disaster, *identity)?;
        }
        RuntimeCall::Claim { proof } => {
            let payout = ClaimProcessor::new(verifier).submit_claim(
                proof,
                &state.access,
                &state.oracles,
                &mut state.nullifiers,
                &mut state.balances,
            )?;
            return Ok(CallOutcome::Paid(payout));
        }
    }
    Ok(CallOutcome::Done)
}
