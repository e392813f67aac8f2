//! # Claim Processor
//!
//! Pays out a verified compensation claim. The checks run in a fixed order
//! and the first failure aborts the claim:
//!
//! 1. The proof is verified.
//! 2. Both oracle keys in the public output match the registry.
//! 3. The nullifier was unspent. It is marked spent here, before any funds
//!    move.
//! 4. `amount` moves from the administrator to the beneficiary.
//!
//! The processor trusts a verified proof and never re-runs the signature
//! checks of the claim circuit.

use relief_core::{Amount, ConsistencyError, Nullifier, OracleKind, ReliefError, ReplayError};
use relief_zkp::{ClaimProof, ClaimVerifier};
use serde::{Deserialize, Serialize};

use crate::admin::AdminGuard;
use crate::balances::{AccountId, Transferable};
use crate::nullifier::{NullifierLedger, NullifierState};
use crate::oracle::OracleRegistry;

/// A completed payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimPayout {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Amount,
    pub nullifier: Nullifier,
}

/// Processes claims against a fixed proof verifier.
pub struct ClaimProcessor<'a> {
    verifier: &'a dyn ClaimVerifier,
}

impl<'a> ClaimProcessor<'a> {
    pub fn new(verifier: &'a dyn ClaimVerifier) -> Self {
        Self { verifier }
    }

    /// Run the claim checks and pay out.
    ///
    /// On a funds failure the nullifier is already marked in `nullifiers`;
    /// whether that mark survives is up to the caller's commit policy.
    pub fn submit_claim(
        &self,
        claim: &ClaimProof,
        guard: &impl AdminGuard,
        oracles: &OracleRegistry,
        nullifiers: &mut NullifierLedger,
        ledger: &mut impl Transferable,
    ) -> Result<ClaimPayout, ReliefError> {
        if !claim.verified(self.verifier) {
            return Err(ConsistencyError::UnverifiedProof.into());
        }

        let output = &claim.public_output;
        let keys = oracles.get_keys()?;
        if output.disaster_oracle_key != keys.disaster {
            return Err(ConsistencyError::UnknownOracleKey(OracleKind::Disaster).into());
        }
        if output.identity_oracle_key != keys.identity {
            return Err(ConsistencyError::UnknownOracleKey(OracleKind::Identity).into());
        }

        let from = guard.admin()?;

        if nullifiers.check_and_mark(output.nullifier) == NullifierState::Spent {
            return Err(ReplayError::NullifierAlreadyUsed.into());
        }

        ledger.transfer(&from, &output.beneficiary, output.amount)?;

        let payout = ClaimPayout {
            from,
            to: output.beneficiary,
            amount: output.amount,
            nullifier: output.nullifier,
        };
        tracing::info!(
            beneficiary = %payout.to,
            amount = %payout.amount,
            nullifier = %payout.nullifier.to_hex(),
            "claim paid"
        );
        Ok(payout)
    }
}
