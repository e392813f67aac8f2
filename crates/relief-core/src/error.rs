//! # Error Types — Structured Error Hierarchy
//!
//! All errors use `thiserror`. The five transaction-level families map
//! one-to-one onto the ways a relief transaction can be rejected:
//!
//! | Family | Raised by |
//! |---|---|
//! | [`GovernanceError`] | administrator slot operations and admin guards |
//! | [`AttestationError`] | the claim circuit (oracle signatures, nullifier binding) |
//! | [`ReplayError`] | the nullifier ledger |
//! | [`ConsistencyError`] | claim processing cross-checks |
//! | [`FundsError`] | the balances ledger |
//!
//! The `Display` output of each variant is the status message recorded on
//! a failed transaction receipt. Several of these strings are relied on by
//! clients and must not change.

use thiserror::Error;

use crate::identity::Amount;

/// Top-level error for any rejected relief transaction.
///
/// Every variant is `transparent` so the receipt message is exactly the
/// message of the underlying family error.
#[derive(Error, Debug)]
pub enum ReliefError {
    /// Administrator slot rejection.
    #[error(transparent)]
    Governance(#[from] GovernanceError),

    /// Oracle attestation or nullifier binding rejection.
    #[error(transparent)]
    Attestation(#[from] AttestationError),

    /// Nullifier replay.
    #[error(transparent)]
    Replay(#[from] ReplayError),

    /// Proof or oracle key mismatch against chain state.
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    /// Balance ledger rejection.
    #[error(transparent)]
    Funds(#[from] FundsError),
}

/// Administrator slot errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    /// The administrator slot is already set.
    #[error("Admin key is already set")]
    AlreadyInitialized,

    /// The sender is not the current administrator.
    #[error("You are not the admin")]
    Unauthorized,

    /// No administrator has been set yet.
    #[error("No admin key set !")]
    Uninitialized,
}

/// Claim circuit errors. Each one is a hard stop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttestationError {
    /// The disaster oracle signature does not verify.
    #[error("Invalid disaster oracle authorization")]
    InvalidDisasterAttestation,

    /// The phone (identity) oracle signature does not verify.
    #[error("Invalid phone oracle authorization")]
    InvalidIdentityAttestation,

    /// The nullifier witness does not satisfy the derivation relation.
    #[error("Invalid nullifier binding")]
    InvalidNullifierBinding,
}

/// Replay protection errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The nullifier has already been marked spent.
    #[error("Nullifier has already been used")]
    NullifierAlreadyUsed,
}

/// Which oracle a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OracleKind {
    /// The "disaster occurred" oracle.
    Disaster,
    /// The phone number / identity oracle.
    Identity,
}

impl std::fmt::Display for OracleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disaster => f.write_str("disaster"),
            Self::Identity => f.write_str("phone"),
        }
    }
}

/// Errors raised when a claim proof disagrees with chain state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    /// The proof was built against an oracle key that is not registered.
    #[error("Unknown {0}OraclePublicKey from proof")]
    UnknownOracleKey(OracleKind),

    /// The proof did not verify.
    #[error("Claim proof is not verified")]
    UnverifiedProof,

    /// One or both oracle keys have not been configured.
    #[error("Oracle public keys are not set")]
    OracleKeysUninitialized,
}

/// Balance ledger errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FundsError {
    /// The sender cannot cover the transfer.
    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientFunds {
        /// Sender balance at the time of the transfer.
        available: Amount,
        /// Amount requested.
        required: Amount,
    },

    /// Minting would exceed the configured total supply.
    #[error("Total supply exceeded: requested {requested}, remaining {remaining}")]
    SupplyExceeded {
        /// Amount requested.
        requested: Amount,
        /// Supply still available for issuance.
        remaining: Amount,
    },

    /// A balance would exceed `u64::MAX`.
    #[error("Balance overflow")]
    Overflow,
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Floats are not permitted; amounts and identifiers are integers or strings.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error in key or signature handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Signature verification failed.
    #[error("signature verification failed: {0}")]
    VerificationFailed(String),

    /// Key generation or parsing failed.
    #[error("key error: {0}")]
    KeyError(String),
}
