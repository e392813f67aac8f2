//! # relief-core — Foundational Types for the Relief Ledger
//!
//! This crate is the leaf of the workspace dependency graph. It defines the
//! primitives every other crate builds on: the canonical byte pipeline that
//! all signed oracle messages flow through, content digests, the claim
//! newtypes, and the error taxonomy whose `Display` strings form the
//! observable status messages of rejected transactions.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for claim data.** `DisasterId`, `SessionId`, `Salt`,
//!    `PhoneNumber`, `Amount`, `Nullifier` are distinct types. A session id
//!    cannot be passed where a disaster id is expected.
//!
//! 2. **`CanonicalBytes` newtype.** Every oracle message is signed and
//!    verified over `CanonicalBytes`, never over ad-hoc byte layouts.
//!
//! 3. **One error family per concern.** Governance, attestation, replay,
//!    consistency, and funds failures are separate enums aggregated by
//!    [`ReliefError`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `relief-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod hex;
pub mod identity;
pub mod temporal;

pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest};
pub use error::{
    AttestationError, CanonicalizationError, ConsistencyError, CryptoError, FundsError,
    GovernanceError, OracleKind, ReliefError, ReplayError,
};
pub use identity::{Amount, DisasterId, Nullifier, PhoneNumber, Salt, SessionId};
pub use hex::HexError;
pub use temporal::Timestamp;
