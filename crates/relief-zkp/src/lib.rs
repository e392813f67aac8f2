//! # relief-zkp — Claim Proofs
//!
//! Everything between a beneficiary's attestations and the ledger's
//! "is this claim verified" flag.
//!
//! ## Architecture
//!
//! - **Traits** (`traits.rs`): the sealed `ProofSystem` interface every
//!   backend implements.
//!
//! - **Mock** (`mock.rs`): `MockProofSystem`, a keyed deterministic backend.
//!   Not zero-knowledge. Enabled by the default `mock` feature.
//!
//! - **Circuits** (`circuits/`): the dual-oracle claim statement and its
//!   public output.
//!
//! - **Proof** (`proof.rs`): `ClaimProof`, the submitted claim, and
//!   `prove_claim`.
//!
//! - **Verifier** (`verifier.rs`): the object-safe `ClaimVerifier` the
//!   runtime consults.
//!
//! ## Crate Policy
//!
//! - Depends on `relief-core` and `relief-crypto` internally.
//! - Reads no ledger state. Oracle keys in a public output are checked
//!   against the registry by the runtime, not here.

pub mod circuits;
#[cfg(feature = "mock")]
pub mod mock;
pub mod proof;
pub mod traits;
pub mod verifier;

pub use circuits::{
    sign_disaster_attestation, sign_identity_attestation, verify_attestation, ClaimPublicOutput,
    ClaimWitness, DisasterMessage, IdentityMessage, CLAIM_NULLIFIER_DOMAIN,
};
#[cfg(feature = "mock")]
pub use mock::{MockProof, MockProofSystem, MockProvingKey, MockVerifyingKey};
pub use proof::{prove_claim, ClaimProof, ClaimProofError, ProofBytes};
pub use traits::{ProofError, ProofSystem, VerifyError};
pub use verifier::{BoundVerifier, ClaimVerifier};
