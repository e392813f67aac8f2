//! # Circuits
//!
//! Statement definitions checked before a proof is produced.
//!
//! - [`claim`]: dual-oracle compensation claim. Verifies the disaster and
//!   identity oracle attestations and derives the claim nullifier.

pub mod claim;

pub use claim::{
    sign_disaster_attestation, sign_identity_attestation, verify_attestation, ClaimPublicOutput,
    ClaimWitness, DisasterMessage, IdentityMessage, CLAIM_NULLIFIER_DOMAIN,
};
