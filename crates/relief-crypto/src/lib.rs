//! # relief-crypto — Cryptographic Primitives
//!
//! - **Ed25519** keys and signatures. Oracle attestations, nullifier
//!   bindings, and account identities all use them.
//! - **Nullifier witnesses**: domain-separated, deterministic nullifier
//!   derivation with a proof of key ownership.
//!
//! ## Crate Policy
//!
//! - Depends only on `relief-core` internally.
//! - No mocking of cryptographic operations in tests. All tests use real
//!   `CanonicalBytes`, real SHA-256, real Ed25519.

pub mod ed25519;
pub mod nullifier;

pub use ed25519::{
    verify, verify_with_public_key, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature,
};
pub use nullifier::{derive_nullifier, NullifierWitness};
