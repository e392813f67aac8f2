//! # Proof System Trait (Sealed)
//!
//! The abstraction every claim proof backend implements. The runtime never
//! sees a backend directly; it only asks a [`ClaimVerifier`] whether a
//! submitted proof is verified.
//!
//! ## Sealed Trait
//!
//! `ProofSystem` is sealed: only backends defined inside `relief-zkp` can
//! implement it. A downstream crate cannot register a backend that accepts
//! arbitrary proofs.
//!
//! [`ClaimVerifier`]: crate::verifier::ClaimVerifier

use thiserror::Error;

use crate::proof::ProofBytes;

/// Error during proof generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// The circuit inputs are invalid or missing.
    #[error("invalid circuit inputs: {0}")]
    InvalidInputs(String),
    /// Proof generation failed internally.
    #[error("proof generation failed: {0}")]
    GenerationFailed(String),
}

/// Error during proof verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The proof is structurally malformed.
    #[error("malformed proof: {0}")]
    MalformedProof(String),
    /// The public inputs could not be reconstructed.
    #[error("invalid public inputs: {0}")]
    InvalidPublicInputs(String),
}

mod private {
    pub trait Sealed {}
}

/// Sealed interface for a claim proof backend.
pub trait ProofSystem: private::Sealed + Send + Sync {
    /// The proof type produced by this system.
    type Proof: Clone + std::fmt::Debug;
    /// The verifying key type.
    type VerifyingKey: Clone + Send + Sync;
    /// The proving key type.
    type ProvingKey;

    /// Generate a proof binding `public_inputs`.
    ///
    /// `private_inputs` is the canonical witness; backends with a real
    /// constraint system consume it, the mock ignores it.
    fn prove(
        &self,
        pk: &Self::ProvingKey,
        public_inputs: &[u8],
        private_inputs: &[u8],
    ) -> Result<Self::Proof, ProofError>;

    /// Verify a proof against public inputs.
    ///
    /// `Ok(false)` means well-formed but invalid.
    fn verify(
        &self,
        vk: &Self::VerifyingKey,
        proof: &Self::Proof,
        public_inputs: &[u8],
    ) -> Result<bool, VerifyError>;

    /// Encode a proof for transport inside a claim transaction.
    fn encode_proof(&self, proof: &Self::Proof) -> ProofBytes;

    /// Decode a transported proof.
    fn decode_proof(&self, bytes: &ProofBytes) -> Result<Self::Proof, VerifyError>;
}

#[cfg(feature = "mock")]
impl private::Sealed for crate::mock::MockProofSystem {}
