//! # Claim Verification
//!
//! [`ClaimVerifier`] is the object-safe seam between the ledger and a proof
//! backend. The runtime holds a `Box<dyn ClaimVerifier>` and never names a
//! concrete [`ProofSystem`].

use crate::proof::ClaimProof;
use crate::traits::{ProofSystem, VerifyError};

/// Decides whether a submitted claim proof is verified.
pub trait ClaimVerifier: Send + Sync {
    /// Check `claim.proof` against the canonical bytes of
    /// `claim.public_output`.
    fn verify_claim(&self, claim: &ClaimProof) -> Result<bool, VerifyError>;
}

/// A proof system paired with its verifying key.
pub struct BoundVerifier<P: ProofSystem> {
    system: P,
    vk: P::VerifyingKey,
}

impl<P: ProofSystem> BoundVerifier<P> {
    pub fn new(system: P, vk: P::VerifyingKey) -> Self {
        Self { system, vk }
    }
}

impl<P: ProofSystem> ClaimVerifier for BoundVerifier<P> {
    fn verify_claim(&self, claim: &ClaimProof) -> Result<bool, VerifyError> {
        let public_inputs = claim
            .public_output
            .public_inputs()
            .map_err(|e| VerifyError::InvalidPublicInputs(e.to_string()))?;
        let proof = self.system.decode_proof(&claim.proof)?;
        self.system
            .verify(&self.vk, &proof, public_inputs.as_bytes())
    }
}
