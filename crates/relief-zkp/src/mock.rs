//! # Mock Proof System
//!
//! A deterministic, keyed proof backend for development and testing.
//!
//! ## How It Works
//!
//! ```text
//! proof = SHA256( JCS({"key": hex(setup_secret), "public_inputs": hex(public_inputs)}) )
//! ```
//!
//! The setup secret is shared by the proving and verifying keys, so only a
//! holder of the proving key can produce a proof the ledger accepts. The
//! prover runs the claim circuit checks before proving; see
//! [`prove_claim`](crate::proof::prove_claim).
//!
//! ## Security Warning
//!
//! **NOT ZERO-KNOWLEDGE, NOT PUBLICLY VERIFIABLE.** The verifier holds the
//! same secret as the prover. This backend stands in for a real proof
//! system and must not be deployed where the prover is untrusted.

use relief_core::{hex, sha256_digest, CanonicalBytes};
use serde::Serialize;

use crate::proof::ProofBytes;
use crate::traits::{ProofError, ProofSystem, VerifyError};

/// A mock proof: a 32-byte keyed digest of the public inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockProof(pub [u8; 32]);

/// Mock proving key.
#[derive(Clone)]
pub struct MockProvingKey {
    secret: [u8; 32],
}

/// Mock verifying key.
#[derive(Clone)]
pub struct MockVerifyingKey {
    secret: [u8; 32],
}

impl std::fmt::Debug for MockProvingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockProvingKey(<private>)")
    }
}

impl std::fmt::Debug for MockVerifyingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockVerifyingKey(<private>)")
    }
}

#[derive(Serialize)]
struct MockTranscript {
    key: String,
    public_inputs: String,
}

/// Deterministic keyed mock proof system.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockProofSystem;

impl MockProofSystem {
    /// Derive a matching key pair from a setup seed.
    pub fn setup(seed: [u8; 32]) -> (MockProvingKey, MockVerifyingKey) {
        (
            MockProvingKey { secret: seed },
            MockVerifyingKey { secret: seed },
        )
    }

    fn transcript_digest(secret: &[u8; 32], public_inputs: &[u8]) -> Result<[u8; 32], String> {
        let transcript = MockTranscript {
            key: hex::encode(secret),
            public_inputs: hex::encode(public_inputs),
        };
        let canonical = CanonicalBytes::new(&transcript).map_err(|e| e.to_string())?;
        Ok(sha256_digest(&canonical).bytes)
    }
}

impl ProofSystem for MockProofSystem {
    type Proof = MockProof;
    type VerifyingKey = MockVerifyingKey;
    type ProvingKey = MockProvingKey;

    fn prove(
        &self,
        pk: &Self::ProvingKey,
        public_inputs: &[u8],
        _private_inputs: &[u8],
    ) -> Result<Self::Proof, ProofError> {
        Self::transcript_digest(&pk.secret, public_inputs)
            .map(MockProof)
            .map_err(ProofError::GenerationFailed)
    }

    fn verify(
        &self,
        vk: &Self::VerifyingKey,
        proof: &Self::Proof,
        public_inputs: &[u8],
    ) -> Result<bool, VerifyError> {
        let expected = Self::transcript_digest(&vk.secret, public_inputs)
            .map_err(VerifyError::InvalidPublicInputs)?;
        Ok(proof.0 == expected)
    }

    fn encode_proof(&self, proof: &Self::Proof) -> ProofBytes {
        ProofBytes::new(proof.0.to_vec())
    }

    fn decode_proof(&self, bytes: &ProofBytes) -> Result<Self::Proof, VerifyError> {
        let raw = bytes.as_bytes();
        if raw.len() != 32 {
            return Err(VerifyError::MalformedProof(format!(
                "expected 32 bytes, got {}",
                raw.len()
            )));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(raw);
        Ok(MockProof(arr))
    }
}
