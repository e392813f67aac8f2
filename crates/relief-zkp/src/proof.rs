//! # Claim Proofs
//!
//! A [`ClaimProof`] is what a beneficiary submits to the ledger: the public
//! output of the claim circuit plus an opaque backend proof binding it.

use relief_core::{hex, AttestationError, CanonicalBytes, CanonicalizationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::circuits::{verify_attestation, ClaimPublicOutput, ClaimWitness};
use crate::traits::{ProofError, ProofSystem};
use crate::verifier::ClaimVerifier;

/// Backend-agnostic encoded proof. Serializes as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProofBytes(Vec<u8>);

impl ProofBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parse proof bytes from a hex string.
    pub fn from_hex(digits: &str) -> Result<Self, String> {
        hex::decode(digits.trim())
            .map(Self)
            .map_err(|e| format!("invalid proof hex: {e}"))
    }
}

impl Serialize for ProofBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ProofBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// A claim as submitted to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimProof {
    /// Circuit public output the proof binds.
    pub public_output: ClaimPublicOutput,
    /// Encoded backend proof.
    pub proof: ProofBytes,
}

impl ClaimProof {
    /// Whether `verifier` accepts this proof.
    ///
    /// Malformed proofs count as not verified.
    pub fn verified(&self, verifier: &dyn ClaimVerifier) -> bool {
        verifier.verify_claim(self).unwrap_or(false)
    }
}

/// Failure to produce a claim proof.
#[derive(Error, Debug)]
pub enum ClaimProofError {
    /// The witness does not satisfy the claim circuit.
    #[error(transparent)]
    Attestation(#[from] AttestationError),
    /// The backend could not prove.
    #[error(transparent)]
    Proof(#[from] ProofError),
    #[error(transparent)]
    Canonicalization(#[from] CanonicalizationError),
}

/// Run the claim circuit over `witness` and prove its public output.
///
/// The circuit checks run before the backend is invoked, so an invalid
/// attestation never produces a proof.
pub fn prove_claim<P: ProofSystem>(
    system: &P,
    pk: &P::ProvingKey,
    witness: &ClaimWitness,
) -> Result<ClaimProof, ClaimProofError> {
    let public_output = verify_attestation(witness)?;
    let public_inputs = public_output.public_inputs()?;
    let private_inputs = CanonicalBytes::new(witness)?;
    let proof = system.prove(pk, public_inputs.as_bytes(), private_inputs.as_bytes())?;
    Ok(ClaimProof {
        public_output,
        proof: system.encode_proof(&proof),
    })
}
