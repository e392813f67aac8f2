//! # Nullifier Witnesses
//!
//! A nullifier is a deterministic 32-byte value that marks one claim as
//! exercised without revealing the beneficiary's secret key.
//!
//! ## Derivation
//!
//! ```text
//! binding   = Sign(sk, JCS({"domain": tag, "public_key": pk, "purpose": "binding"}))
//! nullifier = SHA256(JCS({"domain": tag, "public_key": pk, "purpose": "nullifier"}))
//! ```
//!
//! The witness carries `pk` and `binding`. Verifying the binding proves the
//! holder knows `sk` for `pk`; the nullifier then depends only on
//! `(pk, tag)`, so the same holder always derives the same nullifier under
//! the same tag, no matter how many different signatures they produce.
//!
//! ## Security Invariant
//!
//! The domain tag is part of both preimages. A nullifier derived under one
//! tag can never collide with one derived under another, and changing the
//! tag of a live deployment makes every previously spent nullifier
//! unreachable.

use relief_core::{sha256_digest, CanonicalBytes, CanonicalizationError, CryptoError, Nullifier};
use serde::{Deserialize, Serialize};

use crate::ed25519::{verify_with_public_key, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};

#[derive(Serialize)]
struct NullifierPreimage<'a> {
    domain: &'a str,
    public_key: &'a Ed25519PublicKey,
    purpose: &'static str,
}

impl<'a> NullifierPreimage<'a> {
    fn binding(domain: &'a str, public_key: &'a Ed25519PublicKey) -> Self {
        Self {
            domain,
            public_key,
            purpose: "binding",
        }
    }

    fn nullifier(domain: &'a str, public_key: &'a Ed25519PublicKey) -> Self {
        Self {
            domain,
            public_key,
            purpose: "nullifier",
        }
    }
}

/// Secret-derived material proving ownership of a nullifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullifierWitness {
    /// The holder's public key. Also the claim beneficiary.
    pub public_key: Ed25519PublicKey,
    /// Signature by the holder's secret key over the binding preimage.
    pub binding: Ed25519Signature,
}

impl NullifierWitness {
    /// Produce a witness for `domain` from the holder's key pair.
    pub fn create(keypair: &Ed25519KeyPair, domain: &str) -> Result<Self, CanonicalizationError> {
        let public_key = keypair.public_key();
        let message = CanonicalBytes::new(&NullifierPreimage::binding(domain, &public_key))?;
        Ok(Self {
            binding: keypair.sign(&message),
            public_key,
        })
    }

    /// Check the binding signature and return the derived nullifier.
    ///
    /// # Errors
    ///
    /// `CryptoError::VerificationFailed` if the binding was not produced by
    /// the secret key for `public_key` under `domain`.
    pub fn verify(&self, domain: &str) -> Result<Nullifier, CryptoError> {
        let message = CanonicalBytes::new(&NullifierPreimage::binding(domain, &self.public_key))
            .map_err(|e| CryptoError::VerificationFailed(e.to_string()))?;
        verify_with_public_key(&message, &self.binding, &self.public_key)?;
        derive_nullifier(&self.public_key, domain)
            .map_err(|e| CryptoError::VerificationFailed(e.to_string()))
    }
}

/// Derive the nullifier for `public_key` under `domain`.
pub fn derive_nullifier(
    public_key: &Ed25519PublicKey,
    domain: &str,
) -> Result<Nullifier, CanonicalizationError> {
    let preimage = CanonicalBytes::new(&NullifierPreimage::nullifier(domain, public_key))?;
    Ok(Nullifier::from_bytes(sha256_digest(&preimage).bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAG: &str = "test:claim";

    #[test]
    fn test_witness_verifies_and_derives() {
        let kp = Ed25519KeyPair::from_seed(&[7u8; 32]);
        let witness = NullifierWitness::create(&kp, TAG).unwrap();
        let nullifier = witness.verify(TAG).unwrap();
        assert_eq!(nullifier, derive_nullifier(&kp.public_key(), TAG).unwrap());
    }

    #[test]
    fn test_same_holder_same_nullifier() {
        let kp = Ed25519KeyPair::from_seed(&[7u8; 32]);
        let a = NullifierWitness::create(&kp, TAG).unwrap().verify(TAG).unwrap();
        let b = NullifierWitness::create(&kp, TAG).unwrap().verify(TAG).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_holders_different_nullifiers() {
        let a = NullifierWitness::create(&Ed25519KeyPair::generate(), TAG)
            .unwrap()
            .verify(TAG)
            .unwrap();
        let b = NullifierWitness::create(&Ed25519KeyPair::generate(), TAG)
            .unwrap()
            .verify(TAG)
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_domain_separation() {
        let kp = Ed25519KeyPair::from_seed(&[9u8; 32]);
        let pk = kp.public_key();
        assert_ne!(
            derive_nullifier(&pk, "a").unwrap(),
            derive_nullifier(&pk, "b").unwrap()
        );
        let witness = NullifierWitness::create(&kp, "a").unwrap();
        assert!(witness.verify("b").is_err());
    }

    #[test]
    fn test_binding_for_other_key_rejected() {
        let holder = Ed25519KeyPair::generate();
        let victim = Ed25519KeyPair::generate();
        let mut witness = NullifierWitness::create(&holder, TAG).unwrap();
        witness.public_key = victim.public_key();
        assert!(witness.verify(TAG).is_err());
    }

    #[test]
    fn test_witness_serde_roundtrip() {
        let witness = NullifierWitness::create(&Ed25519KeyPair::generate(), TAG).unwrap();
        let json = serde_json::to_string(&witness).unwrap();
        let back: NullifierWitness = serde_json::from_str(&json).unwrap();
        assert_eq!(witness, back);
    }
}
