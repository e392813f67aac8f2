//! # Compensation Claim Circuit
//!
//! The statement a beneficiary proves before the ledger pays out:
//!
//! 1. The disaster oracle signed `(disaster_id, session_id, amount, salt)`.
//! 2. The identity oracle signed `(session_id, phone_number, salt)`.
//! 3. The beneficiary owns the nullifier derived under
//!    [`CLAIM_NULLIFIER_DOMAIN`].
//!
//! The two oracle messages are disjoint except for the session id. Neither
//! oracle can authorize a payout alone, and the shared session id stops a
//! disaster attestation for one session from being paired with an identity
//! attestation for another.
//!
//! [`verify_attestation`] is pure. It reads no ledger state and does not
//! trust the oracle keys it is given; the claim processor compares the keys
//! in the resulting public output against the registered oracle keys.
//!
//! Public output:
//! - `disaster_oracle_key`, `identity_oracle_key`: keys the signatures were
//!   checked against.
//! - `amount`: payout.
//! - `nullifier`: replay marker.
//! - `beneficiary`: nullifier holder, who receives the payout.
//!
//! Witness (private): everything in [`ClaimWitness`].

use relief_core::{
    Amount, AttestationError, CanonicalBytes, CanonicalizationError, DisasterId, Nullifier,
    PhoneNumber, Salt, SessionId,
};
use relief_crypto::{
    verify_with_public_key, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature, NullifierWitness,
};
use serde::{Deserialize, Serialize};

/// Domain-separation tag for compensation claim nullifiers.
///
/// Changing this value orphans every nullifier already marked spent.
pub const CLAIM_NULLIFIER_DOMAIN: &str = "relief:compensation-claim:v1";

/// The message signed by the disaster oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisasterMessage {
    /// Declared disaster.
    pub disaster_id: DisasterId,
    /// Beneficiary session.
    pub session_id: SessionId,
    /// Authorized payout.
    pub amount: Amount,
    /// Oracle salt.
    pub salt: Salt,
}

/// The message signed by the identity (phone) oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityMessage {
    /// Beneficiary session.
    pub session_id: SessionId,
    /// Verified phone number.
    pub phone_number: PhoneNumber,
    /// Oracle salt.
    pub salt: Salt,
}

/// Sign a disaster attestation with the disaster oracle key.
pub fn sign_disaster_attestation(
    oracle: &Ed25519KeyPair,
    message: &DisasterMessage,
) -> Result<Ed25519Signature, CanonicalizationError> {
    Ok(oracle.sign(&CanonicalBytes::new(message)?))
}

/// Sign an identity attestation with the identity oracle key.
pub fn sign_identity_attestation(
    oracle: &Ed25519KeyPair,
    message: &IdentityMessage,
) -> Result<Ed25519Signature, CanonicalizationError> {
    Ok(oracle.sign(&CanonicalBytes::new(message)?))
}

/// Private inputs of the claim circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimWitness {
    /// Key the disaster attestation is checked against.
    pub disaster_oracle_key: Ed25519PublicKey,
    /// Key the identity attestation is checked against.
    pub identity_oracle_key: Ed25519PublicKey,
    /// Declared disaster.
    pub disaster_id: DisasterId,
    /// Beneficiary session shared by both attestations.
    pub session_id: SessionId,
    /// Authorized payout.
    pub amount: Amount,
    /// Disaster oracle salt.
    pub disaster_salt: Salt,
    /// Disaster oracle signature.
    pub disaster_signature: Ed25519Signature,
    /// Verified phone number.
    pub phone_number: PhoneNumber,
    /// Identity oracle salt.
    pub phone_salt: Salt,
    /// Identity oracle signature.
    pub phone_signature: Ed25519Signature,
    /// Beneficiary nullifier material.
    pub nullifier: NullifierWitness,
}

impl ClaimWitness {
    /// The disaster oracle message this witness claims was signed.
    pub fn disaster_message(&self) -> DisasterMessage {
        DisasterMessage {
            disaster_id: self.disaster_id,
            session_id: self.session_id,
            amount: self.amount,
            salt: self.disaster_salt,
        }
    }

    /// The identity oracle message this witness claims was signed.
    pub fn identity_message(&self) -> IdentityMessage {
        IdentityMessage {
            session_id: self.session_id,
            phone_number: self.phone_number.clone(),
            salt: self.phone_salt,
        }
    }
}

/// Public output of a verified claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimPublicOutput {
    /// Disaster oracle key the attestation was verified under.
    pub disaster_oracle_key: Ed25519PublicKey,
    /// Identity oracle key the attestation was verified under.
    pub identity_oracle_key: Ed25519PublicKey,
    /// Payout amount.
    pub amount: Amount,
    /// Replay marker.
    pub nullifier: Nullifier,
    /// Account credited with the payout.
    pub beneficiary: Ed25519PublicKey,
}

impl ClaimPublicOutput {
    /// Canonical bytes a proof over this output binds to.
    pub fn public_inputs(&self) -> Result<CanonicalBytes, CanonicalizationError> {
        CanonicalBytes::new(self)
    }
}

/// Run the claim circuit checks.
///
/// # Errors
///
/// - [`AttestationError::InvalidDisasterAttestation`] if the disaster
///   signature does not verify under `disaster_oracle_key`.
/// - [`AttestationError::InvalidIdentityAttestation`] if the phone signature
///   does not verify under `identity_oracle_key`.
/// - [`AttestationError::InvalidNullifierBinding`] if the nullifier witness
///   does not verify under [`CLAIM_NULLIFIER_DOMAIN`].
pub fn verify_attestation(witness: &ClaimWitness) -> Result<ClaimPublicOutput, AttestationError> {
    let disaster_message = CanonicalBytes::new(&witness.disaster_message())
        .map_err(|_| AttestationError::InvalidDisasterAttestation)?;
    verify_with_public_key(
        &disaster_message,
        &witness.disaster_signature,
        &witness.disaster_oracle_key,
    )
    .map_err(|_| AttestationError::InvalidDisasterAttestation)?;

    let identity_message = CanonicalBytes::new(&witness.identity_message())
        .map_err(|_| AttestationError::InvalidIdentityAttestation)?;
    verify_with_public_key(
        &identity_message,
        &witness.phone_signature,
        &witness.identity_oracle_key,
    )
    .map_err(|_| AttestationError::InvalidIdentityAttestation)?;

    let nullifier = witness
        .nullifier
        .verify(CLAIM_NULLIFIER_DOMAIN)
        .map_err(|_| AttestationError::InvalidNullifierBinding)?;

    Ok(ClaimPublicOutput {
        disaster_oracle_key: witness.disaster_oracle_key,
        identity_oracle_key: witness.identity_oracle_key,
        amount: witness.amount,
        nullifier,
        beneficiary: witness.nullifier.public_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        disaster_oracle: Ed25519KeyPair,
        identity_oracle: Ed25519KeyPair,
        beneficiary: Ed25519KeyPair,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                disaster_oracle: Ed25519KeyPair::from_seed(&[1u8; 32]),
                identity_oracle: Ed25519KeyPair::from_seed(&[2u8; 32]),
                beneficiary: Ed25519KeyPair::from_seed(&[3u8; 32]),
            }
        }

        fn witness(&self) -> ClaimWitness {
            let disaster = DisasterMessage {
                disaster_id: DisasterId(1),
                session_id: SessionId(2),
                amount: Amount::new(3),
                salt: Salt(4),
            };
            let identity = IdentityMessage {
                session_id: SessionId(2),
                phone_number: PhoneNumber("5".to_string()),
                salt: Salt(6),
            };
            ClaimWitness {
                disaster_oracle_key: self.disaster_oracle.public_key(),
                identity_oracle_key: self.identity_oracle.public_key(),
                disaster_id: disaster.disaster_id,
                session_id: disaster.session_id,
                amount: disaster.amount,
                disaster_salt: disaster.salt,
                disaster_signature: sign_disaster_attestation(&self.disaster_oracle, &disaster)
                    .unwrap(),
                phone_number: identity.phone_number.clone(),
                phone_salt: identity.salt,
                phone_signature: sign_identity_attestation(&self.identity_oracle, &identity)
                    .unwrap(),
                nullifier: NullifierWitness::create(&self.beneficiary, CLAIM_NULLIFIER_DOMAIN)
                    .unwrap(),
            }
        }
    }

    #[test]
    fn test_valid_witness_produces_output() {
        let fx = Fixture::new();
        let output = verify_attestation(&fx.witness()).unwrap();
        assert_eq!(output.amount, Amount::new(3));
        assert_eq!(output.disaster_oracle_key, fx.disaster_oracle.public_key());
        assert_eq!(output.identity_oracle_key, fx.identity_oracle.public_key());
        assert_eq!(output.beneficiary, fx.beneficiary.public_key());
    }

    #[test]
    fn test_deterministic_output() {
        let fx = Fixture::new();
        let a = verify_attestation(&fx.witness()).unwrap();
        let b = verify_attestation(&fx.witness()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_inflated_amount_rejected() {
        let fx = Fixture::new();
        let mut w = fx.witness();
        w.amount = Amount::new(3_000);
        assert_eq!(
            verify_attestation(&w),
            Err(AttestationError::InvalidDisasterAttestation)
        );
    }

    #[test]
    fn test_disaster_signature_under_wrong_key_rejected() {
        let fx = Fixture::new();
        let mut w = fx.witness();
        w.disaster_oracle_key = fx.identity_oracle.public_key();
        assert_eq!(
            verify_attestation(&w),
            Err(AttestationError::InvalidDisasterAttestation)
        );
    }

    #[test]
    fn test_session_mismatch_rejected_by_identity_check() {
        let fx = Fixture::new();
        let mut w = fx.witness();
        // Re-sign the disaster message for another session; the identity
        // attestation still covers session 2.
        w.session_id = SessionId(99);
        w.disaster_signature =
            sign_disaster_attestation(&fx.disaster_oracle, &w.disaster_message()).unwrap();
        assert_eq!(
            verify_attestation(&w),
            Err(AttestationError::InvalidIdentityAttestation)
        );
    }

    #[test]
    fn test_phone_number_tamper_rejected() {
        let fx = Fixture::new();
        let mut w = fx.witness();
        w.phone_number = PhoneNumber("6".to_string());
        assert_eq!(
            verify_attestation(&w),
            Err(AttestationError::InvalidIdentityAttestation)
        );
    }

    #[test]
    fn test_redirected_beneficiary_rejected() {
        let fx = Fixture::new();
        let mut w = fx.witness();
        w.nullifier.public_key = Ed25519KeyPair::generate().public_key();
        assert_eq!(
            verify_attestation(&w),
            Err(AttestationError::InvalidNullifierBinding)
        );
    }

    #[test]
    fn test_nullifier_bound_to_claim_domain() {
        let fx = Fixture::new();
        let mut w = fx.witness();
        w.nullifier = NullifierWitness::create(&fx.beneficiary, "some-other-claim-type").unwrap();
        assert_eq!(
            verify_attestation(&w),
            Err(AttestationError::InvalidNullifierBinding)
        );
    }

    #[test]
    fn test_same_beneficiary_same_nullifier_across_sessions() {
        let fx = Fixture::new();
        let first = verify_attestation(&fx.witness()).unwrap();

        let mut w = fx.witness();
        w.session_id = SessionId(7);
        w.disaster_signature =
            sign_disaster_attestation(&fx.disaster_oracle, &w.disaster_message()).unwrap();
        w.phone_signature =
            sign_identity_attestation(&fx.identity_oracle, &w.identity_message()).unwrap();
        let second = verify_attestation(&w).unwrap();

        assert_eq!(first.nullifier, second.nullifier);
    }
}
