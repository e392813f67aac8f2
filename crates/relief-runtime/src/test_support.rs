//! Claim fixtures shared by the unit tests.

use relief_core::{Amount, DisasterId, PhoneNumber, Salt, SessionId};
use relief_crypto::{Ed25519KeyPair, NullifierWitness};
use relief_zkp::{
    prove_claim, sign_disaster_attestation, sign_identity_attestation, BoundVerifier, ClaimProof,
    ClaimWitness, DisasterMessage, IdentityMessage, MockProofSystem, CLAIM_NULLIFIER_DOMAIN,
};

pub const ADMIN_SEED: u8 = 100;
const PROOF_SETUP_SEED: [u8; 32] = [77u8; 32];

pub struct ClaimFixture {
    pub disaster_oracle: Ed25519KeyPair,
    pub identity_oracle: Ed25519KeyPair,
    pub beneficiary: Ed25519KeyPair,
}

impl ClaimFixture {
    pub fn new() -> Self {
        Self {
            disaster_oracle: Ed25519KeyPair::from_seed(&[1u8; 32]),
            identity_oracle: Ed25519KeyPair::from_seed(&[2u8; 32]),
            beneficiary: Ed25519KeyPair::from_seed(&[3u8; 32]),
        }
    }

    pub fn with_disaster_oracle(oracle: Ed25519KeyPair) -> Self {
        Self {
            disaster_oracle: oracle,
            ..Self::new()
        }
    }

    pub fn with_identity_oracle(oracle: Ed25519KeyPair) -> Self {
        Self {
            identity_oracle: oracle,
            ..Self::new()
        }
    }

    pub fn verifier(&self) -> BoundVerifier<MockProofSystem> {
        let (_, vk) = MockProofSystem::setup(PROOF_SETUP_SEED);
        BoundVerifier::new(MockProofSystem, vk)
    }

    /// A proven claim paying `amount` to the fixture beneficiary.
    pub fn claim(&self, amount: u64) -> ClaimProof {
        self.claim_for(&self.beneficiary, amount)
    }

    /// A proven claim paying `amount` to `beneficiary`.
    pub fn claim_for(&self, beneficiary: &Ed25519KeyPair, amount: u64) -> ClaimProof {
        let disaster = DisasterMessage {
            disaster_id: DisasterId(1),
            session_id: SessionId(2),
            amount: Amount::new(amount),
            salt: Salt(4),
        };
        let identity = IdentityMessage {
            session_id: SessionId(2),
            phone_number: PhoneNumber("5".to_string()),
            salt: Salt(6),
        };
        let witness = ClaimWitness {
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
            phone_signature: sign_identity_attestation(&self.identity_oracle, &identity).unwrap(),
            nullifier: NullifierWitness::create(beneficiary, CLAIM_NULLIFIER_DOMAIN).unwrap(),
        };
        let (pk, _) = MockProofSystem::setup(PROOF_SETUP_SEED);
        prove_claim(&MockProofSystem, &pk, &witness).unwrap()
    }
}
