//! Shared fixtures: oracle keys, beneficiaries, proven claims, and a
//! configured chain.

#![allow(dead_code)]

use relief_core::{Amount, DisasterId, PhoneNumber, Salt, SessionId};
use relief_crypto::{Ed25519KeyPair, Ed25519PublicKey, NullifierWitness};
use relief_runtime::{AppChain, RuntimeCall, RuntimeConfig, Transaction, TxReceipt};
use relief_zkp::{
    prove_claim, sign_disaster_attestation, sign_identity_attestation, BoundVerifier, ClaimProof,
    ClaimWitness, DisasterMessage, IdentityMessage, MockProofSystem, CLAIM_NULLIFIER_DOMAIN,
};

pub const PROOF_SEED: [u8; 32] = [0x5e; 32];

pub fn keypair(seed: u8) -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed(&[seed; 32])
}

pub fn account(seed: u8) -> Ed25519PublicKey {
    keypair(seed).public_key()
}

pub struct World {
    pub admin: Ed25519KeyPair,
    pub disaster_oracle: Ed25519KeyPair,
    pub identity_oracle: Ed25519KeyPair,
}

impl World {
    pub fn new() -> Self {
        Self {
            admin: keypair(100),
            disaster_oracle: keypair(1),
            identity_oracle: keypair(2),
        }
    }

    /// A witness for `beneficiary` signed by this world's oracles.
    pub fn witness(&self, beneficiary: &Ed25519KeyPair, session: u64, amount: u64) -> ClaimWitness {
        self.witness_signed_by(
            &self.disaster_oracle,
            &self.identity_oracle,
            beneficiary,
            session,
            amount,
        )
    }

    pub fn witness_signed_by(
        &self,
        disaster_oracle: &Ed25519KeyPair,
        identity_oracle: &Ed25519KeyPair,
        beneficiary: &Ed25519KeyPair,
        session: u64,
        amount: u64,
    ) -> ClaimWitness {
        let disaster = DisasterMessage {
            disaster_id: DisasterId(1),
            session_id: SessionId(session),
            amount: Amount::new(amount),
            salt: Salt(41),
        };
        let identity = IdentityMessage {
            session_id: SessionId(session),
            phone_number: PhoneNumber(format!("+1555000{session}")),
            salt: Salt(42),
        };
        ClaimWitness {
            disaster_oracle_key: disaster_oracle.public_key(),
            identity_oracle_key: identity_oracle.public_key(),
            disaster_id: disaster.disaster_id,
            session_id: disaster.session_id,
            amount: disaster.amount,
            disaster_salt: disaster.salt,
            disaster_signature: sign_disaster_attestation(disaster_oracle, &disaster).unwrap(),
            phone_number: identity.phone_number.clone(),
            phone_salt: identity.salt,
            phone_signature: sign_identity_attestation(identity_oracle, &identity).unwrap(),
            nullifier: NullifierWitness::create(beneficiary, CLAIM_NULLIFIER_DOMAIN).unwrap(),
        }
    }

    pub fn claim(&self, beneficiary: &Ed25519KeyPair, session: u64, amount: u64) -> ClaimProof {
        prove(&self.witness(beneficiary, session, amount))
    }

    pub fn chain(&self, config: RuntimeConfig) -> AppChain {
        let (_, vk) = MockProofSystem::setup(PROOF_SEED);
        AppChain::new(config, Box::new(BoundVerifier::new(MockProofSystem, vk))).unwrap()
    }

    /// A chain with the administrator set and both oracle keys registered.
    pub fn configured_chain(&self, config: RuntimeConfig) -> AppChain {
        let mut chain = self.chain(config);
        let admin = self.admin.public_key();
        chain.submit(Transaction::new(admin, RuntimeCall::SetAdmin));
        chain.submit(Transaction::new(
            admin,
            RuntimeCall::SetupPublicKeys {
                disaster: self.disaster_oracle.public_key(),
                identity: self.identity_oracle.public_key(),
            },
        ));
        let block = chain.produce_block();
        assert!(block.txs.iter().all(|r| r.status), "setup failed: {:?}", block.txs);
        chain
    }
}

pub fn prove(witness: &ClaimWitness) -> ClaimProof {
    let (pk, _) = MockProofSystem::setup(PROOF_SEED);
    prove_claim(&MockProofSystem, &pk, witness).unwrap()
}

/// Submit one transaction in its own block and return its receipt.
pub fn execute(chain: &mut AppChain, sender: Ed25519PublicKey, call: RuntimeCall) -> TxReceipt {
    chain.submit(Transaction::new(sender, call));
    chain.produce_block().txs[0].clone()
}
