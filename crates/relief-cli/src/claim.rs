//! # Claim Subcommands
//!
//! Beneficiary-side steps from two attestations to a submittable claim:
//!
//! ```bash
//! relief nullifier --key me.key                 # inspect the nullifier
//! relief witness --disaster d.json --phone p.json --beneficiary me.key --out w.json
//! relief prove w.json --proving-key setup.key --out claim.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use relief_core::Nullifier;
use relief_crypto::NullifierWitness;
use relief_zkp::{prove_claim, ClaimProof, ClaimWitness, MockProofSystem, CLAIM_NULLIFIER_DOMAIN};

use crate::attest::{DisasterAttestation, IdentityAttestation};
use crate::keys::{read_keypair, read_seed};

/// Arguments for `relief nullifier`.
#[derive(Args, Debug)]
pub struct NullifierArgs {
    /// Beneficiary private key file.
    #[arg(long)]
    pub key: PathBuf,
}

/// Arguments for `relief witness`.
#[derive(Args, Debug)]
pub struct WitnessArgs {
    /// Disaster oracle attestation file.
    #[arg(long)]
    pub disaster: PathBuf,
    /// Phone oracle attestation file.
    #[arg(long)]
    pub phone: PathBuf,
    /// Beneficiary private key file.
    #[arg(long)]
    pub beneficiary: PathBuf,
    /// Write the witness here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for `relief prove`.
#[derive(Args, Debug)]
pub struct ProveArgs {
    /// Claim witness JSON file.
    #[arg(value_name = "WITNESS")]
    pub witness: PathBuf,
    /// Proof system setup seed (`.key` format).
    #[arg(long)]
    pub proving_key: PathBuf,
    /// Write the claim proof here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Serialize)]
struct NullifierReport {
    domain: &'static str,
    nullifier: Nullifier,
    witness: NullifierWitness,
}

/// Execute `relief nullifier`.
pub fn run_nullifier(args: &NullifierArgs, base: &Path) -> Result<u8> {
    let holder = read_keypair(&crate::resolve_path(&args.key, base))?;
    let witness = NullifierWitness::create(&holder, CLAIM_NULLIFIER_DOMAIN)
        .context("failed to build nullifier witness")?;
    let nullifier = witness
        .verify(CLAIM_NULLIFIER_DOMAIN)
        .context("nullifier witness does not verify")?;
    crate::write_json(
        &NullifierReport {
            domain: CLAIM_NULLIFIER_DOMAIN,
            nullifier,
            witness,
        },
        None,
    )?;
    Ok(0)
}

/// Execute `relief witness`.
pub fn run_witness(args: &WitnessArgs, base: &Path) -> Result<u8> {
    let disaster: DisasterAttestation =
        crate::read_json(&crate::resolve_path(&args.disaster, base))?;
    let identity: IdentityAttestation = crate::read_json(&crate::resolve_path(&args.phone, base))?;
    let beneficiary = read_keypair(&crate::resolve_path(&args.beneficiary, base))?;
    let witness = assemble_witness(&disaster, &identity, &beneficiary)?;
    crate::write_json(&witness, args.out.as_deref())?;
    Ok(0)
}

/// Combine two attestations and the beneficiary key into a claim witness.
pub fn assemble_witness(
    disaster: &DisasterAttestation,
    identity: &IdentityAttestation,
    beneficiary: &relief_crypto::Ed25519KeyPair,
) -> Result<ClaimWitness> {
    if disaster.message.session_id != identity.message.session_id {
        bail!(
            "attestations are for different sessions: {} vs {}",
            disaster.message.session_id,
            identity.message.session_id
        );
    }
    let nullifier = NullifierWitness::create(beneficiary, CLAIM_NULLIFIER_DOMAIN)
        .context("failed to build nullifier witness")?;
    Ok(ClaimWitness {
        disaster_oracle_key: disaster.oracle,
        identity_oracle_key: identity.oracle,
        disaster_id: disaster.message.disaster_id,
        session_id: disaster.message.session_id,
        amount: disaster.message.amount,
        disaster_salt: disaster.message.salt,
        disaster_signature: disaster.signature.clone(),
        phone_number: identity.message.phone_number.clone(),
        phone_salt: identity.message.salt,
        phone_signature: identity.signature.clone(),
        nullifier,
    })
}

/// Execute `relief prove`.
pub fn run_prove(args: &ProveArgs, base: &Path) -> Result<u8> {
    let witness: ClaimWitness = crate::read_json(&crate::resolve_path(&args.witness, base))?;
    let seed = read_seed(&crate::resolve_path(&args.proving_key, base))?;
    let claim = prove_witness(&witness, seed)?;
    tracing::info!(
        amount = %claim.public_output.amount,
        nullifier = %claim.public_output.nullifier.to_hex(),
        "claim proved"
    );
    crate::write_json(&claim, args.out.as_deref())?;
    Ok(0)
}

/// Prove `witness` with the mock proof system keyed by `seed`.
pub fn prove_witness(witness: &ClaimWitness, seed: [u8; 32]) -> Result<ClaimProof> {
    let (pk, _) = MockProofSystem::setup(seed);
    prove_claim(&MockProofSystem, &pk, witness).context("claim witness rejected")
}
