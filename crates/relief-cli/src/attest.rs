//! # Attest Subcommand
//!
//! Oracle-side signing. Each oracle signs its own message over canonical
//! JSON and publishes an attestation file:
//!
//! ```json
//! { "oracle": "<pubkey hex>", "message": { ... }, "signature": "<sig hex>" }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::{Deserialize, Serialize};

use relief_core::{Amount, DisasterId, PhoneNumber, Salt, SessionId};
use relief_crypto::{Ed25519PublicKey, Ed25519Signature};
use relief_zkp::{
    sign_disaster_attestation, sign_identity_attestation, DisasterMessage, IdentityMessage,
};

use crate::keys::read_keypair;

/// A signed disaster oracle statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisasterAttestation {
    pub oracle: Ed25519PublicKey,
    pub message: DisasterMessage,
    pub signature: Ed25519Signature,
}

/// A signed identity oracle statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAttestation {
    pub oracle: Ed25519PublicKey,
    pub message: IdentityMessage,
    pub signature: Ed25519Signature,
}

/// Arguments for `relief attest`.
#[derive(Args, Debug)]
pub struct AttestArgs {
    #[command(subcommand)]
    pub command: AttestCommand,
}

#[derive(Subcommand, Debug)]
pub enum AttestCommand {
    /// Sign (disaster_id, session_id, amount, salt) as the disaster oracle.
    Disaster {
        /// Disaster oracle private key file.
        #[arg(long)]
        key: PathBuf,
        #[arg(long)]
        disaster_id: u64,
        #[arg(long)]
        session_id: u64,
        /// Authorized payout.
        #[arg(long)]
        amount: u64,
        #[arg(long)]
        salt: u64,
        /// Write the attestation here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Sign (session_id, phone_number, salt) as the phone oracle.
    Phone {
        /// Phone oracle private key file.
        #[arg(long)]
        key: PathBuf,
        #[arg(long)]
        session_id: u64,
        /// Verified phone number.
        #[arg(long)]
        phone: String,
        #[arg(long)]
        salt: u64,
        /// Write the attestation here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Execute `relief attest`.
pub fn run_attest(args: &AttestArgs, base: &Path) -> Result<u8> {
    match &args.command {
        AttestCommand::Disaster {
            key,
            disaster_id,
            session_id,
            amount,
            salt,
            out,
        } => {
            let message = DisasterMessage {
                disaster_id: DisasterId(*disaster_id),
                session_id: SessionId(*session_id),
                amount: Amount::new(*amount),
                salt: Salt(*salt),
            };
            let attestation = attest_disaster(&crate::resolve_path(key, base), message)?;
            tracing::info!(oracle = %attestation.oracle, "disaster attestation signed");
            crate::write_json(&attestation, out.as_deref())?;
        }
        AttestCommand::Phone {
            key,
            session_id,
            phone,
            salt,
            out,
        } => {
            let message = IdentityMessage {
                session_id: SessionId(*session_id),
                phone_number: PhoneNumber(phone.clone()),
                salt: Salt(*salt),
            };
            let attestation = attest_identity(&crate::resolve_path(key, base), message)?;
            tracing::info!(oracle = %attestation.oracle, "phone attestation signed");
            crate::write_json(&attestation, out.as_deref())?;
        }
    }
    Ok(0)
}

/// Sign `message` with the disaster oracle key at `key_path`.
pub fn attest_disaster(key_path: &Path, message: DisasterMessage) -> Result<DisasterAttestation> {
    let oracle = read_keypair(key_path)?;
    let signature =
        sign_disaster_attestation(&oracle, &message).context("failed to canonicalize message")?;
    Ok(DisasterAttestation {
        oracle: oracle.public_key(),
        message,
        signature,
    })
}

/// Sign `message` with the phone oracle key at `key_path`.
pub fn attest_identity(key_path: &Path, message: IdentityMessage) -> Result<IdentityAttestation> {
    let oracle = read_keypair(key_path)?;
    let signature =
        sign_identity_attestation(&oracle, &message).context("failed to canonicalize message")?;
    Ok(IdentityAttestation {
        oracle: oracle.public_key(),
        message,
        signature,
    })
}
