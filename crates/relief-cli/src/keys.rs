//! # Key Subcommand
//!
//! Ed25519 key generation and the key file format shared by every other
//! subcommand.
//!
//! ## Key Files
//!
//! - `<prefix>.key`: the 32-byte secret seed, 64 lowercase hex chars.
//! - `<prefix>.pub`: the 32-byte public key, 64 lowercase hex chars.
//!
//! The mock proof system's setup seed uses the `.key` format too.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;

use relief_crypto::{Ed25519KeyPair, Ed25519PublicKey};

/// Arguments for `relief keygen`.
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Output directory for the key files.
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,
    /// Prefix for the key filenames.
    #[arg(long, default_value = "relief")]
    pub prefix: String,
}

/// Execute `relief keygen`.
pub fn run_keygen(args: &KeygenArgs, base: &Path) -> Result<u8> {
    let output = crate::resolve_path(&args.output, base);
    let keypair = Ed25519KeyPair::generate();
    let (sk_path, pk_path) = write_keypair(&output, &args.prefix, &keypair)?;

    println!("OK: generated Ed25519 keypair");
    println!("  Private key: {}", sk_path.display());
    println!("  Public key:  {}", pk_path.display());
    println!("  Public key (hex): {}", keypair.public_key());
    Ok(0)
}

/// Write `keypair` as `<prefix>.key` / `<prefix>.pub` under `dir`.
pub fn write_keypair(
    dir: &Path,
    prefix: &str,
    keypair: &Ed25519KeyPair,
) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

    let sk_path = dir.join(format!("{prefix}.key"));
    let pk_path = dir.join(format!("{prefix}.pub"));
    std::fs::write(&sk_path, keypair.to_seed_hex())
        .with_context(|| format!("failed to write private key: {}", sk_path.display()))?;
    std::fs::write(&pk_path, keypair.public_key().to_hex())
        .with_context(|| format!("failed to write public key: {}", pk_path.display()))?;
    Ok((sk_path, pk_path))
}

/// Load a key pair from a `.key` file.
pub fn read_keypair(path: &Path) -> Result<Ed25519KeyPair> {
    let hex = read_trimmed(path, "private key")?;
    Ed25519KeyPair::from_seed_hex(&hex)
        .with_context(|| format!("invalid private key: {}", path.display()))
}

/// Load a public key from a `.pub` file.
pub fn read_public_key(path: &Path) -> Result<Ed25519PublicKey> {
    let hex = read_trimmed(path, "public key")?;
    Ed25519PublicKey::from_hex(&hex)
        .with_context(|| format!("invalid public key: {}", path.display()))
}

/// Load a 32-byte seed from a `.key`-format file.
pub fn read_seed(path: &Path) -> Result<[u8; 32]> {
    let hex = read_trimmed(path, "seed")?;
    parse_seed_hex(&hex).with_context(|| format!("invalid seed: {}", path.display()))
}

/// Parse a 64-char hex string into a 32-byte seed.
pub fn parse_seed_hex(hex: &str) -> Result<[u8; 32]> {
    relief_core::hex::decode_array(hex.trim()).map_err(|e| anyhow!("invalid seed hex: {e}"))
}

fn read_trimmed(path: &Path, what: &str) -> Result<String> {
    if !path.exists() {
        bail!("{what} file not found: {}", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {what}: {}", path.display()))?;
    Ok(content.trim().to_string())
}
