//! # relief-cli — CLI for the Relief Ledger
//!
//! Provides the `relief` command-line interface.
//!
//! ## Subcommands
//!
//! - `relief keygen` — Ed25519 key generation.
//! - `relief attest disaster|phone` — oracle attestation signing.
//! - `relief nullifier` — inspect a beneficiary's claim nullifier.
//! - `relief witness` — assemble a claim witness from two attestations.
//! - `relief prove` — run the claim circuit and produce a claim proof.
//! - `relief simulate` — replay a scenario through an in-process chain.
//!
//! ```bash
//! relief keygen --prefix disaster-oracle
//! relief attest disaster --key disaster-oracle.key --disaster-id 1 \
//!     --session-id 2 --amount 3 --salt 4 --out disaster.json
//! relief simulate scenario.json --config relief.yaml
//! ```

pub mod attest;
pub mod claim;
pub mod keys;
pub mod simulate;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Resolve a path that may be relative to `base`.
///
/// If the path is absolute, returns it as-is. If relative and the file
/// exists relative to `base`, uses that. Otherwise returns the path
/// relative to the current directory.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let base_relative = base.join(path);
    if base_relative.exists() {
        base_relative
    } else {
        path.to_path_buf()
    }
}

/// Read and parse a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON: {}", path.display()))
}

/// Pretty-print `value` as JSON to `out`, or to stdout when `out` is `None`.
pub fn write_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize JSON")?;
    match out {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), "wrote JSON output");
        }
        None => println!("{json}"),
    }
    Ok(())
}
