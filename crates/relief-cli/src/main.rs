//! # relief CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use relief_cli::attest::{run_attest, AttestArgs};
use relief_cli::claim::{
    run_nullifier, run_prove, run_witness, NullifierArgs, ProveArgs, WitnessArgs,
};
use relief_cli::keys::{run_keygen, KeygenArgs};
use relief_cli::simulate::{run_simulate, SimulateArgs};

/// Relief ledger CLI.
///
/// Generates keys, signs oracle attestations, proves compensation claims,
/// and replays transaction scenarios against an in-process ledger.
#[derive(Parser, Debug)]
#[command(name = "relief", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the runtime configuration file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an Ed25519 keypair.
    Keygen(KeygenArgs),

    /// Sign an oracle attestation.
    Attest(AttestArgs),

    /// Show the claim nullifier of a beneficiary key.
    Nullifier(NullifierArgs),

    /// Assemble a claim witness from two attestations.
    Witness(WitnessArgs),

    /// Prove a claim witness.
    Prove(ProveArgs),

    /// Replay a scenario through an in-process chain.
    Simulate(SimulateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let result = match cli.command {
        Commands::Keygen(args) => run_keygen(&args, &base),
        Commands::Attest(args) => run_attest(&args, &base),
        Commands::Nullifier(args) => run_nullifier(&args, &base),
        Commands::Witness(args) => run_witness(&args, &base),
        Commands::Prove(args) => run_prove(&args, &base),
        Commands::Simulate(args) => run_simulate(&args, cli.config.as_deref(), &base),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
