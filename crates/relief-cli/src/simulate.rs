//! # Simulate Subcommand
//!
//! Replays a scenario file through an in-process [`AppChain`] and checks
//! each receipt against the scenario's expectations.
//!
//! ## Scenario Format
//!
//! ```json
//! {
//!   "proof_setup_seed": "<64 hex chars>",
//!   "blocks": [
//!     [
//!       { "sender": "<pubkey hex>", "call": "set_admin" },
//!       { "sender": "<pubkey hex>", "call": "set_admin",
//!         "expect": { "status": false, "message": "Admin key is already set" } }
//!     ]
//!   ]
//! }
//! ```
//!
//! Each inner array is one block. Steps without `expect` are not checked.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use relief_runtime::{
    AccountId, AppChain, Block, RuntimeCall, RuntimeConfig, Transaction, TxReceipt,
};
use relief_zkp::{BoundVerifier, MockProofSystem};

/// Arguments for `relief simulate`.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Scenario JSON file.
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,
    /// Print produced blocks as JSON instead of one line per receipt.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Setup seed of the mock proof system the claims were proved with.
    pub proof_setup_seed: String,
    pub blocks: Vec<Vec<ScenarioStep>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioStep {
    pub sender: AccountId,
    #[serde(flatten)]
    pub call: RuntimeCall,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<Expectation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Expectation {
    fn check(&self, receipt: &TxReceipt) -> Option<String> {
        if receipt.status != self.status {
            return Some(format!(
                "expected status {}, got {} ({})",
                self.status,
                receipt.status,
                receipt.status_message.as_deref().unwrap_or("no message")
            ));
        }
        match &self.message {
            Some(expected) if receipt.status_message.as_deref() != Some(expected.as_str()) => {
                Some(format!(
                    "expected message {expected:?}, got {:?}",
                    receipt.status_message
                ))
            }
            _ => None,
        }
    }
}

/// Outcome of a simulation run.
#[derive(Debug)]
pub struct SimulationReport {
    pub chain: AppChain,
    /// One entry per receipt that did not meet its expectation.
    pub mismatches: Vec<String>,
}

/// Run `scenario` on a fresh chain built from `config`.
pub fn simulate(scenario: &Scenario, config: RuntimeConfig) -> Result<SimulationReport> {
    let seed = crate::keys::parse_seed_hex(&scenario.proof_setup_seed)
        .context("invalid proof_setup_seed")?;
    let (_, vk) = MockProofSystem::setup(seed);
    let mut chain = AppChain::new(config, Box::new(BoundVerifier::new(MockProofSystem, vk)))
        .context("invalid runtime config")?;

    let mut mismatches = Vec::new();
    for steps in &scenario.blocks {
        for step in steps {
            chain.submit(Transaction::new(step.sender, step.call.clone()));
        }
        let block = chain.produce_block();
        for (index, (step, receipt)) in steps.iter().zip(&block.txs).enumerate() {
            if let Some(problem) = step.expect.as_ref().and_then(|e| e.check(receipt)) {
                mismatches.push(format!(
                    "block {} tx {index} ({}): {problem}",
                    block.height, receipt.call
                ));
            }
        }
    }
    Ok(SimulationReport { chain, mismatches })
}

/// Execute `relief simulate`.
pub fn run_simulate(args: &SimulateArgs, config: Option<&Path>, base: &Path) -> Result<u8> {
    let config = match config {
        Some(path) => {
            let path = crate::resolve_path(path, base);
            RuntimeConfig::load(&path)
                .with_context(|| format!("failed to load config: {}", path.display()))?
        }
        None => RuntimeConfig::default(),
    };
    let scenario: Scenario = crate::read_json(&crate::resolve_path(&args.scenario, base))?;
    let report = simulate(&scenario, config)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(report.chain.blocks())
                .context("failed to serialize blocks")?
        );
    } else {
        for block in report.chain.blocks() {
            print_block(block);
        }
        println!("Balances:");
        for (account, amount) in report.chain.runtime().balances().accounts() {
            println!("  {account}: {amount}");
        }
    }

    if report.mismatches.is_empty() {
        println!("OK: all expectations met");
        Ok(0)
    } else {
        for mismatch in &report.mismatches {
            println!("MISMATCH: {mismatch}");
        }
        Ok(1)
    }
}

fn print_block(block: &Block) {
    println!("block {} @ {}", block.height, block.timestamp);
    for receipt in &block.txs {
        match &receipt.status_message {
            None => println!("  {} from {}: OK", receipt.call, receipt.sender),
            Some(message) => {
                println!("  {} from {}: FAIL: {message}", receipt.call, receipt.sender)
            }
        }
    }
}
