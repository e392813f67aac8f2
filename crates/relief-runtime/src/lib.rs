//! # relief-runtime — Relief Ledger Runtime
//!
//! The state and entry points of the disaster relief compensation ledger.
//!
//! ## Components
//!
//! - **AccessControl** (`admin.rs`): the administrator slot, claimed once
//!   and then handed over only by its holder.
//!
//! - **OracleRegistry** (`oracle.rs`): the disaster and identity oracle
//!   keys, written together by the administrator.
//!
//! - **NullifierLedger** (`nullifier.rs`): spent nullifiers. Spent is
//!   permanent.
//!
//! - **Balances** (`balances.rs`): the token ledger, bounded by the
//!   configured total supply.
//!
//! - **ClaimProcessor** (`compensation.rs`): verified proof, registered
//!   keys, unspent nullifier, then payout from the administrator.
//!
//! - **Runtime** (`runtime.rs`) and **AppChain** (`chain.rs`): transaction
//!   dispatch on staged state and sequential block production.
//!
//! ## Execution Model
//!
//! Single-threaded and strictly ordered. The runtime owns all state and
//! each transaction runs to completion before the next starts. Components
//! reach each other only through the [`AdminGuard`] and [`Transferable`]
//! capabilities passed into each call.

pub mod admin;
pub mod balances;
pub mod chain;
pub mod compensation;
pub mod config;
pub mod nullifier;
pub mod oracle;
pub mod runtime;

#[cfg(test)]
mod test_support;

pub use admin::{AccessControl, AdminGuard};
pub use balances::{AccountId, Balances, Transferable};
pub use chain::{AppChain, Block, TxId, TxReceipt};
pub use compensation::{ClaimPayout, ClaimProcessor};
pub use config::{ConfigError, NullifierPolicy, RuntimeConfig};
pub use nullifier::{NullifierLedger, NullifierState};
pub use oracle::{OracleKeys, OracleRegistry};
pub use runtime::{CallOutcome, Runtime, RuntimeCall, Transaction};
