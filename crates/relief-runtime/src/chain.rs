//! # Sequential Block Producer
//!
//! Queues transactions and executes them in submission order, one block at
//! a time. Every queued transaction yields a receipt; a rejected
//! transaction carries `status: false` and the error message.
//!
//! Produced blocks are retained until [`AppChain::drain_blocks`] takes them;
//! a long-running producer drains after handing blocks on.

use std::collections::VecDeque;

use relief_core::{Amount, ConsistencyError, Nullifier, Timestamp};
use relief_zkp::ClaimVerifier;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::balances::AccountId;
use crate::compensation::ClaimPayout;
use crate::config::{ConfigError, RuntimeConfig};
use crate::oracle::OracleKeys;
use crate::runtime::{CallOutcome, Runtime, Transaction};

/// Identifier assigned to a transaction when it is queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(Uuid);

impl TxId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TxId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tx:{}", self.0)
    }
}

/// The result of one executed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_id: TxId,
    pub sender: AccountId,
    pub call: String,
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout: Option<ClaimPayout>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// 1 for the first produced block.
    pub height: u64,
    pub timestamp: Timestamp,
    pub txs: Vec<TxReceipt>,
}

/// A single-node ledger: one runtime, one ordered queue.
#[derive(Debug)]
pub struct AppChain {
    runtime: Runtime,
    pending: VecDeque<(TxId, Transaction)>,
    height: u64,
    blocks: Vec<Block>,
}

impl AppChain {
    pub fn new(
        config: RuntimeConfig,
        verifier: Box<dyn ClaimVerifier>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            runtime: Runtime::new(config, verifier)?,
            pending: VecDeque::new(),
            height: 0,
            blocks: Vec::new(),
        })
    }

    /// Queue `tx` for the next block.
    pub fn submit(&mut self, tx: Transaction) -> TxId {
        let id = TxId::new();
        self.pending.push_back((id, tx));
        id
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Execute every queued transaction in order and seal them into a block.
    pub fn produce_block(&mut self) -> &Block {
        let mut txs = Vec::with_capacity(self.pending.len());
        while let Some((tx_id, tx)) = self.pending.pop_front() {
            let receipt = match self.runtime.apply(&tx) {
                Ok(outcome) => TxReceipt {
                    tx_id,
                    sender: tx.sender,
                    call: tx.call.name().to_string(),
                    status: true,
                    status_message: None,
                    payout: match outcome {
                        CallOutcome::Paid(payout) => Some(payout),
                        CallOutcome::Done => None,
                    },
                },
                Err(err) => TxReceipt {
                    tx_id,
                    sender: tx.sender,
                    call: tx.call.name().to_string(),
                    status: false,
                    status_message: Some(err.to_string()),
                    payout: None,
                },
            };
            txs.push(receipt);
        }

        self.height += 1;
        tracing::debug!(height = self.height, txs = txs.len(), "block produced");
        self.blocks.push(Block {
            height: self.height,
            timestamp: Timestamp::now(),
            txs,
        });
        &self.blocks[self.blocks.len() - 1]
    }

    /// Height of the last produced block, 0 before the first.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Blocks produced since the last drain.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Take the retained blocks. Height keeps counting from where it was.
    pub fn drain_blocks(&mut self) -> Vec<Block> {
        std::mem::take(&mut self.blocks)
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn admin(&self) -> Option<AccountId> {
        self.runtime.admin()
    }

    pub fn oracle_keys(&self) -> Result<OracleKeys, ConsistencyError> {
        self.runtime.oracle_keys()
    }

    pub fn is_nullifier_spent(&self, nullifier: &Nullifier) -> bool {
        self.runtime.is_nullifier_spent(nullifier)
    }

    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.runtime.balance_of(account)
    }
}
