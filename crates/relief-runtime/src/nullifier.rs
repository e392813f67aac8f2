//! # Nullifier Ledger
//!
//! The set of spent nullifiers. A nullifier goes `Unspent → Spent` once.
//! The only way back is [`NullifierLedger::release`], which undoes a mark
//! made by a transaction that then failed.

use std::collections::BTreeSet;

use relief_core::Nullifier;
use serde::{Deserialize, Serialize};

/// State of a nullifier before a [`NullifierLedger::check_and_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullifierState {
    Unspent,
    Spent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullifierLedger {
    spent: BTreeSet<Nullifier>,
}

impl NullifierLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `nullifier` spent and report what it was before.
    ///
    /// Marking an already spent nullifier is a no-op that returns
    /// [`NullifierState::Spent`]; the caller decides whether that is an
    /// error.
    pub fn check_and_mark(&mut self, nullifier: Nullifier) -> NullifierState {
        if self.spent.insert(nullifier) {
            NullifierState::Unspent
        } else {
            NullifierState::Spent
        }
    }

    /// Drop a mark made earlier in the same failed transaction.
    pub(crate) fn release(&mut self, nullifier: &Nullifier) -> bool {
        self.spent.remove(nullifier)
    }

    pub fn is_spent(&self, nullifier: &Nullifier) -> bool {
        self.spent.contains(nullifier)
    }

    /// Number of spent nullifiers.
    pub fn len(&self) -> usize {
        self.spent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spent.is_empty()
    }
}
