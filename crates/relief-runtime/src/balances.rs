//! # Balances
//!
//! The token ledger the claim processor pays out of. Accounts are Ed25519
//! public keys. Issuance is bounded by the configured total supply.

use std::collections::BTreeMap;

use relief_core::{Amount, FundsError};
use relief_crypto::Ed25519PublicKey;

/// An account on the ledger.
pub type AccountId = Ed25519PublicKey;

/// The capability to move and mint funds.
///
/// Components that pay out take `&mut impl Transferable` instead of a
/// concrete ledger.
pub trait Transferable {
    /// Mint `amount` into `to`.
    fn credit(&mut self, to: &AccountId, amount: Amount) -> Result<(), FundsError>;

    /// Move `amount` from `from` to `to`. Fails without side effects.
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), FundsError>;
}

/// In-memory balance ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balances {
    accounts: BTreeMap<AccountId, Amount>,
    total_supply: Amount,
    issued: Amount,
}

impl Balances {
    /// An empty ledger that will never issue more than `total_supply`.
    pub fn new(total_supply: Amount) -> Self {
        Self {
            accounts: BTreeMap::new(),
            total_supply,
            issued: Amount::ZERO,
        }
    }

    /// Balance of `account`; unknown accounts hold zero.
    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.accounts.get(account).copied().unwrap_or(Amount::ZERO)
    }

    /// Everything minted so far.
    pub fn total_issued(&self) -> Amount {
        self.issued
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Accounts with a non-zero balance, in key order.
    pub fn accounts(&self) -> impl Iterator<Item = (&AccountId, &Amount)> {
        self.accounts.iter().filter(|(_, amount)| **amount > Amount::ZERO)
    }
}

impl Transferable for Balances {
    fn credit(&mut self, to: &AccountId, amount: Amount) -> Result<(), FundsError> {
        let remaining = self
            .total_supply
            .checked_sub(self.issued)
            .unwrap_or(Amount::ZERO);
        if amount > remaining {
            return Err(FundsError::SupplyExceeded {
                requested: amount,
                remaining,
            });
        }
        let new_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(FundsError::Overflow)?;
        self.issued = self.issued.checked_add(amount).ok_or(FundsError::Overflow)?;
        self.accounts.insert(*to, new_balance);
        Ok(())
    }

    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), FundsError> {
        let available = self.balance_of(from);
        let debited = available
            .checked_sub(amount)
            .ok_or(FundsError::InsufficientFunds {
                available,
                required: amount,
            })?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(FundsError::Overflow)?;
        self.accounts.insert(*from, debited);
        self.accounts.insert(*to, credited);
        Ok(())
    }
}
