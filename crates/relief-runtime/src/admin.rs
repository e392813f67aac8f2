//! # Access Control
//!
//! The administrator slot. Empty at genesis, claimed exactly once, then
//! handed over only by the current holder:
//!
//! ```text
//! Empty ──claim──▶ Set(a1) ──change by a1──▶ Set(a2) ──change by a2──▶ ...
//! ```
//!
//! Claiming the slot credits the new administrator with the configured
//! initial balance, which funds every later payout.

use relief_core::{Amount, GovernanceError, ReliefError};

use crate::balances::{AccountId, Transferable};

/// The capability to check administrator authority.
pub trait AdminGuard {
    /// The current administrator.
    ///
    /// # Errors
    ///
    /// [`GovernanceError::Uninitialized`] while the slot is empty.
    fn admin(&self) -> Result<AccountId, GovernanceError>;

    /// Succeeds only when `sender` is the current administrator.
    fn require_admin(&self, sender: &AccountId) -> Result<(), GovernanceError> {
        if self.admin()? == *sender {
            Ok(())
        } else {
            Err(GovernanceError::Unauthorized)
        }
    }
}

/// The administrator slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessControl {
    admin: Option<AccountId>,
    initial_balance: Amount,
}

impl AccessControl {
    /// An empty slot whose first claimant receives `initial_balance`.
    pub fn new(initial_balance: Amount) -> Self {
        Self {
            admin: None,
            initial_balance,
        }
    }

    /// The current administrator, if any.
    pub fn current(&self) -> Option<&AccountId> {
        self.admin.as_ref()
    }

    /// Claim the empty slot for `candidate` and fund it.
    ///
    /// A second claim fails with [`GovernanceError::AlreadyInitialized`] and
    /// changes nothing. If the credit fails the slot stays empty.
    pub fn claim_administration(
        &mut self,
        candidate: AccountId,
        ledger: &mut impl Transferable,
    ) -> Result<(), ReliefError> {
        if self.admin.is_some() {
            return Err(GovernanceError::AlreadyInitialized.into());
        }
        ledger.credit(&candidate, self.initial_balance)?;
        self.admin = Some(candidate);
        tracing::info!(
            admin = %candidate,
            credited = %self.initial_balance,
            "administration claimed"
        );
        Ok(())
    }

    /// Hand the slot from `sender` to `new_admin`.
    pub fn change_administration(
        &mut self,
        sender: &AccountId,
        new_admin: AccountId,
    ) -> Result<(), GovernanceError> {
        self.require_admin(sender)?;
        self.admin = Some(new_admin);
        tracing::info!(from = %sender, to = %new_admin, "administrator changed");
        Ok(())
    }
}

impl AdminGuard for AccessControl {
    fn admin(&self) -> Result<AccountId, GovernanceError> {
        self.admin.ok_or(GovernanceError::Uninitialized)
    }
}
