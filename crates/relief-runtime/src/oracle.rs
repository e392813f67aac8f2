//! # Oracle Registry
//!
//! The two oracle public keys a claim must have been attested under. Both
//! are written together by the administrator; a claim cannot be processed
//! until both are set.

use relief_core::{ConsistencyError, GovernanceError};
use relief_crypto::Ed25519PublicKey;
use serde::{Deserialize, Serialize};

use crate::admin::AdminGuard;
use crate::balances::AccountId;

/// The registered oracle key pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleKeys {
    /// Signs `(disaster_id, session_id, amount, salt)`.
    pub disaster: Ed25519PublicKey,
    /// Signs `(session_id, phone_number, salt)`.
    pub identity: Ed25519PublicKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleRegistry {
    disaster: Option<Ed25519PublicKey>,
    identity: Option<Ed25519PublicKey>,
}

impl OracleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both oracle keys. Only the administrator may call this.
    ///
    /// The admin check runs first and its error is returned unchanged, so
    /// an empty administrator slot reports "No admin key set !".
    pub fn set_keys(
        &mut self,
        guard: &impl AdminGuard,
        sender: &AccountId,
        disaster: Ed25519PublicKey,
        identity: Ed25519PublicKey,
    ) -> Result<(), GovernanceError> {
        guard.require_admin(sender)?;
        self.disaster = Some(disaster);
        self.identity = Some(identity);
        tracing::info!(%disaster, %identity, "oracle keys updated");
        Ok(())
    }

    /// The registered keys.
    ///
    /// # Errors
    ///
    /// [`ConsistencyError::OracleKeysUninitialized`] unless both are set.
    pub fn get_keys(&self) -> Result<OracleKeys, ConsistencyError> {
        match (self.disaster, self.identity) {
            (Some(disaster), Some(identity)) => Ok(OracleKeys { disaster, identity }),
            _ => Err(ConsistencyError::OracleKeysUninitialized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::AccessControl;
    use crate::balances::Balances;
    use relief_core::Amount;
    use relief_crypto::Ed25519KeyPair;

    fn key(seed: u8) -> Ed25519PublicKey {
        Ed25519KeyPair::from_seed(&[seed; 32]).public_key()
    }

    fn acl_with_admin(admin: AccountId) -> AccessControl {
        let mut acl = AccessControl::new(Amount::new(10));
        let mut ledger = Balances::new(Amount::new(10));
        acl.claim_administration(admin, &mut ledger).unwrap();
        acl
    }

    #[test]
    fn test_unset_keys() {
        assert_eq!(
            OracleRegistry::new().get_keys(),
            Err(ConsistencyError::OracleKeysUninitialized)
        );
    }

    #[test]
    fn test_admin_sets_keys() {
        let acl = acl_with_admin(key(1));
        let mut registry = OracleRegistry::new();
        registry.set_keys(&acl, &key(1), key(10), key(11)).unwrap();
        assert_eq!(
            registry.get_keys().unwrap(),
            OracleKeys {
                disaster: key(10),
                identity: key(11),
            }
        );
    }

    #[test]
    fn test_last_writer_wins() {
        let acl = acl_with_admin(key(1));
        let mut registry = OracleRegistry::new();
        registry.set_keys(&acl, &key(1), key(10), key(11)).unwrap();
        registry.set_keys(&acl, &key(1), key(20), key(21)).unwrap();
        assert_eq!(registry.get_keys().unwrap().disaster, key(20));
        assert_eq!(registry.get_keys().unwrap().identity, key(21));
    }

    #[test]
    fn test_no_admin() {
        let acl = AccessControl::new(Amount::new(10));
        let mut registry = OracleRegistry::new();
        let err = registry
            .set_keys(&acl, &key(1), key(10), key(11))
            .unwrap_err();
        assert_eq!(err.to_string(), "No admin key set !");
        assert!(registry.get_keys().is_err());
    }

    #[test]
    fn test_non_admin() {
        let acl = acl_with_admin(key(1));
        let mut registry = OracleRegistry::new();
        registry.set_keys(&acl, &key(1), key(10), key(11)).unwrap();
        let err = registry
            .set_keys(&acl, &key(2), key(20), key(21))
            .unwrap_err();
        assert_eq!(err, GovernanceError::Unauthorized);
        assert_eq!(registry.get_keys().unwrap().disaster, key(10));
    }
}
