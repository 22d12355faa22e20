//! # Registration Service
//!
//! Self-service signup for buyers and dealers. Administrator accounts can
//! only be minted through [`UserAdminService`], never through the public
//! registration path.
//!
//! [`UserAdminService`]: crate::services::admin::UserAdminService

use std::collections::BTreeMap;

use tracing::info;

use autolot_core::validation::{validate_password, validate_username};

use crate::crypto::hash_password;
use crate::repo::JsonUserStore;
use crate::user::{Role, UserRecord};

/// Outcome of a registration attempt: `Ok` with the created record, or a
/// human-readable reason for the form to display.
pub type RegistrationOutcome = Result<UserRecord, String>;

/// Signup workflow for non-admin roles.
#[derive(Debug, Default)]
pub struct RegistrationService;

impl RegistrationService {
    pub fn new() -> Self {
        RegistrationService
    }

    /// Registers a new buyer or dealer account.
    ///
    /// ## Rules
    /// - Admin roles are rejected outright.
    /// - Username: 3-20 chars, letters/digits/underscore.
    /// - Password: at least 6 chars with an uppercase letter and a symbol.
    /// - The username must not already be taken.
    pub fn register(
        &self,
        store: &mut JsonUserStore,
        username: &str,
        password: &str,
        role: Role,
        extra: BTreeMap<String, String>,
    ) -> RegistrationOutcome {
        if role.is_admin() {
            return Err("Administrator accounts cannot be created through registration".to_string());
        }
        if validate_username(username).is_err() {
            return Err("Invalid username (3-20 letters, digits, or underscore)".to_string());
        }
        if validate_password(password).is_err() {
            return Err(
                "Invalid password (at least 6 chars, 1 uppercase, 1 symbol)".to_string(),
            );
        }
        if store.get(username).is_some() {
            return Err(format!("User '{username}' already exists"));
        }

        let record = UserRecord::with_extra(username, hash_password(password), role, extra);
        store
            .add(record.clone())
            .map_err(|err| format!("Could not persist user: {err}"))?;

        info!(username = %username, role = %role, "User registered");
        Ok(record)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::verify_password;

    fn temp_store() -> (tempfile::TempDir, JsonUserStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonUserStore::open(dir.path().join("users.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_register_buyer() {
        let (_dir, mut store) = temp_store();
        let service = RegistrationService::new();

        let record = service
            .register(&mut store, "juanito", "Secret!1", Role::Buyer, BTreeMap::new())
            .unwrap();

        assert_eq!(record.role, Role::Buyer);
        assert!(verify_password("Secret!1", &record.password_hash));
        assert!(store.get("juanito").is_some());
    }

    #[test]
    fn test_register_dealer_with_extras() {
        let (_dir, mut store) = temp_store();
        let service = RegistrationService::new();

        let mut extra = BTreeMap::new();
        extra.insert("company".to_string(), "Autolot SA".to_string());

        let record = service
            .register(&mut store, "dealer_1", "Passw0rd!", Role::Dealer, extra)
            .unwrap();
        assert_eq!(record.extra["company"], "Autolot SA");
    }

    #[test]
    fn test_register_rejects_admin_roles() {
        let (_dir, mut store) = temp_store();
        let service = RegistrationService::new();

        for role in [Role::Admin, Role::SuperAdmin] {
            let err = service
                .register(&mut store, "sneaky", "Secret!1", role, BTreeMap::new())
                .unwrap_err();
            assert!(err.contains("registration"));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_register_rejects_bad_username() {
        let (_dir, mut store) = temp_store();
        let service = RegistrationService::new();

        assert!(service
            .register(&mut store, "ab", "Secret!1", Role::Buyer, BTreeMap::new())
            .is_err());
        assert!(service
            .register(&mut store, "has space", "Secret!1", Role::Buyer, BTreeMap::new())
            .is_err());
    }

    #[test]
    fn test_register_rejects_weak_password() {
        let (_dir, mut store) = temp_store();
        let service = RegistrationService::new();

        // too short, no uppercase, no symbol
        for password in ["S!1", "secret!1", "Secret11"] {
            assert!(service
                .register(&mut store, "juanito", password, Role::Buyer, BTreeMap::new())
                .is_err());
        }
    }

    #[test]
    fn test_register_rejects_duplicate() {
        let (_dir, mut store) = temp_store();
        let service = RegistrationService::new();

        service
            .register(&mut store, "juanito", "Secret!1", Role::Buyer, BTreeMap::new())
            .unwrap();
        let err = service
            .register(&mut store, "juanito", "Other!99", Role::Buyer, BTreeMap::new())
            .unwrap_err();
        assert!(err.contains("already exists"));
    }
}
