//! # User Administration Service
//!
//! Account management for operators: the superadmin bootstrap, admin
//! account creation, role/password updates, and deletion (with the
//! superadmin protected).
//!
//! Mutations report success as booleans; the UI re-renders the user list
//! either way, so a missing username is a refresh, not an exception.

use tracing::{info, warn};

use autolot_core::validation::{validate_password, validate_username};

use crate::crypto::hash_password;
use crate::repo::JsonUserStore;
use crate::user::{Role, UserRecord};
use crate::SUPERADMIN_USERNAME;

/// Operator-facing user management.
#[derive(Debug, Default)]
pub struct UserAdminService;

impl UserAdminService {
    pub fn new() -> Self {
        UserAdminService
    }

    /// Creates the bootstrap superadmin account if it does not exist yet.
    ///
    /// Idempotent: safe to call on every startup. An existing record is
    /// left untouched, including a rotated password.
    pub fn ensure_superadmin(&self, store: &mut JsonUserStore, default_password: &str) {
        if store.get(SUPERADMIN_USERNAME).is_some() {
            return;
        }
        let record = UserRecord::new(
            SUPERADMIN_USERNAME,
            hash_password(default_password),
            Role::SuperAdmin,
        );
        if let Err(err) = store.add(record) {
            warn!(error = %err, "Could not bootstrap superadmin");
            return;
        }
        info!(username = SUPERADMIN_USERNAME, "Superadmin account bootstrapped");
    }

    /// Every account, ordered by username.
    pub fn list_users(&self, store: &JsonUserStore) -> Vec<UserRecord> {
        store.list_all()
    }

    /// Creates an administrator account.
    ///
    /// Only admin roles are accepted here; buyers and dealers go through
    /// [`RegistrationService`](crate::services::registration::RegistrationService).
    /// Returns `false` on any rejected input or a taken username.
    pub fn create_admin(
        &self,
        store: &mut JsonUserStore,
        username: &str,
        password: &str,
        role: Role,
    ) -> bool {
        if !role.is_admin() {
            return false;
        }
        if validate_username(username).is_err() || validate_password(password).is_err() {
            return false;
        }
        if store.get(username).is_some() {
            return false;
        }

        let record = UserRecord::new(username, hash_password(password), role);
        if store.add(record).is_err() {
            return false;
        }
        info!(username = %username, role = %role, "Admin account created");
        true
    }

    /// Updates an account's role and/or password.
    ///
    /// `None` fields are left untouched. A new password must pass the same
    /// strength rules as registration; rejecting it leaves the record
    /// completely unchanged.
    pub fn update_user(
        &self,
        store: &mut JsonUserStore,
        username: &str,
        new_role: Option<Role>,
        new_password: Option<&str>,
    ) -> bool {
        let Some(record) = store.get(username) else {
            return false;
        };
        let mut record = record.clone();

        if let Some(role) = new_role {
            record.role = role;
        }
        if let Some(password) = new_password {
            if validate_password(password).is_err() {
                return false;
            }
            record.password_hash = hash_password(password);
        }

        if store.update(record).is_err() {
            return false;
        }
        info!(username = %username, "User updated");
        true
    }

    /// Deletes an account. The superadmin cannot be deleted.
    pub fn delete_user(&self, store: &mut JsonUserStore, username: &str) -> bool {
        if username == SUPERADMIN_USERNAME {
            warn!("Refusing to delete the superadmin account");
            return false;
        }
        match store.delete(username) {
            Ok(deleted) => {
                if deleted {
                    info!(username = %username, "User deleted");
                }
                deleted
            }
            Err(err) => {
                warn!(username = %username, error = %err, "Delete failed");
                false
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::verify_password;
    use crate::SUPERADMIN_DEFAULT_PASSWORD;

    fn temp_store() -> (tempfile::TempDir, JsonUserStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonUserStore::open(dir.path().join("users.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_ensure_superadmin_bootstraps_once() {
        let (_dir, mut store) = temp_store();
        let admin = UserAdminService::new();

        admin.ensure_superadmin(&mut store, SUPERADMIN_DEFAULT_PASSWORD);
        let record = store.get(SUPERADMIN_USERNAME).unwrap();
        assert_eq!(record.role, Role::SuperAdmin);
        assert!(verify_password(SUPERADMIN_DEFAULT_PASSWORD, &record.password_hash));
    }

    #[test]
    fn test_ensure_superadmin_preserves_rotated_password() {
        let (_dir, mut store) = temp_store();
        let admin = UserAdminService::new();

        admin.ensure_superadmin(&mut store, SUPERADMIN_DEFAULT_PASSWORD);
        assert!(admin.update_user(&mut store, SUPERADMIN_USERNAME, None, Some("Rotated!9")));

        // Second bootstrap must not reset the password
        admin.ensure_superadmin(&mut store, SUPERADMIN_DEFAULT_PASSWORD);
        let record = store.get(SUPERADMIN_USERNAME).unwrap();
        assert!(verify_password("Rotated!9", &record.password_hash));
    }

    #[test]
    fn test_create_admin_accepts_admin_roles_only() {
        let (_dir, mut store) = temp_store();
        let admin = UserAdminService::new();

        assert!(admin.create_admin(&mut store, "ops_admin", "Secret!1", Role::Admin));
        assert!(!admin.create_admin(&mut store, "buyer_1", "Secret!1", Role::Buyer));
        assert!(!admin.create_admin(&mut store, "dealer_1", "Secret!1", Role::Dealer));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_admin_validates_credentials() {
        let (_dir, mut store) = temp_store();
        let admin = UserAdminService::new();

        assert!(!admin.create_admin(&mut store, "ab", "Secret!1", Role::Admin));
        assert!(!admin.create_admin(&mut store, "ops_admin", "weak", Role::Admin));
    }

    #[test]
    fn test_create_admin_rejects_taken_username() {
        let (_dir, mut store) = temp_store();
        let admin = UserAdminService::new();

        assert!(admin.create_admin(&mut store, "ops_admin", "Secret!1", Role::Admin));
        assert!(!admin.create_admin(&mut store, "ops_admin", "Other!99", Role::Admin));
    }

    #[test]
    fn test_update_user_role_and_password() {
        let (_dir, mut store) = temp_store();
        let admin = UserAdminService::new();
        admin.create_admin(&mut store, "ops_admin", "Secret!1", Role::Admin);

        assert!(admin.update_user(&mut store, "ops_admin", Some(Role::Dealer), Some("Newpass!2")));
        let record = store.get("ops_admin").unwrap();
        assert_eq!(record.role, Role::Dealer);
        assert!(verify_password("Newpass!2", &record.password_hash));
    }

    #[test]
    fn test_update_user_rejects_weak_password_without_side_effects() {
        let (_dir, mut store) = temp_store();
        let admin = UserAdminService::new();
        admin.create_admin(&mut store, "ops_admin", "Secret!1", Role::Admin);

        assert!(!admin.update_user(&mut store, "ops_admin", Some(Role::Buyer), Some("weak")));
        let record = store.get("ops_admin").unwrap();
        assert_eq!(record.role, Role::Admin); // role change rolled up with the rejection
        assert!(verify_password("Secret!1", &record.password_hash));
    }

    #[test]
    fn test_update_missing_user_returns_false() {
        let (_dir, mut store) = temp_store();
        let admin = UserAdminService::new();
        assert!(!admin.update_user(&mut store, "ghost", Some(Role::Admin), None));
    }

    #[test]
    fn test_delete_user_and_superadmin_guard() {
        let (_dir, mut store) = temp_store();
        let admin = UserAdminService::new();

        admin.ensure_superadmin(&mut store, SUPERADMIN_DEFAULT_PASSWORD);
        admin.create_admin(&mut store, "ops_admin", "Secret!1", Role::Admin);

        assert!(admin.delete_user(&mut store, "ops_admin"));
        assert!(!admin.delete_user(&mut store, "ops_admin")); // already gone
        assert!(!admin.delete_user(&mut store, SUPERADMIN_USERNAME));
        assert!(store.get(SUPERADMIN_USERNAME).is_some());
    }
}
