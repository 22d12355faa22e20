//! # Authentication Service
//!
//! Login/logout on top of the user store, with a typed outcome for every
//! failure mode so the UI can phrase each one differently.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  login(username, password)                                          │
//! │    │                                                                │
//! │    ├── either field blank?          → EmptyInput                    │
//! │    ├── username malformed?          → InvalidUsername               │
//! │    ├── no such record?              → UnknownUser                   │
//! │    ├── hash mismatch?               → WrongPassword                 │
//! │    └── all clear → current user set → Success(record)               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The password *format* is deliberately not validated at login time:
//! rejecting a password for being "too weak" before checking it would leak
//! which rule an attacker's guess violated.

use tracing::{debug, info};

use autolot_core::validation::validate_username;

use crate::crypto::verify_password;
use crate::repo::JsonUserStore;
use crate::user::UserRecord;

/// Every way a login attempt can end.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Credentials accepted; the record is now the current user.
    Success(UserRecord),
    /// Username or password was blank.
    EmptyInput,
    /// Username fails the format rules, so it cannot exist in the store.
    InvalidUsername,
    /// No record with that username.
    UnknownUser,
    /// The record exists but the password does not match.
    WrongPassword,
}

impl LoginOutcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }
}

/// Session-scoped authentication: one current user at a time.
#[derive(Debug, Default)]
pub struct AuthService {
    current_user: Option<UserRecord>,
}

impl AuthService {
    pub fn new() -> Self {
        AuthService { current_user: None }
    }

    /// The authenticated user, if any.
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current_user.as_ref()
    }

    /// Attempts a login against `store`.
    pub fn login(&mut self, store: &JsonUserStore, username: &str, password: &str) -> LoginOutcome {
        if username.is_empty() || password.is_empty() {
            return LoginOutcome::EmptyInput;
        }
        if validate_username(username).is_err() {
            return LoginOutcome::InvalidUsername;
        }

        let Some(record) = store.get(username) else {
            debug!(username = %username, "Login failed: unknown user");
            return LoginOutcome::UnknownUser;
        };

        if !verify_password(password, &record.password_hash) {
            debug!(username = %username, "Login failed: wrong password");
            return LoginOutcome::WrongPassword;
        }

        info!(username = %username, role = %record.role, "Login succeeded");
        self.current_user = Some(record.clone());
        LoginOutcome::Success(record.clone())
    }

    /// Clears the current user. Safe to call when nobody is logged in.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!(username = %user.username, "Logged out");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
