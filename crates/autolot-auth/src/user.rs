//! # User Records
//!
//! The account model: a username, a password hash, a role, and an open
//! `extra` bag for role-specific details (a dealer's company name, a
//! buyer's phone number) that the core never interprets.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Role
// =============================================================================

/// The role ladder.
///
/// ## Role Capabilities
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  Buyer       browse catalog, fill cart, purchase, view own invoices │
/// │  Dealer      buyer capabilities + manage own listings               │
/// │  Admin       manage users, catalog, and reports                     │
/// │  SuperAdmin  admin capabilities + create other admins; undeletable  │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Buyer,
    Dealer,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Whether this role may use the administration surfaces.
    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Buyer
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Buyer => write!(f, "buyer"),
            Role::Dealer => write!(f, "dealer"),
            Role::Admin => write!(f, "admin"),
            Role::SuperAdmin => write!(f, "superadmin"),
        }
    }
}

// =============================================================================
// User Record
// =============================================================================

/// One persisted account.
///
/// The password is stored only as a hash (see [`crate::crypto`]); the
/// plaintext never reaches this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    /// Free-form role-specific details; persisted verbatim, never
    /// interpreted by the services.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Creates a record with the current timestamp and empty extras.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        UserRecord {
            username: username.into(),
            password_hash: password_hash.into(),
            role,
            extra: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Same as [`UserRecord::new`] with an extras bag attached.
    pub fn with_extra(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
        extra: BTreeMap<String, String>,
    ) -> Self {
        UserRecord {
            extra,
            ..UserRecord::new(username, password_hash, role)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
