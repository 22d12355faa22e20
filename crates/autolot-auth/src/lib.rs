//! # autolot-auth: User Persistence and Auth Services for Autolot
//!
//! Everything about *who* is using the marketplace: user records, the JSON
//! file they persist to, password hashing, and the login/registration/admin
//! services built on top.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Autolot Auth Stack                             │
//! │                                                                     │
//! │  Presentation: collects credentials, shows typed outcomes           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                autolot-auth (THIS CRATE)                    │   │
//! │  │                                                             │   │
//! │  │  ┌────────────┐  ┌──────────────┐  ┌────────────────────┐  │   │
//! │  │  │  services  │  │    crypto    │  │   JsonUserStore    │  │   │
//! │  │  │ login/reg/ │─►│ SHA-256 hash │  │ load on open,      │  │   │
//! │  │  │ user admin │  │ + verify     │  │ atomic save        │  │   │
//! │  │  └────────────┘  └──────────────┘  └─────────┬──────────┘  │   │
//! │  └────────────────────────────────────────────── │ ───────────┘   │
//! │                                                  ▼                  │
//! │                                          users.json (flat list)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`user`] - `UserRecord` and the role ladder
//! - [`crypto`] - password hashing and verification
//! - [`repo`] - the JSON-file-backed user repository
//! - [`services`] - authentication, registration, user administration
//! - [`error`] - store error types

pub mod crypto;
pub mod error;
pub mod repo;
pub mod services;
pub mod user;

pub use error::{StoreError, StoreResult};
pub use repo::JsonUserStore;
pub use services::admin::UserAdminService;
pub use services::auth::{AuthService, LoginOutcome};
pub use services::registration::RegistrationService;
pub use user::{Role, UserRecord};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Username of the bootstrap administrator account.
///
/// Created on startup if absent, undeletable afterwards; the one account
/// guaranteed to exist so an operator can always get in.
pub const SUPERADMIN_USERNAME: &str = "superadmin";

/// Initial password for the bootstrap account. Operators are expected to
/// rotate it through the admin service on first login.
pub const SUPERADMIN_DEFAULT_PASSWORD: &str = "Admin@123";
