//! # Store Error Types
//!
//! Error types for the user repository, the only I/O surface in Autolot.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds the domain-level cases             │
//! │       │                       (AlreadyExists, NotFound)             │
//! │       ▼                                                             │
//! │  Services translate to typed outcomes or booleans for the UI        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// User repository errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Adding a username that is already registered.
    #[error("User '{username}' already exists")]
    AlreadyExists { username: String },

    /// Updating a username that was never registered.
    #[error("User '{username}' not found")]
    NotFound { username: String },

    /// The record file could not be read or written.
    #[error("User store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The record file is not valid JSON.
    #[error("User store is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn already_exists(username: impl Into<String>) -> Self {
        StoreError::AlreadyExists {
            username: username.into(),
        }
    }

    pub fn not_found(username: impl Into<String>) -> Self {
        StoreError::NotFound {
            username: username.into(),
        }
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
