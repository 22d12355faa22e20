//! # Error Types
//!
//! Domain-specific error types for autolot-core.
//!
//! ## Error Philosophy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Failure Reporting                              │
//! │                                                                     │
//! │  CoreError (this file)   - real domain conflicts (duplicate id)     │
//! │  ValidationError         - bad input caught before business logic   │
//! │                                                                     │
//! │  NOT errors:                                                        │
//! │  • edit/delete on a missing id       → bool false (stale UI pick)   │
//! │  • stock decrement on a missing id   → silent no-op                 │
//! │                                                                     │
//! │  Absent-target mutations are expected, recoverable conditions in    │
//! │  an interactive session, so they report via return value instead    │
//! │  of an aborting fault.                                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending id, field, value)
//! 3. Errors are enum variants, never bare Strings
//! 4. No error in this crate is fatal; the session always survives

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An add operation targeted an identifier that already exists within
    /// the variant's collection.
    ///
    /// ## When This Occurs
    /// - Adding a vehicle with an id already used by another vehicle
    /// - Seeding the same catalog twice
    #[error("Duplicate id: '{id}' already exists")]
    DuplicateId { id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user-supplied input doesn't meet field requirements.
/// The presentation layer validates before calling into the stores; the
/// factories re-check only the invariants the stores rely on (price ≥ 0).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (wrong character class, missing uppercase, etc.).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DuplicateId {
            id: "V001".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate id: 'V001' already exists");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "username".to_string(),
        };
        assert_eq!(err.to_string(), "username is required");

        let err = ValidationError::TooShort {
            field: "password".to_string(),
            min: 6,
        };
        assert_eq!(err.to_string(), "password must be at least 6 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
