//! # Validation Module
//!
//! Input validation utilities for Autolot.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Presentation                                              │
//! │  ├── Required-field checks, immediate user feedback                 │
//! │  └── Calls THIS MODULE before touching any store                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Core invariants                                           │
//! │  ├── Factories re-check price ≥ 0                                   │
//! │  └── Stock mutations clamp at zero                                  │
//! │                                                                     │
//! │  The purchase flow itself does NOT re-validate primitive field      │
//! │  presence; it trusts its caller and stays a pure function of its    │
//! │  inputs.                                                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a username.
///
/// ## Rules
/// - 3 to 20 characters
/// - Letters, digits, and underscores only
///
/// ## Example
/// ```rust
/// use autolot_core::validation::validate_username;
///
/// assert!(validate_username("juanito_99").is_ok());
/// assert!(validate_username("ab").is_err());
/// assert!(validate_username("has space").is_err());
/// ```
pub fn validate_username(username: &str) -> ValidationResult<()> {
    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if !(3..=20).contains(&username.len()) {
        return Err(ValidationError::OutOfRange {
            field: "username".to_string(),
            min: 3,
            max: 20,
        });
    }

    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must contain only letters, digits, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a password.
///
/// ## Rules
/// - At least 6 characters
/// - At least one uppercase letter
/// - At least one punctuation symbol
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.len() < 6 {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: 6,
        });
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "password".to_string(),
            reason: "must contain at least one uppercase letter".to_string(),
        });
    }

    if !password.chars().any(|c| c.is_ascii_punctuation()) {
        return Err(ValidationError::InvalidFormat {
            field: "password".to_string(),
            reason: "must contain at least one symbol".to_string(),
        });
    }

    Ok(())
}

/// Validates a registration plate.
///
/// ## Rules
/// - 4 to 10 characters after uppercasing
/// - Uppercase letters, digits, and hyphens only
///
/// Plates are stored uppercased; validation uppercases before checking so
/// "abc-123" and "ABC-123" are judged identically.
pub fn validate_plate(plate: &str) -> ValidationResult<()> {
    let plate = plate.to_uppercase();

    if !(4..=10).contains(&plate.len()) {
        return Err(ValidationError::OutOfRange {
            field: "plate".to_string(),
            min: 4,
            max: 10,
        });
    }

    if !plate
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "plate".to_string(),
            reason: "must contain only letters, digits, and hyphens".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a purchase quantity.
///
/// ## Rules
/// - Must be at least 1
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional give-aways)
///
/// ## Example
/// ```rust
/// use autolot_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(4500).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("juanito").is_ok());
        assert!(validate_username("abc").is_ok());
        assert!(validate_username("user_99").is_ok());

        assert!(validate_username("").is_err());
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(21)).is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("tilde~user").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Admin@123").is_ok());
        assert!(validate_password("Secret!").is_ok());

        assert!(validate_password("Ab@1").is_err()); // too short
        assert!(validate_password("nocaps@123").is_err()); // no uppercase
        assert!(validate_password("NoSymbol123").is_err()); // no symbol
    }

    #[test]
    fn test_validate_plate() {
        assert!(validate_plate("ABC-123").is_ok());
        assert!(validate_plate("abc-123").is_ok()); // uppercased before check
        assert!(validate_plate("XYZ9").is_ok());

        assert!(validate_plate("AB").is_err());
        assert!(validate_plate("ABCDEFGHIJK").is_err());
        assert!(validate_plate("AB 123").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(4500).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }
}
