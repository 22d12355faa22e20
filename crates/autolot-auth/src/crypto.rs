//! # Password Hashing
//!
//! SHA-256 hex digests for stored passwords.
//!
//! Deterministic, unsalted hashing is inherited behavior kept for record
//! compatibility: existing user files verify unchanged. Verification is a
//! hash-and-compare, not a decrypt.

use sha2::{Digest, Sha256};

/// Returns the SHA-256 digest of `password` as lowercase hex.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    let mut out = String::with_capacity(64);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// Compares a plaintext password against a stored hash.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    hash_password(plain) == stored_hash
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic_hex() {
        let a = hash_password("Admin@123");
        let b = hash_password("Admin@123");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_known_digest() {
        // SHA-256("abc"), the classic test vector
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_verify_password() {
        let stored = hash_password("Secret!1");
        assert!(verify_password("Secret!1", &stored));
        assert!(!verify_password("secret!1", &stored));
        assert!(!verify_password("", &stored));
    }
}
