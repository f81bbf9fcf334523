/**
 * Password Hashing
 *
 * One-way salted password hashing built on bcrypt. Hashes are never
 * reversible and verification failures never distinguish between a wrong
 * password and a malformed stored hash.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a password for storage
///
/// Uses bcrypt with `DEFAULT_COST`. The raw password is never persisted.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a password against a stored hash
///
/// Returns `false` on any mismatch, including a malformed stored hash;
/// this function never fails. Comparison timing is handled by bcrypt.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("password123").unwrap();
        assert!(!verify_password("password124", &hash));
    }

    #[test]
    fn test_hash_is_not_the_password() {
        let hash = hash_password("password123").unwrap();
        assert_ne!(hash, "password123");
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn test_malformed_hash_returns_false() {
        assert!(!verify_password("password123", "not-a-bcrypt-hash"));
        assert!(!verify_password("password123", ""));
    }
}
