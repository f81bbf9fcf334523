/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token issuance and verification for user
 * sessions. Tokens are self-contained HS256 JWTs carrying the subject's
 * user id and an expiry timestamp. The signing secret and lifetime come
 * from `AppConfig`; nothing here reads the environment.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id (numeric, as a string)
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Create a signed bearer token for a user
///
/// # Arguments
/// * `secret` - process-wide signing key
/// * `user_id` - subject user id
/// * `email` - subject email
/// * `ttl_minutes` - token lifetime
///
/// # Returns
/// Encoded JWT string
pub fn create_token(
    secret: &str,
    user_id: i64,
    email: &str,
    ttl_minutes: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let exp = (now as i64 + ttl_minutes * 60).max(0) as u64;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a bearer token
///
/// Checks signature and expiry. Malformed, expired, or badly-signed tokens
/// yield `Err`; callers map that to an `InvalidToken` rejection rather than
/// propagating it.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Extract the subject user id from verified claims
///
/// Returns `None` if the subject is missing or not numeric.
pub fn user_id_from_claims(claims: &Claims) -> Option<i64> {
    claims.sub.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_create_token() {
        let token = create_token(SECRET, 42, "test@example.com", 30).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_token_roundtrip() {
        let token = create_token(SECRET, 42, "test@example.com", 30).unwrap();

        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "test@example.com");
        assert!(claims.exp > claims.iat);
        assert_eq!(user_id_from_claims(&claims), Some(42));
    }

    #[test]
    fn test_verify_malformed_token() {
        assert!(verify_token(SECRET, "invalid.token.here").is_err());
        assert!(verify_token(SECRET, "").is_err());
    }

    #[test]
    fn test_verify_wrong_secret() {
        let token = create_token(SECRET, 42, "test@example.com", 30).unwrap();
        assert!(verify_token("other-secret", &token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Expiry well past the default 60s validation leeway.
        let token = create_token(SECRET, 42, "test@example.com", -5).unwrap();
        assert!(verify_token(SECRET, &token).is_err());
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: "test@example.com".to_string(),
            exp: 0,
            iat: 0,
        };
        assert_eq!(user_id_from_claims(&claims), None);
    }
}
