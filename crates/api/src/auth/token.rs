//! Bearer token issuance and verification.
//!
//! Tokens are opaque signed JWTs (HS256) carrying the caller's identity and
//! a fixed 10-hour expiry set at issuance. No refresh logic. Issuance trusts
//! the caller to have authenticated against an external identity provider.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed credential lifetime.
pub const TOKEN_TTL_HOURS: i64 = 10;

/// Identity claim embedded in the bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account identity.
    pub email: String,
    /// Display name, if the identity provider supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
}

/// Errors from credential extraction and verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The request carried no authorization header.
    #[error("authorization header is missing")]
    MissingHeader,
    /// The authorization header is not a bearer token.
    #[error("authorization header is not a bearer token")]
    MalformedHeader,
    /// The token's expiry has passed.
    #[error("token has expired")]
    Expired,
    /// The token failed signature verification or is structurally invalid.
    #[error("token failed verification")]
    Invalid,
    /// The token could not be signed at issuance.
    #[error("token could not be signed")]
    Signing,
}

/// Extract the bearer token from a raw `Authorization` header value.
///
/// # Errors
///
/// `MissingHeader` if no header was presented, `MalformedHeader` if it does
/// not use the `Bearer` scheme.
pub fn bearer_token(authorization: Option<&str>) -> Result<&str, AuthError> {
    let value = authorization.ok_or(AuthError::MissingHeader)?;
    value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MalformedHeader)
}

/// Sign a token embedding the given identity, expiring in 10 hours.
///
/// # Errors
///
/// Returns `AuthError::Signing` if encoding fails.
pub fn issue(
    secret: &SecretString,
    email: String,
    name: Option<String>,
) -> Result<String, AuthError> {
    let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp();
    let claims = Claims { email, name, exp };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|_| AuthError::Signing)
}

/// Verify a token against the signing secret and return its claims.
///
/// # Errors
///
/// `AuthError::Expired` for an expired token, `AuthError::Invalid` for
/// anything else that fails verification.
pub fn verify(secret: &SecretString, token: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        _ => AuthError::Invalid,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn secret() -> SecretString {
        SecretString::from("0123456789abcdef0123456789abcdef")
    }

    #[test]
    fn test_issue_then_verify_roundtrip() {
        let token = issue(&secret(), "diner@example.com".to_string(), None).unwrap();
        let claims = verify(&secret(), &token).unwrap();
        assert_eq!(claims.email, "diner@example.com");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = issue(&secret(), "diner@example.com".to_string(), None).unwrap();
        let other = SecretString::from("fedcba9876543210fedcba9876543210");
        assert_eq!(verify(&other, &token), Err(AuthError::Invalid));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        // Sign claims that expired well past the default leeway.
        let claims = Claims {
            email: "diner@example.com".to_string(),
            name: None,
            exp: (Utc::now() - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret().expose_secret().as_bytes()),
        )
        .unwrap();

        assert_eq!(verify(&secret(), &token), Err(AuthError::Expired));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert_eq!(
            verify(&secret(), "not-a-token"),
            Err(AuthError::Invalid)
        );
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
        assert_eq!(bearer_token(None), Err(AuthError::MissingHeader));
        assert_eq!(
            bearer_token(Some("Basic dXNlcjpwYXNz")),
            Err(AuthError::MalformedHeader)
        );
    }
}
