//! Authorization policy pipeline.
//!
//! A policy is an ordered list of checks; each check either allows the
//! request to proceed or denies it with a reason ([`PolicyError`]). The role
//! check consumes the claims produced by the authentication check, so it can
//! never run independently; admin-gated routes always verify the credential
//! first.

use secrecy::SecretString;
use thiserror::Error;

use saffron_core::Role;

use super::token::{self, AuthError, Claims};
use crate::db::RepositoryError;

/// Reason a policy denied a request.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// No credential was presented.
    #[error("missing credential")]
    Unauthenticated,
    /// The credential failed verification or expired.
    #[error("invalid credential")]
    InvalidCredential,
    /// The identity does not hold the required privilege.
    #[error("insufficient privilege")]
    Forbidden,
    /// The role lookup failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<AuthError> for PolicyError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingHeader => Self::Unauthenticated,
            _ => Self::InvalidCredential,
        }
    }
}

/// A single check in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// A bearer credential is present and verifies against the signing secret.
    Authenticated,
    /// The authenticated identity's account holds the administrator role.
    AdminRole,
}

/// Source of account roles for the `AdminRole` check.
#[allow(async_fn_in_trait)]
pub trait RoleSource {
    /// Resolve the stored role for an email, `None` if no account exists.
    async fn role_for(&self, email: &str) -> Result<Option<Role>, RepositoryError>;
}

/// An ordered authorization policy.
#[derive(Debug, Clone, Copy)]
pub struct Policy {
    checks: &'static [Check],
}

/// Policy requiring only a verified credential.
pub const AUTHENTICATED: Policy = Policy {
    checks: &[Check::Authenticated],
};

/// Policy requiring a verified credential whose account is an administrator.
pub const ADMIN: Policy = Policy {
    checks: &[Check::Authenticated, Check::AdminRole],
};

impl Policy {
    /// Evaluate the checks in order against a raw `Authorization` header.
    ///
    /// Returns the verified claims on allow; the first failing check's
    /// reason on deny.
    ///
    /// # Errors
    ///
    /// See [`PolicyError`] for the deny reasons.
    pub async fn evaluate<R: RoleSource>(
        &self,
        authorization: Option<&str>,
        secret: &SecretString,
        roles: &R,
    ) -> Result<Claims, PolicyError> {
        let mut claims: Option<Claims> = None;

        for check in self.checks {
            match check {
                Check::Authenticated => {
                    let bearer = token::bearer_token(authorization)?;
                    claims = Some(token::verify(secret, bearer)?);
                }
                Check::AdminRole => {
                    // Unreachable without a prior Authenticated check; deny
                    // rather than panic if a policy is ever miswired.
                    let Some(claims) = claims.as_ref() else {
                        return Err(PolicyError::Unauthenticated);
                    };

                    let role = roles.role_for(&claims.email).await?;
                    if !role.is_some_and(Role::is_admin) {
                        tracing::debug!(email = %claims.email, "admin check denied");
                        return Err(PolicyError::Forbidden);
                    }
                }
            }
        }

        claims.ok_or(PolicyError::Unauthenticated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::auth::token::issue;

    impl RoleSource for HashMap<String, Role> {
        async fn role_for(&self, email: &str) -> Result<Option<Role>, RepositoryError> {
            Ok(self.get(email).copied())
        }
    }

    fn secret() -> SecretString {
        SecretString::from("0123456789abcdef0123456789abcdef")
    }

    fn roles() -> HashMap<String, Role> {
        HashMap::from([
            ("chef@example.com".to_string(), Role::Administrator),
            ("diner@example.com".to_string(), Role::Standard),
        ])
    }

    fn bearer(email: &str) -> String {
        let token = issue(&secret(), email.to_string(), None).unwrap();
        format!("Bearer {token}")
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthenticated() {
        let result = AUTHENTICATED.evaluate(None, &secret(), &roles()).await;
        assert!(matches!(result, Err(PolicyError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_bad_token_is_invalid_credential() {
        let result = AUTHENTICATED
            .evaluate(Some("Bearer junk"), &secret(), &roles())
            .await;
        assert!(matches!(result, Err(PolicyError::InvalidCredential)));
    }

    #[tokio::test]
    async fn test_authenticated_allows_any_verified_identity() {
        let header = bearer("diner@example.com");
        let claims = AUTHENTICATED
            .evaluate(Some(&header), &secret(), &roles())
            .await
            .unwrap();
        assert_eq!(claims.email, "diner@example.com");
    }

    #[tokio::test]
    async fn test_admin_denies_standard_role() {
        let header = bearer("diner@example.com");
        let result = ADMIN.evaluate(Some(&header), &secret(), &roles()).await;
        assert!(matches!(result, Err(PolicyError::Forbidden)));
    }

    #[tokio::test]
    async fn test_admin_denies_unknown_account() {
        let header = bearer("stranger@example.com");
        let result = ADMIN.evaluate(Some(&header), &secret(), &roles()).await;
        assert!(matches!(result, Err(PolicyError::Forbidden)));
    }

    #[tokio::test]
    async fn test_admin_allows_administrator() {
        let header = bearer("chef@example.com");
        let claims = ADMIN
            .evaluate(Some(&header), &secret(), &roles())
            .await
            .unwrap();
        assert_eq!(claims.email, "chef@example.com");
    }

    #[tokio::test]
    async fn test_admin_still_requires_credential() {
        // The role check never runs without authentication succeeding first.
        let result = ADMIN.evaluate(None, &secret(), &roles()).await;
        assert!(matches!(result, Err(PolicyError::Unauthenticated)));
    }
}
