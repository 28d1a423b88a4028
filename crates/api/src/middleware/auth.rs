//! Authentication extractors for route handlers.
//!
//! Protected handlers take [`RequireAuth`] (verified credential) or
//! [`RequireAdmin`] (verified credential + administrator role) as an
//! argument; the extractor runs the corresponding authorization policy and
//! rejects with the mapped `AppError` before the handler body runs.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use saffron_core::Role;

use crate::auth::policy::{self, Policy, RoleSource};
use crate::auth::token::Claims;
use crate::db::RepositoryError;
use crate::error::AppError;
use crate::state::AppState;

impl RoleSource for AppState {
    async fn role_for(&self, email: &str) -> Result<Option<Role>, RepositoryError> {
        self.accounts().role_for(email).await
    }
}

async fn run_policy(
    policy: &Policy,
    parts: &Parts,
    state: &AppState,
) -> Result<Claims, AppError> {
    let authorization = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    policy
        .evaluate(authorization, &state.config().jwt_secret, state)
        .await
        .map_err(AppError::from)
}

/// Extractor that requires a verified bearer credential.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireAuth(claims): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", claims.email)
/// }
/// ```
pub struct RequireAuth(pub Claims);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = run_policy(&policy::AUTHENTICATED, parts, state).await?;
        Ok(Self(claims))
    }
}

/// Extractor that requires a verified credential with administrator role.
///
/// Runs the full policy pipeline: credential verification first, then the
/// role lookup against the accounts collection.
pub struct RequireAdmin(pub Claims);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = run_policy(&policy::ADMIN, parts, state).await?;
        Ok(Self(claims))
    }
}
