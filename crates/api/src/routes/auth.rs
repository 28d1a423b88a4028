//! Token issuance.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use saffron_core::Email;

use crate::auth::token;
use crate::error::{AppError, Result};
use crate::extract::Json;
use crate::state::AppState;

/// Identity payload supplied by a caller already authenticated elsewhere.
#[derive(Debug, Deserialize)]
pub struct IdentityPayload {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `POST /jwt`: sign a bearer token for the supplied identity.
///
/// Unauthenticated by design: authentication proper is delegated to an
/// external identity provider and this endpoint trusts its caller.
pub async fn issue_jwt(
    State(state): State<AppState>,
    Json(payload): Json<IdentityPayload>,
) -> Result<Json<TokenResponse>> {
    let email =
        Email::parse(&payload.email).map_err(|err| AppError::BadRequest(err.to_string()))?;

    let token = token::issue(
        &state.config().jwt_secret,
        email.into_inner(),
        payload.name,
    )
    .map_err(|err| AppError::Internal(err.to_string()))?;

    Ok(Json(TokenResponse { token }))
}
