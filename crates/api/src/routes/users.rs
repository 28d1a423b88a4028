//! Account route handlers.

use axum::extract::State;
use serde::Serialize;

use saffron_core::{Email, Role};

use crate::error::{AppError, Result};
use crate::extract::{Json, Path};
use crate::middleware::{RequireAdmin, RequireAuth};
use crate::models::{Account, DeleteView, InsertView, NewAccount, UpdateView};
use crate::routes::parse_object_id;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AdminStatus {
    pub admin: bool,
}

/// `GET /users/admin/{email}`: whether the account holds admin privilege.
///
/// Self-only: the path email must match the verified credential's email.
pub async fn admin_status(
    State(state): State<AppState>,
    RequireAuth(claims): RequireAuth,
    Path(email): Path<String>,
) -> Result<Json<AdminStatus>> {
    if email != claims.email {
        return Err(AppError::Forbidden);
    }

    let role = state.accounts().role_for(&email).await?;
    Ok(Json(AdminStatus {
        admin: role.is_some_and(Role::is_admin),
    }))
}

/// `GET /users`: list all accounts (admin only).
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_claims): RequireAdmin,
) -> Result<Json<Vec<Account>>> {
    let accounts = state.accounts().list().await?;
    Ok(Json(accounts.into_iter().map(Account::from).collect()))
}

/// `POST /users`: create an account, idempotent by email.
///
/// Called on first sign-in. A second call with the same email is a no-op
/// reporting no new identifier rather than an error or a duplicate.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewAccount>,
) -> Result<Json<InsertView>> {
    let email =
        Email::parse(&payload.email).map_err(|err| AppError::BadRequest(err.to_string()))?;

    let inserted = state
        .accounts()
        .create_if_absent(email.as_str(), payload.name)
        .await?;

    let view = match inserted {
        Some(id) => InsertView {
            inserted_id: Some(id.to_hex()),
            message: None,
        },
        None => InsertView::already_exists("User already exists"),
    };
    Ok(Json(view))
}

/// `PATCH /users/admin/{id}`: elevate an account to administrator (admin only).
pub async fn elevate(
    State(state): State<AppState>,
    RequireAdmin(_claims): RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<UpdateView>> {
    let id = parse_object_id(&id)?;
    let result = state.accounts().elevate(id).await?;
    Ok(Json(result.into()))
}

/// `DELETE /users/{id}`: delete an account (admin only).
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_claims): RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<DeleteView>> {
    let id = parse_object_id(&id)?;
    let result = state.accounts().delete(id).await?;
    Ok(Json(result.into()))
}
