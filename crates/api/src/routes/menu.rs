//! Menu route handlers.

use axum::extract::State;

use crate::error::Result;
use crate::extract::{Json, Path};
use crate::middleware::RequireAdmin;
use crate::models::{DeleteView, InsertView, MenuItem, MenuItemInput, UpdateView};
use crate::routes::parse_object_id;
use crate::state::AppState;

/// `GET /menu`: the full menu.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>> {
    let items = state.menu().list().await?;
    Ok(Json(items.into_iter().map(MenuItem::from).collect()))
}

/// `GET /menu/{id}`: a single item; absent ids yield a null body, not 404.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<MenuItem>>> {
    let id = parse_object_id(&id)?;
    let item = state.menu().get(id).await?;
    Ok(Json(item.map(MenuItem::from)))
}

/// `POST /menu`: create a menu item (admin only).
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_claims): RequireAdmin,
    Json(input): Json<MenuItemInput>,
) -> Result<Json<InsertView>> {
    let result = state.menu().create(input).await?;
    Ok(Json(result.into()))
}

/// `PATCH /menu/{id}`: update a menu item (admin only).
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_claims): RequireAdmin,
    Path(id): Path<String>,
    Json(input): Json<MenuItemInput>,
) -> Result<Json<UpdateView>> {
    let id = parse_object_id(&id)?;
    let result = state.menu().update(id, input).await?;
    Ok(Json(result.into()))
}

/// `DELETE /menu/{id}`: delete a menu item (admin only).
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_claims): RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<DeleteView>> {
    let id = parse_object_id(&id)?;
    let result = state.menu().delete(id).await?;
    Ok(Json(result.into()))
}
