//! Cart route handlers.

use axum::extract::State;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::extract::{Json, Path, Query};
use crate::models::{CartLine, CartLineDoc, DeleteView, InsertView, NewCartLine};
use crate::routes::parse_object_id;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CartListQuery {
    #[serde(default)]
    email: Option<String>,
}

/// `GET /carts?email=`: cart lines for an owner; the filter is required.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CartListQuery>,
) -> Result<Json<Vec<CartLine>>> {
    let email = query
        .email
        .ok_or_else(|| AppError::BadRequest("Email is required".to_string()))?;

    let lines = state.carts().list_by_email(&email).await?;
    Ok(Json(lines.into_iter().map(CartLine::from).collect()))
}

/// `POST /carts`: add a menu item to a cart.
pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<NewCartLine>,
) -> Result<Json<InsertView>> {
    let menu_item_id = parse_object_id(&payload.menu_item_id)?;

    let line = CartLineDoc {
        id: None,
        email: payload.email,
        menu_item_id,
        name: payload.name,
        image: payload.image,
        price: payload.price,
    };
    let result = state.carts().add(line).await?;
    Ok(Json(result.into()))
}

/// `DELETE /carts/{id}`: remove a single cart line.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteView>> {
    let id = parse_object_id(&id)?;
    let result = state.carts().delete(id).await?;
    Ok(Json(result.into()))
}
