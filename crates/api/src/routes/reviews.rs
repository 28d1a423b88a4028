//! Review route handlers (read-only).

use axum::extract::State;

use crate::error::Result;
use crate::extract::Json;
use crate::models::Review;
use crate::state::AppState;

/// `GET /reviews`: all diner reviews.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Review>>> {
    let reviews = state.reviews().list().await?;
    Ok(Json(reviews.into_iter().map(Review::from).collect()))
}
