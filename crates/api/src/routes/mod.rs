//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                          - Health check (plain text)
//!
//! # Auth
//! POST   /jwt                       - Issue a bearer token (unauthenticated by design)
//!
//! # Users
//! GET    /users                     - List accounts (auth + admin)
//! POST   /users                     - Create account, idempotent by email
//! GET    /users/admin/{email}       - Admin-status check (auth, self-only)
//! PATCH  /users/admin/{id}          - Elevate to administrator (auth + admin)
//! DELETE /users/{id}                - Delete account (auth + admin)
//!
//! # Menu
//! GET    /menu                      - Full menu
//! GET    /menu/{id}                 - Single item (null body when absent)
//! POST   /menu                      - Create item (auth + admin)
//! PATCH  /menu/{id}                 - Update item (auth + admin)
//! DELETE /menu/{id}                 - Delete item (auth + admin)
//!
//! # Reviews
//! GET    /reviews                   - List reviews
//!
//! # Carts
//! GET    /carts?email=              - Cart lines for owner (400 without email)
//! POST   /carts                     - Add a cart line
//! DELETE /carts/{id}                - Remove a cart line
//!
//! # Payments
//! POST   /create-payment-intent     - Reserve a provider-side intent
//! GET    /payments/{email}          - Payment history (auth, self-only)
//! POST   /payments                  - Settle: record payment, retire cart lines (auth)
//!
//! # Analytics
//! GET    /admin-stats               - Summary counts + revenue (auth + admin)
//! GET    /order-stats               - Per-category order statistics (auth + admin)
//! ```

pub mod analytics;
pub mod auth;
pub mod carts;
pub mod menu;
pub mod payments;
pub mod reviews;
pub mod users;

use axum::{
    Router,
    routing::{delete, get, post},
};
use mongodb::bson::oid::ObjectId;

use crate::error::AppError;
use crate::state::AppState;

/// Parse a path/body identifier into an `ObjectId`.
///
/// All entities use the uniform hex-string representation at the API
/// boundary; a malformed id is a client error, not a driver error.
pub(crate) fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::BadRequest(format!("malformed id: {raw}")))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(auth::issue_jwt))
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/admin/{id}",
            get(users::admin_status).patch(users::elevate),
        )
        .route("/users/{id}", delete(users::remove))
        .route("/menu", get(menu::list).post(menu::create))
        .route(
            "/menu/{id}",
            get(menu::show).patch(menu::update).delete(menu::remove),
        )
        .route("/reviews", get(reviews::list))
        .route("/carts", get(carts::list).post(carts::add))
        .route("/carts/{id}", delete(carts::remove))
        .route("/create-payment-intent", post(payments::create_intent))
        .route("/payments", post(payments::settle))
        .route("/payments/{email}", get(payments::history))
        .route("/admin-stats", get(analytics::admin_stats))
        .route("/order-stats", get(analytics::order_stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_rejects_garbage() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_parse_object_id_accepts_hex() {
        assert!(parse_object_id("65f0a1b2c3d4e5f60718293a").is_ok());
    }
}
