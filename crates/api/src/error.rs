//! Unified error handling for the API.
//!
//! Provides a single `AppError` type that every handler returns. Each error
//! renders as a JSON `{"message": ...}` envelope with the mapped status,
//! including 5xx, whose detail is logged but never exposed to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::auth::policy::PolicyError;
use crate::db::RepositoryError;
use crate::payments::PaymentError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// No credential was presented on a protected route.
    #[error("Unauthorized access")]
    Unauthenticated,

    /// A credential was presented but failed verification or expired.
    #[error("unauthorized access")]
    InvalidCredential,

    /// The verified identity lacks the required role or ownership.
    #[error("forbidden access")]
    Forbidden,

    /// A required parameter is missing or malformed.
    #[error("{0}")]
    BadRequest(String),

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] RepositoryError),

    /// Payment processor call failed.
    #[error("payment error: {0}")]
    Payment(#[from] PaymentError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<PolicyError> for AppError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::Unauthenticated => Self::Unauthenticated,
            PolicyError::InvalidCredential => Self::InvalidCredential,
            PolicyError::Forbidden => Self::Forbidden,
            PolicyError::Repository(e) => Self::Database(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Collaborator failures are logged here; handlers do not recover them.
        if matches!(self, Self::Database(_) | Self::Payment(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "request failed");
        }

        let status = match &self {
            Self::Unauthenticated | Self::InvalidCredential => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Payment(_) => StatusCode::BAD_GATEWAY,
        };

        // Don't expose internal error details to clients.
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Payment(_) => "Payment provider error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(get_status(AppError::Unauthenticated), StatusCode::UNAUTHORIZED);
        assert_eq!(
            get_status(AppError::InvalidCredential),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(get_status(AppError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            get_status(AppError::BadRequest("x".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(AppError::Unauthenticated.to_string(), "Unauthorized access");
        assert_eq!(AppError::Forbidden.to_string(), "forbidden access");
    }

    #[tokio::test]
    async fn test_error_envelope_is_json_message() {
        let response = AppError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "message": "forbidden access" }));
    }

    #[tokio::test]
    async fn test_internal_detail_is_not_exposed() {
        let err = AppError::Database(RepositoryError::DataCorruption(
            "secret detail".to_string(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "message": "Internal server error" }));
    }
}
