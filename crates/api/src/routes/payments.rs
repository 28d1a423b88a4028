//! Payment route handlers: intent creation, history, and settlement.

use axum::extract::State;
use mongodb::bson::DateTime;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use serde_json::Value;

use saffron_core::to_minor_units;

use crate::error::{AppError, Result};
use crate::extract::{Json, Path};
use crate::middleware::RequireAuth;
use crate::models::{DeleteView, InsertView, NewPayment, Payment, PaymentDoc};
use crate::routes::parse_object_id;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSecretResponse {
    pub client_secret: String,
}

/// Pull a numeric price out of an intent request body.
///
/// Missing or non-numeric prices are a client error, not a deserialization
/// failure, so the body is inspected as a raw JSON value.
fn extract_price(body: &Value) -> Result<f64> {
    body.get("price")
        .and_then(Value::as_f64)
        .ok_or_else(|| AppError::BadRequest("price must be a number".to_string()))
}

/// `POST /create-payment-intent`: reserve provider-side state for a charge.
///
/// Converts the major-unit price to minor units and returns the intent's
/// client-facing secret. Nothing is persisted at this step.
pub async fn create_intent(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ClientSecretResponse>> {
    let price = extract_price(&body)?;
    let amount = to_minor_units(price);

    let client_secret = state.stripe().create_payment_intent(amount, "usd").await?;
    Ok(Json(ClientSecretResponse { client_secret }))
}

/// `GET /payments/{email}`: payment history, self-only.
pub async fn history(
    State(state): State<AppState>,
    RequireAuth(claims): RequireAuth,
    Path(email): Path<String>,
) -> Result<Json<Vec<Payment>>> {
    if email != claims.email {
        return Err(AppError::Forbidden);
    }

    let payments = state.payments().list_by_email(&email).await?;
    Ok(Json(payments.into_iter().map(Payment::from).collect()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementView {
    pub payment_result: InsertView,
    pub delete_result: DeleteView,
}

/// `POST /payments`: settle a confirmed payment.
///
/// Persists the payment record and retires the cart lines it covers as one
/// transactional unit (see `PaymentRepository::settle`).
pub async fn settle(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Json(payload): Json<NewPayment>,
) -> Result<Json<SettlementView>> {
    let cart_ids = parse_id_list(&payload.cart_ids)?;
    let menu_item_ids = parse_id_list(&payload.menu_item_ids)?;

    let record = PaymentDoc {
        id: None,
        email: payload.email,
        price: payload.price,
        transaction_id: payload.transaction_id,
        date: DateTime::now(),
        status: payload.status.unwrap_or_else(|| "pending".to_string()),
        cart_ids,
        menu_item_ids,
    };

    let (inserted, deleted) = state.payments().settle(record).await?;
    Ok(Json(SettlementView {
        payment_result: inserted.into(),
        delete_result: deleted.into(),
    }))
}

fn parse_id_list(raw: &[String]) -> Result<Vec<ObjectId>> {
    raw.iter().map(|id| parse_object_id(id)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_price_present() {
        assert!((extract_price(&json!({ "price": 19.99 })).unwrap() - 19.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extract_price_missing_is_bad_request() {
        assert!(matches!(
            extract_price(&json!({})),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_extract_price_non_numeric_is_bad_request() {
        assert!(matches!(
            extract_price(&json!({ "price": "19.99" })),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_parse_id_list_rejects_any_malformed_entry() {
        let ids = vec![
            "65f0a1b2c3d4e5f60718293a".to_string(),
            "oops".to_string(),
        ];
        assert!(parse_id_list(&ids).is_err());
    }
}
