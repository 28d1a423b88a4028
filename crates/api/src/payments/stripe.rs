//! Stripe PaymentIntents client.
//!
//! Thin wrapper over the PaymentIntents REST endpoint: one form-encoded
//! POST per intent, authenticated with the account's secret key. Creating
//! an intent only reserves provider-side state; nothing is persisted here.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_API_BASE: &str = "https://api.stripe.com/v1";

/// Errors from the payment processor boundary.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Transport-level failure talking to Stripe.
    #[error("stripe request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe rejected the request.
    #[error("stripe rejected the request ({status}): {message}")]
    Api { status: u16, message: String },

    /// Stripe accepted the request but returned no client secret.
    #[error("stripe response missing client secret")]
    MissingClientSecret,
}

#[derive(Debug, Deserialize)]
struct PaymentIntent {
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

/// Client for the Stripe PaymentIntents API.
#[derive(Clone)]
pub struct StripeClient {
    inner: Arc<StripeClientInner>,
}

struct StripeClientInner {
    http: reqwest::Client,
    api_base: String,
    secret_key: SecretString,
}

impl StripeClient {
    /// Create a new Stripe client.
    #[must_use]
    pub fn new(secret_key: &SecretString) -> Self {
        Self::with_api_base(secret_key, DEFAULT_API_BASE)
    }

    /// Create a client against a non-default API base (test servers).
    #[must_use]
    pub fn with_api_base(secret_key: &SecretString, api_base: &str) -> Self {
        Self {
            inner: Arc::new(StripeClientInner {
                http: reqwest::Client::new(),
                api_base: api_base.trim_end_matches('/').to_string(),
                secret_key: secret_key.clone(),
            }),
        }
    }

    /// Create a card-payable payment intent for `amount` minor units and
    /// return its client-facing secret.
    ///
    /// # Errors
    ///
    /// `PaymentError::Http` on transport failure, `PaymentError::Api` when
    /// Stripe rejects the request, `PaymentError::MissingClientSecret` when
    /// the response omits the secret.
    pub async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<String, PaymentError> {
        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .inner
            .http
            .post(format!("{}/payment_intents", self.inner.api_base))
            // Stripe authenticates with the secret key as the basic-auth user.
            .basic_auth(self.inner.secret_key.expose_secret(), None::<&str>)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<StripeErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.error.message)
                .unwrap_or_else(|| "no error detail".to_string());
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let intent: PaymentIntent = response.json().await?;
        intent
            .client_secret
            .ok_or(PaymentError::MissingClientSecret)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_response_parses_client_secret() {
        let body = r#"{
            "id": "pi_3Nv0XY2eZvKYlo2C1xyzabcd",
            "object": "payment_intent",
            "amount": 1999,
            "client_secret": "pi_3Nv0XY2eZvKYlo2C1xyzabcd_secret_xyz"
        }"#;
        let intent: PaymentIntent = serde_json::from_str(body).unwrap();
        assert_eq!(
            intent.client_secret.as_deref(),
            Some("pi_3Nv0XY2eZvKYlo2C1xyzabcd_secret_xyz")
        );
    }

    #[test]
    fn test_error_body_parses_message() {
        let body = r#"{
            "error": {
                "type": "invalid_request_error",
                "message": "Amount must be at least 50 cents."
            }
        }"#;
        let parsed: StripeErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.error.message.as_deref(),
            Some("Amount must be at least 50 cents.")
        );
    }

    #[test]
    fn test_api_base_trailing_slash_is_trimmed() {
        let client = StripeClient::with_api_base(
            &SecretString::from("sk_test_abc123"),
            "http://localhost:12111/v1/",
        );
        assert_eq!(client.inner.api_base, "http://localhost:12111/v1");
    }
}
