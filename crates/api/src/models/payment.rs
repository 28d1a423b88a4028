//! Payment record entity: written exactly once per settlement, immutable.

use mongodb::bson::DateTime;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::hex_id;

/// Payment record as stored in the `payments` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub date: DateTime,
    pub status: String,
    /// Cart lines retired by this settlement.
    pub cart_ids: Vec<ObjectId>,
    /// Menu items purchased; joined against the menu for order statistics.
    pub menu_item_ids: Vec<ObjectId>,
}

/// Payment record as rendered to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub email: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub date: String,
    pub status: String,
    pub cart_ids: Vec<String>,
    pub menu_item_ids: Vec<String>,
}

impl From<PaymentDoc> for Payment {
    fn from(doc: PaymentDoc) -> Self {
        Self {
            id: hex_id(doc.id),
            email: doc.email,
            price: doc.price,
            transaction_id: doc.transaction_id,
            date: doc.date.try_to_rfc3339_string().unwrap_or_default(),
            status: doc.status,
            cart_ids: doc.cart_ids.iter().map(|id| id.to_hex()).collect(),
            menu_item_ids: doc.menu_item_ids.iter().map(|id| id.to_hex()).collect(),
        }
    }
}

/// Settlement payload submitted after the processor confirms payment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub email: String,
    pub price: f64,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub cart_ids: Vec<String>,
    pub menu_item_ids: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payment_accepts_camel_case() {
        let payload: NewPayment = serde_json::from_str(
            r#"{
                "email": "diner@example.com",
                "price": 42.5,
                "transactionId": "pi_123",
                "cartIds": ["65f0a1b2c3d4e5f60718293a"],
                "menuItemIds": ["65f0a1b2c3d4e5f60718293b"]
            }"#,
        )
        .unwrap();
        assert_eq!(payload.transaction_id.as_deref(), Some("pi_123"));
        assert_eq!(payload.cart_ids.len(), 1);
        assert!(payload.status.is_none());
    }

    #[test]
    fn test_view_renders_hex_id_lists() {
        let cart_id = ObjectId::new();
        let menu_id = ObjectId::new();
        let view: Payment = PaymentDoc {
            id: Some(ObjectId::new()),
            email: "diner@example.com".to_string(),
            price: 60.0,
            transaction_id: None,
            date: DateTime::now(),
            status: "pending".to_string(),
            cart_ids: vec![cart_id],
            menu_item_ids: vec![menu_id],
        }
        .into();

        assert_eq!(view.cart_ids, vec![cart_id.to_hex()]);
        assert_eq!(view.menu_item_ids, vec![menu_id.to_hex()]);
    }
}
