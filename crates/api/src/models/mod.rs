//! Entity models and their API representations.
//!
//! Each entity has a storage document (`*Doc`, BSON field names, native
//! `ObjectId` identifiers) and an API view (camelCase JSON, ids rendered as
//! 24-char hex strings). The mapping between the two lives entirely here.

pub mod account;
pub mod cart;
pub mod menu;
pub mod payment;
pub mod review;

pub use account::{Account, AccountDoc, NewAccount};
pub use cart::{CartLine, CartLineDoc, NewCartLine};
pub use menu::{MenuItem, MenuItemDoc, MenuItemInput};
pub use payment::{NewPayment, Payment, PaymentDoc};
pub use review::{Review, ReviewDoc};

use mongodb::bson::oid::ObjectId;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;

/// Render an optional document id as a hex string (empty if unset).
pub(crate) fn hex_id(id: Option<ObjectId>) -> String {
    id.map(|oid| oid.to_hex()).unwrap_or_default()
}

/// Result of an insert, as reported to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertView {
    pub inserted_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InsertView {
    /// A no-op insert (idempotent account creation hit an existing record).
    #[must_use]
    pub fn already_exists(message: &str) -> Self {
        Self {
            inserted_id: None,
            message: Some(message.to_string()),
        }
    }
}

impl From<InsertOneResult> for InsertView {
    fn from(result: InsertOneResult) -> Self {
        Self {
            inserted_id: result.inserted_id.as_object_id().map(|oid| oid.to_hex()),
            message: None,
        }
    }
}

/// Result of an update, as reported to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateView {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdateView {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

/// Result of a delete, as reported to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteView {
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteView {
    fn from(result: DeleteResult) -> Self {
        Self {
            deleted_count: result.deleted_count,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_view_already_exists_shape() {
        let view = InsertView::already_exists("User already exists");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "insertedId": null, "message": "User already exists" })
        );
    }

    #[test]
    fn test_insert_view_omits_message_on_success() {
        let view = InsertView {
            inserted_id: Some("65f0a1b2c3d4e5f60718293a".to_string()),
            message: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "insertedId": "65f0a1b2c3d4e5f60718293a" })
        );
    }

    #[test]
    fn test_hex_id_roundtrip() {
        let oid = ObjectId::parse_str("65f0a1b2c3d4e5f60718293a").unwrap();
        assert_eq!(hex_id(Some(oid)), "65f0a1b2c3d4e5f60718293a");
        assert_eq!(hex_id(None), "");
    }
}
