//! Cart line entity: one pending-purchase item, prior to settlement.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::hex_id;

/// Cart line as stored in the `carts` collection.
///
/// Name, image, and price are snapshots of the menu item at add time, so a
/// later menu edit does not change what the diner agreed to pay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub menu_item_id: ObjectId,
    pub name: String,
    pub image: String,
    pub price: f64,
}

/// Cart line as rendered to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub email: String,
    pub menu_item_id: String,
    pub name: String,
    pub image: String,
    pub price: f64,
}

impl From<CartLineDoc> for CartLine {
    fn from(doc: CartLineDoc) -> Self {
        Self {
            id: hex_id(doc.id),
            email: doc.email,
            menu_item_id: doc.menu_item_id.to_hex(),
            name: doc.name,
            image: doc.image,
            price: doc.price,
        }
    }
}

/// Payload for adding a menu item to a cart.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartLine {
    pub email: String,
    pub menu_item_id: String,
    pub name: String,
    pub image: String,
    pub price: f64,
}
