//! Menu item entity.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::hex_id;

/// Menu item as stored in the `menu` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub recipe: String,
    pub image: String,
}

/// Menu item as rendered to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub recipe: String,
    pub image: String,
}

impl From<MenuItemDoc> for MenuItem {
    fn from(doc: MenuItemDoc) -> Self {
        Self {
            id: hex_id(doc.id),
            name: doc.name,
            category: doc.category,
            price: doc.price,
            recipe: doc.recipe,
            image: doc.image,
        }
    }
}

/// Payload for menu item creation and update (admin only).
#[derive(Debug, Deserialize)]
pub struct MenuItemInput {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub recipe: String,
    pub image: String,
}

impl MenuItemInput {
    /// Build a storage document from this payload.
    #[must_use]
    pub fn into_doc(self) -> MenuItemDoc {
        MenuItemDoc {
            id: None,
            name: self.name,
            category: self.category,
            price: self.price,
            recipe: self.recipe,
            image: self.image,
        }
    }
}
