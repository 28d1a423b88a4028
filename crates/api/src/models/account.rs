//! Account entity: identity is the email, privilege is the role.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use saffron_core::Role;

use super::hex_id;

/// Account as stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// Account as rendered to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
}

impl From<AccountDoc> for Account {
    fn from(doc: AccountDoc) -> Self {
        Self {
            id: hex_id(doc.id),
            email: doc.email,
            name: doc.name,
            role: doc.role,
        }
    }
}

/// Payload for account creation (first sign-in).
#[derive(Debug, Deserialize)]
pub struct NewAccount {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}
