//! Review entity (read-only in this service).

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::hex_id;

/// Review as stored in the `reviews` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub details: String,
    pub rating: f64,
}

/// Review as rendered to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub name: String,
    pub details: String,
    pub rating: f64,
}

impl From<ReviewDoc> for Review {
    fn from(doc: ReviewDoc) -> Self {
        Self {
            id: hex_id(doc.id),
            name: doc.name,
            details: doc.details,
            rating: doc.rating,
        }
    }
}
