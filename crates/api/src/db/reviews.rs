//! Review repository (list-only).

use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::doc;

use super::{REVIEWS, RepositoryError};
use crate::models::ReviewDoc;

/// Repository for review reads against the `reviews` collection.
pub struct ReviewRepository<'a> {
    db: &'a Database,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all reviews.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ReviewDoc>, RepositoryError> {
        let cursor = self
            .db
            .collection::<ReviewDoc>(REVIEWS)
            .find(doc! {})
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
