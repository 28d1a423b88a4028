//! Cart repository.

use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::results::{DeleteResult, InsertOneResult};

use super::{CARTS, RepositoryError};
use crate::models::CartLineDoc;

/// Repository for cart line operations against the `carts` collection.
///
/// Bulk removal at settlement time lives in
/// [`PaymentRepository::settle`](super::PaymentRepository::settle), which
/// needs both collections inside one transaction.
pub struct CartRepository<'a> {
    db: &'a Database,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<CartLineDoc> {
        self.db.collection(CARTS)
    }

    /// List cart lines owned by an email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_email(&self, email: &str) -> Result<Vec<CartLineDoc>, RepositoryError> {
        let cursor = self.collection().find(doc! { "email": email }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Add a cart line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add(&self, line: CartLineDoc) -> Result<InsertOneResult, RepositoryError> {
        Ok(self.collection().insert_one(line).await?)
    }

    /// Delete a single cart line by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, RepositoryError> {
        Ok(self.collection().delete_one(doc! { "_id": id }).await?)
    }
}
