//! Menu repository.

use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};

use super::{MENU, RepositoryError};
use crate::models::{MenuItemDoc, MenuItemInput};

/// Repository for menu item operations against the `menu` collection.
pub struct MenuRepository<'a> {
    db: &'a Database,
}

impl<'a> MenuRepository<'a> {
    /// Create a new menu repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<MenuItemDoc> {
        self.db.collection(MENU)
    }

    /// List the full menu.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<MenuItemDoc>, RepositoryError> {
        let cursor = self.collection().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Get a menu item by id. Absent items yield `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ObjectId) -> Result<Option<MenuItemDoc>, RepositoryError> {
        Ok(self.collection().find_one(doc! { "_id": id }).await?)
    }

    /// Insert a new menu item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: MenuItemInput) -> Result<InsertOneResult, RepositoryError> {
        Ok(self.collection().insert_one(input.into_doc()).await?)
    }

    /// Replace the mutable fields of a menu item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ObjectId,
        input: MenuItemInput,
    ) -> Result<UpdateResult, RepositoryError> {
        let update = doc! {
            "$set": {
                "name": &input.name,
                "category": &input.category,
                "price": input.price,
                "recipe": &input.recipe,
                "image": &input.image,
            }
        };
        Ok(self
            .collection()
            .update_one(doc! { "_id": id }, update)
            .await?)
    }

    /// Delete a menu item by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, RepositoryError> {
        Ok(self.collection().delete_one(doc! { "_id": id }).await?)
    }

    /// Approximate number of menu items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the count fails.
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.collection().estimated_document_count().await?)
    }
}
