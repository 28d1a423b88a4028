//! Account repository.

use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::results::{DeleteResult, UpdateResult};

use saffron_core::Role;

use super::{RepositoryError, USERS};
use crate::models::AccountDoc;

/// Repository for account operations against the `users` collection.
pub struct AccountRepository<'a> {
    db: &'a Database,
}

impl<'a> AccountRepository<'a> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<AccountDoc> {
        self.db.collection(USERS)
    }

    /// Find an account by email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<AccountDoc>, RepositoryError> {
        Ok(self.collection().find_one(doc! { "email": email }).await?)
    }

    /// Resolve the privilege role for an email, if the account exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn role_for(&self, email: &str) -> Result<Option<Role>, RepositoryError> {
        Ok(self.find_by_email(email).await?.map(|account| account.role))
    }

    /// List all accounts.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<AccountDoc>, RepositoryError> {
        let cursor = self.collection().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Create an account if none exists for the email (idempotent by email).
    ///
    /// Returns the new id, or `None` when an account with this email already
    /// exists and nothing was inserted. Two concurrent first sign-ins can
    /// both pass the lookup; the unique index on `email` rejects the slower
    /// insert with a duplicate-key error, which reports as `None` like any
    /// other existing account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either operation fails.
    pub async fn create_if_absent(
        &self,
        email: &str,
        name: Option<String>,
    ) -> Result<Option<ObjectId>, RepositoryError> {
        if self.find_by_email(email).await?.is_some() {
            return Ok(None);
        }

        let account = AccountDoc {
            id: None,
            email: email.to_string(),
            name,
            role: Role::Standard,
        };
        match self.collection().insert_one(&account).await {
            Ok(result) => Ok(result.inserted_id.as_object_id()),
            Err(err) if is_duplicate_key(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Elevate an account to administrator.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn elevate(&self, id: ObjectId) -> Result<UpdateResult, RepositoryError> {
        let update = doc! { "$set": { "role": Role::Administrator.as_str() } };
        Ok(self
            .collection()
            .update_one(doc! { "_id": id }, update)
            .await?)
    }

    /// Delete an account by id (explicit admin action only).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, RepositoryError> {
        Ok(self.collection().delete_one(doc! { "_id": id }).await?)
    }

    /// Approximate number of accounts.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the count fails.
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.collection().estimated_document_count().await?)
    }
}

/// Whether a driver error is a unique-index duplicate-key violation (E11000).
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        &*err.kind,
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(write_err))
            if write_err.code == 11000
    )
}
