//! Payment repository and the settlement coordinator.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::results::{DeleteResult, InsertOneResult};
use mongodb::{Client, Database};

use super::{CARTS, PAYMENTS, RepositoryError};
use crate::models::{CartLineDoc, PaymentDoc};

/// Repository for payment records against the `payments` collection.
///
/// Holds the client in addition to the database handle because settlement
/// spans two collections and runs inside a client session.
pub struct PaymentRepository<'a> {
    db: &'a Database,
    client: &'a Client,
}

impl<'a> PaymentRepository<'a> {
    /// Create a new payment repository.
    #[must_use]
    pub const fn new(db: &'a Database, client: &'a Client) -> Self {
        Self { db, client }
    }

    fn collection(&self) -> mongodb::Collection<PaymentDoc> {
        self.db.collection(PAYMENTS)
    }

    /// List payment records owned by an email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_email(&self, email: &str) -> Result<Vec<PaymentDoc>, RepositoryError> {
        let cursor = self.collection().find(doc! { "email": email }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Settle a confirmed payment: persist the record and retire the cart
    /// lines it covers as one transactional unit.
    ///
    /// Both writes run inside a single client-session transaction, so a crash
    /// between them cannot leave a paid-for cart line still billable.
    /// Requires a replica-set deployment; standalone servers do not support
    /// transactions.
    ///
    /// Concurrent settlement of the *same* cart lines is not fully guarded:
    /// the transaction prevents partial state, but a duplicate submission
    /// still inserts a second record whose delete matches zero lines; the
    /// caller can detect this from a `deleted_count` of zero.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either write or the commit
    /// fails; the transaction is aborted and neither write is visible.
    pub async fn settle(
        &self,
        record: PaymentDoc,
    ) -> Result<(InsertOneResult, DeleteResult), RepositoryError> {
        let mut session = self.client.start_session().await?;
        session.start_transaction().await?;

        let payments = self.collection();
        let carts = self.db.collection::<CartLineDoc>(CARTS);
        let cart_filter = doc! { "_id": { "$in": record.cart_ids.clone() } };

        let result = async {
            let inserted = payments.insert_one(&record).session(&mut session).await?;
            let deleted = carts
                .delete_many(cart_filter)
                .session(&mut session)
                .await?;
            Ok::<_, mongodb::error::Error>((inserted, deleted))
        }
        .await;

        match result {
            Ok(results) => {
                session.commit_transaction().await?;
                Ok(results)
            }
            Err(err) => {
                // Abort failures are secondary; the original error is what matters.
                let _ = session.abort_transaction().await;
                Err(err.into())
            }
        }
    }

    /// Approximate number of payment records.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the count fails.
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.collection().estimated_document_count().await?)
    }
}
