//! Database access for the Saffron MongoDB deployment.
//!
//! # Collections
//!
//! - `users` - accounts (identity = email, privilege role)
//! - `menu` - menu items
//! - `reviews` - diner reviews (read-only here)
//! - `carts` - pending cart lines
//! - `payments` - settled payment records
//!
//! One repository struct per collection, each borrowing the shared
//! [`mongodb::Database`] handle owned by the application state. Identifiers
//! are `ObjectId` everywhere; hex-string mapping happens in the models.

pub mod accounts;
pub mod analytics;
pub mod carts;
pub mod menu;
pub mod payments;
pub mod reviews;

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::models::AccountDoc;

pub use accounts::AccountRepository;
pub use analytics::AnalyticsRepository;
pub use carts::CartRepository;
pub use menu::MenuRepository;
pub use payments::PaymentRepository;
pub use reviews::ReviewRepository;

pub(crate) const USERS: &str = "users";
pub(crate) const MENU: &str = "menu";
pub(crate) const REVIEWS: &str = "reviews";
pub(crate) const CARTS: &str = "carts";
pub(crate) const PAYMENTS: &str = "payments";

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from the driver.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Connect a MongoDB client.
///
/// The returned client is the single long-lived connection for the process;
/// it is safe for concurrent use and must be shut down explicitly via
/// [`Client::shutdown`] when the server stops.
///
/// # Errors
///
/// Returns a driver error if the URI cannot be parsed or the client cannot
/// be constructed.
pub async fn connect(uri: &SecretString) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri.expose_secret()).await?;
    options.app_name = Some("saffron-api".to_string());
    Client::with_options(options)
}

/// Unique index on `users.email`; account identity is the email, so two
/// concurrent first sign-ins must not produce two accounts.
fn account_email_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

/// Create the indexes the service relies on. Idempotent; runs at startup.
///
/// # Errors
///
/// Returns a driver error if index creation fails.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    db.collection::<AccountDoc>(USERS)
        .create_index(account_email_index())
        .await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_account_email_index_is_unique() {
        let index = account_email_index();
        assert_eq!(index.keys, doc! { "email": 1 });
        assert_eq!(index.options.unwrap().unique, Some(true));
    }
}
