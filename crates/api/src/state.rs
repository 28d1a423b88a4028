//! Application state shared across handlers.

use std::sync::Arc;

use mongodb::{Client, Database};

use crate::config::AppConfig;
use crate::db::{
    AccountRepository, AnalyticsRepository, CartRepository, MenuRepository, PaymentRepository,
    ReviewRepository,
};
use crate::payments::StripeClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Owns the single long-lived database client
/// (safe for concurrent use by the driver's contract) and the payment
/// processor client; both are opened at startup and torn down on shutdown.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    client: Client,
    database: Database,
    stripe: StripeClient,
}

impl AppState {
    /// Create a new application state from configuration and a connected client.
    #[must_use]
    pub fn new(config: AppConfig, client: Client) -> Self {
        let database = client.database(&config.database_name);
        let stripe = StripeClient::new(&config.stripe_secret_key);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                client,
                database,
                stripe,
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the database handle.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.inner.database
    }

    /// Get a reference to the Stripe client.
    #[must_use]
    pub fn stripe(&self) -> &StripeClient {
        &self.inner.stripe
    }

    /// Account repository bound to this state's database.
    #[must_use]
    pub fn accounts(&self) -> AccountRepository<'_> {
        AccountRepository::new(&self.inner.database)
    }

    /// Menu repository bound to this state's database.
    #[must_use]
    pub fn menu(&self) -> MenuRepository<'_> {
        MenuRepository::new(&self.inner.database)
    }

    /// Review repository bound to this state's database.
    #[must_use]
    pub fn reviews(&self) -> ReviewRepository<'_> {
        ReviewRepository::new(&self.inner.database)
    }

    /// Cart repository bound to this state's database.
    #[must_use]
    pub fn carts(&self) -> CartRepository<'_> {
        CartRepository::new(&self.inner.database)
    }

    /// Payment repository; carries the client for transactional settlement.
    #[must_use]
    pub fn payments(&self) -> PaymentRepository<'_> {
        PaymentRepository::new(&self.inner.database, &self.inner.client)
    }

    /// Analytics repository bound to this state's database.
    #[must_use]
    pub fn analytics(&self) -> AnalyticsRepository<'_> {
        AnalyticsRepository::new(&self.inner.database)
    }
}
