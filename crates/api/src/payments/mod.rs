//! Payment processor integration.

pub mod stripe;

pub use stripe::{PaymentError, StripeClient};
