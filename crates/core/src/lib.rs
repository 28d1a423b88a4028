//! Core domain types for the Saffron ordering backend.
//!
//! This crate has no I/O. It holds the value types shared by the API
//! service: validated email addresses, account roles, and currency
//! minor-unit conversion for the payment processor.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::currency::to_minor_units;
pub use types::email::{Email, EmailError};
pub use types::role::Role;
