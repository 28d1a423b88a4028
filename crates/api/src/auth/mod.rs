//! Credential verification and authorization policy.
//!
//! Two pieces: [`token`] issues and verifies the signed bearer credential,
//! and [`policy`] decides what a verified identity may do. Route handlers
//! never touch either directly; they use the extractors in
//! [`crate::middleware::auth`].

pub mod policy;
pub mod token;

pub use policy::{Check, Policy, PolicyError, RoleSource};
pub use token::{AuthError, Claims};
