//! Saffron API - REST backend for a restaurant ordering platform.
//!
//! # Architecture
//!
//! - Axum web framework, JSON request/response bodies
//! - MongoDB for all five entity collections
//! - Stripe PaymentIntents for card payments
//! - Signed bearer tokens (HS256, 10-hour expiry) with an ordered
//!   authorization policy pipeline (credential check, then role check)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod payments;
pub mod routes;
pub mod state;
