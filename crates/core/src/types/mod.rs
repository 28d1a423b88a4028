//! Value types shared across the workspace.

pub mod currency;
pub mod email;
pub mod role;
