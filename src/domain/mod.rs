//! Domain layer - entities, the authorization policy, and port definitions

pub mod error;
pub mod models;
pub mod policy;
pub mod ports;
