//! Adapters for the domain ports: Postgres and in-memory record stores, the
//! SES notifier, and blob storage.

pub mod blob;
pub mod memory;
pub mod postgres;
pub mod ses;
