use crate::api::principal::AuthKeys;
use crate::domain::ports::{BlobStore, Notifier, RecordStore};
use axum::extract::FromRef;
use std::sync::Arc;

/// Shared application state handed to every handler.
#[derive(Clone, FromRef)]
pub struct ApiContext {
    /// The record store backing all entity CRUD
    pub store: Arc<dyn RecordStore>,
    /// Appointment change notifications
    pub notifier: Arc<dyn Notifier>,
    /// Property image storage
    pub blobs: Arc<dyn BlobStore>,
    /// Bearer token validation material
    pub auth: AuthKeys,
}
