use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// Deletes a property along with its location and images.
#[tracing::instrument(skip(context, principal))]
pub async fn delete_property(
    State(context): State<ApiContext>,
    Path(id): Path<i64>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<StatusCode, ApiError> {
    let principal = require_principal(principal.as_ref())?;

    let existing = context
        .store
        .find_property(id)
        .await?
        .ok_or(ApiError::NotFound("Property not found."))?;

    authorize(
        Some(principal),
        Action::MutateProperty {
            owner_id: &existing.owner_id,
        },
    )?;

    if !context.store.delete_property(id).await? {
        return Err(ApiError::NotFound("Property not found."));
    }

    tracing::info!(property_id = id, "property deleted");

    Ok(StatusCode::NO_CONTENT)
}
