use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

#[tracing::instrument(skip(context, principal))]
pub async fn delete_favorite(
    State(context): State<ApiContext>,
    Path(property_id): Path<i64>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<StatusCode, ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::AccessFavorites)?;

    if property_id <= 0 {
        return Err(ApiError::Validation("Invalid property ID.".to_string()));
    }

    if !context
        .store
        .delete_favorite(&principal.id, property_id)
        .await?
    {
        return Err(ApiError::NotFound("Favorite not found."));
    }

    tracing::info!(property_id, "favorite removed");

    Ok(StatusCode::NO_CONTENT)
}
