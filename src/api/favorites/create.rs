use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::error::StoreError;
use crate::domain::models::Favorite;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// The body is the bare property id.
#[tracing::instrument(skip(context, principal))]
pub async fn create_favorite(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Option<Principal>>,
    Json(property_id): Json<i64>,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::AccessFavorites)?;

    if property_id <= 0 {
        return Err(ApiError::Validation("Invalid property ID.".to_string()));
    }

    context
        .store
        .find_property(property_id)
        .await?
        .ok_or(ApiError::NotFound("Property not found."))?;

    let favorite = context
        .store
        .create_favorite(&principal.id, property_id)
        .await
        .map_err(|err| match err {
            StoreError::Conflict => {
                ApiError::Conflict("Property already in favorites.".to_string())
            }
            other => other.into(),
        })?;

    tracing::info!(property_id, "favorite added");

    Ok((StatusCode::CREATED, Json(favorite)))
}
