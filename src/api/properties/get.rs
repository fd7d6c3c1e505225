use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::PropertyRecord;

/// List every property with its location, images and back-references.
#[tracing::instrument(skip(context))]
pub async fn list_properties(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<PropertyRecord>>, ApiError> {
    let properties = context.store.list_properties().await?;
    Ok(Json(properties))
}

#[tracing::instrument(skip(context))]
pub async fn get_property(
    State(context): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<PropertyRecord>, ApiError> {
    let property = context
        .store
        .get_property(id)
        .await?
        .ok_or(ApiError::NotFound("Property not found."))?;

    Ok(Json(property))
}
