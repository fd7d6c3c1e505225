use axum::{
    Extension, Json,
    extract::{Multipart, Path, State},
};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::PropertyImage;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// Pulls the first non-empty file out of a multipart body.
async fn read_image(mut multipart: Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::Validation("Invalid image file.".to_string()))?
    {
        let bytes = field
            .bytes()
            .await
            .map_err(|_| ApiError::Validation("Invalid image file.".to_string()))?;
        if !bytes.is_empty() {
            return Ok(bytes.to_vec());
        }
    }

    Err(ApiError::Validation("Invalid image file.".to_string()))
}

#[tracing::instrument(skip(context, principal, multipart))]
pub async fn upload_image(
    State(context): State<ApiContext>,
    Path(id): Path<i64>,
    Extension(principal): Extension<Option<Principal>>,
    multipart: Multipart,
) -> Result<Json<PropertyImage>, ApiError> {
    let principal = require_principal(principal.as_ref())?;

    let property = context
        .store
        .find_property(id)
        .await?
        .ok_or(ApiError::NotFound("Property not found."))?;

    authorize(
        Some(principal),
        Action::MutateProperty {
            owner_id: &property.owner_id,
        },
    )?;

    let bytes = read_image(multipart).await?;
    let image_url = context.blobs.store(bytes).await?;
    let image = context.store.add_property_image(id, image_url).await?;

    tracing::info!(property_id = id, image_id = image.id, "image uploaded");

    Ok(Json(image))
}

#[tracing::instrument(skip(context, principal, multipart))]
pub async fn update_image(
    State(context): State<ApiContext>,
    Path((id, image_id)): Path<(i64, i64)>,
    Extension(principal): Extension<Option<Principal>>,
    multipart: Multipart,
) -> Result<Json<PropertyImage>, ApiError> {
    let principal = require_principal(principal.as_ref())?;

    let property = context
        .store
        .find_property(id)
        .await?
        .ok_or(ApiError::NotFound("Property not found."))?;

    authorize(
        Some(principal),
        Action::MutateProperty {
            owner_id: &property.owner_id,
        },
    )?;

    let bytes = read_image(multipart).await?;
    let image_url = context.blobs.store(bytes).await?;
    let image = context
        .store
        .update_property_image(id, image_id, image_url)
        .await?
        .ok_or(ApiError::NotFound("Image not found."))?;

    tracing::info!(property_id = id, image_id = image.id, "image replaced");

    Ok(Json(image))
}
