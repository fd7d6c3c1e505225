use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::PropertyUpdate;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// The update payload. The body `id` must match the path; the owner and
/// location are not writable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyRequest {
    #[serde(default)]
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub bedrooms: i32,
    #[serde(default)]
    pub bathrooms: i32,
    #[serde(default)]
    pub area: f64,
}

impl UpdatePropertyRequest {
    fn into_update(self) -> Result<(i64, PropertyUpdate), String> {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or("The title field is required.")?;
        if title.chars().count() > 100 {
            return Err("The title cannot exceed 100 characters.".to_string());
        }

        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .ok_or("The description field is required.")?;
        if description.chars().count() > 500 {
            return Err("The description cannot exceed 500 characters.".to_string());
        }

        let price = self.price.ok_or("The price field is required.")?;
        if price < BigDecimal::from(0) {
            return Err("The price must be a non-negative value.".to_string());
        }

        Ok((
            self.id,
            PropertyUpdate {
                title,
                description,
                price,
                address: self.address,
                bedrooms: self.bedrooms,
                bathrooms: self.bathrooms,
                area: self.area,
            },
        ))
    }
}

#[tracing::instrument(skip(context, principal, request))]
pub async fn update_property(
    State(context): State<ApiContext>,
    Path(id): Path<i64>,
    Extension(principal): Extension<Option<Principal>>,
    Json(request): Json<UpdatePropertyRequest>,
) -> Result<StatusCode, ApiError> {
    let principal = require_principal(principal.as_ref())?;

    let (body_id, update) = request.into_update().map_err(ApiError::Validation)?;
    if body_id != id {
        return Err(ApiError::Validation("ID mismatch.".to_string()));
    }

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

    context
        .store
        .update_property(id, update)
        .await?
        .ok_or(ApiError::NotFound("Property no longer exists."))?;

    tracing::info!(property_id = id, "property updated");

    Ok(StatusCode::NO_CONTENT)
}
