use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::{NewLocation, NewProperty, PropertyRecord};
use crate::domain::policy::{Action, Principal, authorize, require_principal};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    pub address: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// The creation payload. Any `ownerId` in the body is ignored; ownership
/// always follows the authenticated caller.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
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
    pub location: Option<LocationRequest>,
}

impl CreatePropertyRequest {
    fn into_new_property(self, owner_id: String) -> Result<NewProperty, String> {
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

        let location = self.location.ok_or("The location field is required.")?;
        let latitude = location.latitude.ok_or("The latitude field is required.")?;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90.".to_string());
        }
        let longitude = location
            .longitude
            .ok_or("The longitude field is required.")?;
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180.".to_string());
        }

        Ok(NewProperty {
            title,
            description,
            price,
            address: self.address,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            owner_id,
            location: NewLocation {
                address: location.address.unwrap_or_default(),
                city: location.city.unwrap_or_default(),
                latitude,
                longitude,
            },
        })
    }
}

#[tracing::instrument(skip(context, principal, request))]
pub async fn create_property(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Option<Principal>>,
    Json(request): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<PropertyRecord>), ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::CreateProperty)?;

    let new = request
        .into_new_property(principal.id.clone())
        .map_err(ApiError::Validation)?;

    let property = context.store.create_property(new).await?;

    tracing::info!(
        property_id = property.property.id,
        owner_id = %property.property.owner_id,
        "property created"
    );

    Ok((StatusCode::CREATED, Json(property)))
}
