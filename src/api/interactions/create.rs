use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::{Interaction, NewInteraction};
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// The creation payload. The customer and timestamp are stamped server-side.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInteractionRequest {
    pub property_id: Option<i64>,
    pub interaction_type: Option<String>,
    pub interaction_value: Option<f64>,
}

#[tracing::instrument(skip(context, principal, request))]
pub async fn create_interaction(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Option<Principal>>,
    Json(request): Json<CreateInteractionRequest>,
) -> Result<(StatusCode, Json<Interaction>), ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::CreateInteraction)?;

    let (property_id, interaction_type, interaction_value) = validate(request)?;

    context
        .store
        .find_property(property_id)
        .await?
        .ok_or(ApiError::NotFound("Property not found."))?;

    let interaction = context
        .store
        .create_interaction(NewInteraction {
            customer_id: principal.id.clone(),
            property_id,
            interaction_date: Utc::now(),
            interaction_type,
            interaction_value,
        })
        .await?;

    tracing::info!(
        interaction_id = interaction.id,
        property_id,
        "interaction recorded"
    );

    Ok((StatusCode::CREATED, Json(interaction)))
}

fn validate(request: CreateInteractionRequest) -> Result<(i64, String, f64), ApiError> {
    let invalid = || ApiError::Validation("Invalid interaction data.".to_string());

    let property_id = request.property_id.filter(|id| *id > 0).ok_or_else(invalid)?;
    let interaction_type = request
        .interaction_type
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(invalid)?;
    let interaction_value = request
        .interaction_value
        .filter(|v| *v >= 0.0)
        .ok_or_else(invalid)?;

    Ok((property_id, interaction_type, interaction_value))
}
