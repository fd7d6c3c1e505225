use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::InteractionUpdate;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// The update payload. The interaction date is reset to the update time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInteractionRequest {
    pub interaction_type: Option<String>,
    pub interaction_value: Option<f64>,
}

#[tracing::instrument(skip(context, principal, request))]
pub async fn update_interaction(
    State(context): State<ApiContext>,
    Path(id): Path<i64>,
    Extension(principal): Extension<Option<Principal>>,
    Json(request): Json<UpdateInteractionRequest>,
) -> Result<StatusCode, ApiError> {
    let principal = require_principal(principal.as_ref())?;

    let invalid = || ApiError::Validation("Invalid interaction data.".to_string());
    let interaction_type = request
        .interaction_type
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(invalid)?;
    let interaction_value = request
        .interaction_value
        .filter(|v| *v >= 0.0)
        .ok_or_else(invalid)?;

    let existing = context
        .store
        .find_interaction(id)
        .await?
        .ok_or(ApiError::NotFound("Interaction not found."))?;

    authorize(
        Some(principal),
        Action::UpdateInteraction {
            customer_id: &existing.customer_id,
        },
    )?;

    context
        .store
        .update_interaction(
            id,
            InteractionUpdate {
                interaction_type,
                interaction_value,
                interaction_date: Utc::now(),
            },
        )
        .await?
        .ok_or(ApiError::NotFound("Interaction no longer exists."))?;

    tracing::info!(interaction_id = id, "interaction updated");

    Ok(StatusCode::NO_CONTENT)
}
