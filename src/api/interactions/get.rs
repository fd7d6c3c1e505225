use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::InteractionRecord;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// List every recorded interaction with its customer.
#[tracing::instrument(skip(context, principal))]
pub async fn list_interactions(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<Json<Vec<InteractionRecord>>, ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::ListInteractions)?;

    let interactions = context.store.list_interactions().await?;
    Ok(Json(interactions))
}

/// List the interactions recorded against one property.
#[tracing::instrument(skip(context, principal))]
pub async fn get_property_interactions(
    State(context): State<ApiContext>,
    Path(property_id): Path<i64>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<Json<Vec<InteractionRecord>>, ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::ListInteractions)?;

    let interactions = context
        .store
        .list_property_interactions(property_id)
        .await?;

    if interactions.is_empty() {
        return Err(ApiError::NotFound(
            "No interactions found for this property.",
        ));
    }

    Ok(Json(interactions))
}
