use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

#[tracing::instrument(skip(context, principal))]
pub async fn delete_interaction(
    State(context): State<ApiContext>,
    Path(id): Path<i64>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<StatusCode, ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::DeleteInteraction)?;

    context
        .store
        .find_interaction(id)
        .await?
        .ok_or(ApiError::NotFound("Interaction not found."))?;

    if !context.store.delete_interaction(id).await? {
        return Err(ApiError::NotFound("Interaction not found."));
    }

    tracing::info!(interaction_id = id, "interaction deleted");

    Ok(StatusCode::NO_CONTENT)
}
