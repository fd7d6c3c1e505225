use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

#[tracing::instrument(skip(context, principal))]
pub async fn delete_contract(
    State(context): State<ApiContext>,
    Path(id): Path<i64>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<StatusCode, ApiError> {
    let principal = require_principal(principal.as_ref())?;

    let existing = context
        .store
        .find_contract(id)
        .await?
        .ok_or(ApiError::NotFound("Contract not found."))?;

    authorize(
        Some(principal),
        Action::MutateContract {
            owner_id: &existing.owner_id,
        },
    )?;

    if !context.store.delete_contract(id).await? {
        return Err(ApiError::NotFound("Contract not found."));
    }

    tracing::info!(contract_id = id, "contract deleted");

    Ok(StatusCode::NO_CONTENT)
}
