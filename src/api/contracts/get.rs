use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::ContractRecord;

/// List every contract with its parties and property.
#[tracing::instrument(skip(context))]
pub async fn list_contracts(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<ContractRecord>>, ApiError> {
    let contracts = context.store.list_contracts().await?;
    Ok(Json(contracts))
}

#[tracing::instrument(skip(context))]
pub async fn get_contract(
    State(context): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<ContractRecord>, ApiError> {
    let contract = context
        .store
        .get_contract(id)
        .await?
        .ok_or(ApiError::NotFound("Contract not found."))?;

    Ok(Json(contract))
}
