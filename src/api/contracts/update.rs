use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::ContractUpdate;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// The update payload. The body `id` must match the path; the owner is not
/// writable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContractRequest {
    #[serde(default)]
    pub id: i64,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub amount: Option<BigDecimal>,
    pub property_id: Option<i64>,
    pub customer_id: Option<String>,
}

impl UpdateContractRequest {
    fn into_update(self) -> Result<(i64, ContractUpdate), String> {
        let start_date = self.start_date.ok_or("The startDate field is required.")?;
        let end_date = self.end_date.ok_or("The endDate field is required.")?;
        if end_date < start_date {
            return Err("The end date cannot precede the start date.".to_string());
        }

        let amount = self.amount.ok_or("The amount field is required.")?;
        if amount < BigDecimal::from(0) {
            return Err("The amount must be a non-negative value.".to_string());
        }

        let property_id = self.property_id.ok_or("The propertyId field is required.")?;
        let customer_id = self
            .customer_id
            .filter(|c| !c.trim().is_empty())
            .ok_or("The customerId field is required.")?;

        Ok((
            self.id,
            ContractUpdate {
                start_date,
                end_date,
                amount,
                property_id,
                customer_id,
            },
        ))
    }
}

#[tracing::instrument(skip(context, principal, request))]
pub async fn update_contract(
    State(context): State<ApiContext>,
    Path(id): Path<i64>,
    Extension(principal): Extension<Option<Principal>>,
    Json(request): Json<UpdateContractRequest>,
) -> Result<StatusCode, ApiError> {
    let principal = require_principal(principal.as_ref())?;

    let (body_id, update) = request.into_update().map_err(ApiError::Validation)?;
    if body_id != id {
        return Err(ApiError::Validation("Incompatible ID.".to_string()));
    }

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

    context
        .store
        .update_contract(id, update)
        .await?
        .ok_or(ApiError::NotFound("Contract not found."))?;

    tracing::info!(contract_id = id, "contract updated");

    Ok(StatusCode::NO_CONTENT)
}
