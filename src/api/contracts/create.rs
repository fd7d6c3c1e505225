use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::{Contract, NewContract};
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// The creation payload. Any `ownerId` in the body is ignored; the contract
/// always belongs to the authenticated caller.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractRequest {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub amount: Option<BigDecimal>,
    pub property_id: Option<i64>,
    pub customer_id: Option<String>,
}

impl CreateContractRequest {
    fn into_new_contract(self, owner_id: String) -> Result<NewContract, String> {
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

        Ok(NewContract {
            start_date,
            end_date,
            amount,
            property_id,
            customer_id,
            owner_id,
        })
    }
}

#[tracing::instrument(skip(context, principal, request))]
pub async fn create_contract(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Option<Principal>>,
    Json(request): Json<CreateContractRequest>,
) -> Result<(StatusCode, Json<Contract>), ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::CreateContract)?;

    let new = request
        .into_new_contract(principal.id.clone())
        .map_err(ApiError::Validation)?;

    let contract = context.store.create_contract(new).await?;

    tracing::info!(
        contract_id = contract.id,
        property_id = contract.property_id,
        "contract created"
    );

    Ok((StatusCode::CREATED, Json(contract)))
}
