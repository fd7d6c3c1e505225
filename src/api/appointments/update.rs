use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::notify_client;
use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::policy::{Action, Denial, Principal, authorize, require_principal};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub appointment_date: Option<DateTime<Utc>>,
}

#[tracing::instrument(skip(context, principal, request))]
pub async fn update_appointment(
    State(context): State<ApiContext>,
    Path(id): Path<i64>,
    Extension(principal): Extension<Option<Principal>>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<StatusCode, ApiError> {
    let principal = require_principal(principal.as_ref())?;

    let existing = context
        .store
        .find_appointment(id)
        .await?
        .ok_or(ApiError::NotFound("Appointment not found."))?;

    authorize(
        Some(principal),
        Action::MutateAppointment {
            client_id: &existing.client_id,
            appointment_date: existing.appointment_date,
            now: Utc::now(),
        },
    )
    .map_err(|denial| match denial {
        Denial::PastAppointment => {
            ApiError::Validation("Cannot update past appointments.".to_string())
        }
        other => other.into(),
    })?;

    let appointment_date = request
        .appointment_date
        .ok_or_else(|| ApiError::Validation("The appointmentDate field is required.".to_string()))?;

    let updated = context
        .store
        .update_appointment(id, appointment_date)
        .await?
        .ok_or(ApiError::NotFound("Appointment not found."))?;

    tracing::info!(appointment_id = id, "appointment updated");

    if let Some(property) = context.store.find_property(updated.property_id).await? {
        notify_client(
            &context,
            principal,
            "Appointment Update",
            format!(
                "Your appointment for property {} has been updated to {}.",
                property.title, updated.appointment_date
            ),
        )
        .await;
    }

    Ok(StatusCode::NO_CONTENT)
}
