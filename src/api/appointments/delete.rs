use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;

use super::notify_client;
use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::policy::{Action, Denial, Principal, authorize, require_principal};

#[tracing::instrument(skip(context, principal))]
pub async fn delete_appointment(
    State(context): State<ApiContext>,
    Path(id): Path<i64>,
    Extension(principal): Extension<Option<Principal>>,
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
            ApiError::Validation("Cannot delete past appointments.".to_string())
        }
        other => other.into(),
    })?;

    if !context.store.delete_appointment(id).await? {
        return Err(ApiError::NotFound("Appointment not found."));
    }

    tracing::info!(appointment_id = id, "appointment deleted");

    if let Some(property) = context.store.find_property(existing.property_id).await? {
        notify_client(
            &context,
            principal,
            "Appointment Cancellation",
            format!(
                "Your appointment for property {} scheduled for {} has been cancelled.",
                property.title, existing.appointment_date
            ),
        )
        .await;
    }

    Ok(StatusCode::NO_CONTENT)
}
