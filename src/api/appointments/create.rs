use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::notify_client;
use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::{Appointment, NewAppointment};
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// The creation payload. The client is always the authenticated caller.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub appointment_date: Option<DateTime<Utc>>,
    pub property_id: Option<i64>,
}

#[tracing::instrument(skip(context, principal, request))]
pub async fn create_appointment(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Option<Principal>>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::CreateAppointment)?;

    let appointment_date = request
        .appointment_date
        .ok_or_else(|| ApiError::Validation("The appointmentDate field is required.".to_string()))?;
    let property_id = request
        .property_id
        .ok_or_else(|| ApiError::Validation("The propertyId field is required.".to_string()))?;

    // The target is verified before the insert so a bad id never leaves a row
    // behind.
    let property = context
        .store
        .find_property(property_id)
        .await?
        .ok_or(ApiError::NotFound("Property not found."))?;

    let appointment = context
        .store
        .create_appointment(NewAppointment {
            appointment_date,
            client_id: principal.id.clone(),
            property_id,
        })
        .await?;

    tracing::info!(
        appointment_id = appointment.id,
        property_id,
        "appointment created"
    );

    notify_client(
        &context,
        principal,
        "Appointment Confirmation",
        format!(
            "Your visit to property {} is scheduled for {}.",
            property.title, appointment.appointment_date
        ),
    )
    .await;

    Ok((StatusCode::CREATED, Json(appointment)))
}
