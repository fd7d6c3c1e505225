use axum::{Json, extract::State};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::AppointmentRecord;

/// List every appointment with its client and property.
#[tracing::instrument(skip(context))]
pub async fn list_appointments(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<AppointmentRecord>>, ApiError> {
    let appointments = context.store.list_appointments().await?;
    Ok(Json(appointments))
}
