use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// Delete an account. Admin only.
#[tracing::instrument(skip(context, principal))]
pub async fn delete_user(
    State(context): State<ApiContext>,
    Path(id): Path<String>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<StatusCode, ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::ManageUsers)?;

    if !context.store.delete_user(&id).await? {
        return Err(ApiError::NotFound("User not found."));
    }

    tracing::info!(user_id = %id, "user deleted");

    Ok(StatusCode::NO_CONTENT)
}
