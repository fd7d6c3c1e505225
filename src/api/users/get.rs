use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::UserRecord;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// List every account with its back-references. Admin only.
#[tracing::instrument(skip(context, principal))]
pub async fn list_users(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<Json<Vec<UserRecord>>, ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::ListUsers)?;

    let users = context.store.list_users().await?;
    Ok(Json(users))
}

/// Fetch one account. Allowed to the account itself and to admins.
#[tracing::instrument(skip(context, principal))]
pub async fn get_user(
    State(context): State<ApiContext>,
    Path(id): Path<String>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<Json<UserRecord>, ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::ViewUser { user_id: &id })?;

    let user = context
        .store
        .get_user(&id)
        .await?
        .ok_or(ApiError::NotFound("User not found."))?;

    Ok(Json(user))
}
