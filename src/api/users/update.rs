use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::{Role, UserUpdate};
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// The update payload. The body `id` must match the path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub user_type: Option<Role>,
}

impl UpdateUserRequest {
    fn into_update(self) -> Result<(String, UserUpdate), String> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or("The name field is required.")?;
        let email = self
            .email
            .filter(|e| e.contains('@'))
            .ok_or("A valid email is required.")?;
        let user_type = self.user_type.ok_or("The userType field is required.")?;

        Ok((
            self.id,
            UserUpdate {
                name,
                email,
                user_type,
            },
        ))
    }
}

/// Update an account. Admin only.
#[tracing::instrument(skip(context, principal, request))]
pub async fn update_user(
    State(context): State<ApiContext>,
    Path(id): Path<String>,
    Extension(principal): Extension<Option<Principal>>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<StatusCode, ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::ManageUsers)?;

    let (body_id, update) = request.into_update().map_err(ApiError::Validation)?;
    if body_id != id {
        return Err(ApiError::Validation("Incompatible ID.".to_string()));
    }

    context
        .store
        .get_user(&id)
        .await?
        .ok_or(ApiError::NotFound("User not found."))?;

    context
        .store
        .update_user(&id, update)
        .await?
        .ok_or(ApiError::NotFound("User no longer exists."))?;

    tracing::info!(user_id = %id, "user updated");

    Ok(StatusCode::NO_CONTENT)
}
