use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::{Role, User};
use crate::domain::policy::{Action, Principal, authorize, require_principal};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub user_type: Option<Role>,
}

impl CreateUserRequest {
    fn into_user(self) -> Result<User, String> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or("The name field is required.")?;
        let email = self
            .email
            .filter(|e| e.contains('@'))
            .ok_or("A valid email is required.")?;
        let user_type = self.user_type.ok_or("The userType field is required.")?;

        Ok(User {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            user_type,
        })
    }
}

/// Create an account. Admin only; the id is issued server-side.
#[tracing::instrument(skip(context, principal, request))]
pub async fn create_user(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Option<Principal>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::ManageUsers)?;

    let user = request.into_user().map_err(ApiError::Validation)?;
    let user = context.store.create_user(user).await?;

    tracing::info!(user_id = %user.id, user_type = %user.user_type, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}
