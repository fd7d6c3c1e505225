use axum::{Extension, Json, extract::State};

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::FavoriteRecord;
use crate::domain::policy::{Action, Principal, authorize, require_principal};

/// List the caller's favorites. Favorites are always scoped to the principal.
#[tracing::instrument(skip(context, principal))]
pub async fn list_favorites(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Option<Principal>>,
) -> Result<Json<Vec<FavoriteRecord>>, ApiError> {
    let principal = require_principal(principal.as_ref())?;
    authorize(Some(principal), Action::AccessFavorites)?;

    let favorites = context.store.list_favorites(&principal.id).await?;
    Ok(Json(favorites))
}
