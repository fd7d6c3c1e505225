use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;
use crate::domain::models::PropertyRecord;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: String,
}

/// Case-sensitive substring search across title, description and city.
#[tracing::instrument(skip(context))]
pub async fn search_properties(
    State(context): State<ApiContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<PropertyRecord>>, ApiError> {
    let properties = context.store.search_properties(&query.term).await?;

    if properties.is_empty() {
        return Err(ApiError::NotFound(
            "No properties found matching the search term.",
        ));
    }

    Ok(Json(properties))
}
