use crate::api::context::ApiContext;
use axum::{
    Router,
    routing::{delete, get},
};

pub mod create;
pub mod delete;
pub mod list;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list::list_favorites).post(create::create_favorite))
        .route("/:property_id", delete(delete::delete_favorite))
}
