use crate::api::context::ApiContext;
use axum::{Router, routing::get};

pub mod create;
pub mod delete;
pub mod get;
pub mod update;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/",
            get(get::list_interactions).post(create::create_interaction),
        )
        // The single-segment route doubles as a property lookup on GET and an
        // interaction id on PUT/DELETE, mirroring the public contract.
        .route(
            "/:id",
            get(get::get_property_interactions)
                .put(update::update_interaction)
                .delete(delete::delete_interaction),
        )
}
