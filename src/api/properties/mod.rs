use crate::api::context::ApiContext;
use axum::{
    Router,
    routing::{get, post, put},
};

pub mod create;
pub mod delete;
pub mod get;
pub mod images;
pub mod search;
pub mod update;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(get::list_properties).post(create::create_property))
        .route("/search", get(search::search_properties))
        .route(
            "/:id",
            get(get::get_property)
                .put(update::update_property)
                .delete(delete::delete_property),
        )
        .route("/:id/upload-image", post(images::upload_image))
        .route("/:id/update-image/:image_id", put(images::update_image))
}
