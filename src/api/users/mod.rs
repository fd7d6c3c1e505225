use crate::api::context::ApiContext;
use axum::{Router, routing::get};

pub mod create;
pub mod delete;
pub mod get;
pub mod update;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(get::list_users).post(create::create_user))
        .route(
            "/:id",
            get(get::get_user)
                .put(update::update_user)
                .delete(delete::delete_user),
        )
}
