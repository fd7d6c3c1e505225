use crate::api::context::ApiContext;
use axum::{Router, routing::get};

pub mod create;
pub mod delete;
pub mod get;
pub mod update;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(get::list_contracts).post(create::create_contract))
        .route(
            "/:id",
            get(get::get_contract)
                .put(update::update_contract)
                .delete(delete::delete_contract),
        )
}
