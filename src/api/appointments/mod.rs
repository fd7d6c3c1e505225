use crate::api::context::ApiContext;
use crate::domain::policy::Principal;
use axum::{
    Router,
    routing::{get, put},
};

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/",
            get(list::list_appointments).post(create::create_appointment),
        )
        .route(
            "/:id",
            put(update::update_appointment).delete(delete::delete_appointment),
        )
}

/// Best-effort delivery to the appointment's client. A failed send is logged
/// and never alters the response.
async fn notify_client(context: &ApiContext, principal: &Principal, subject: &str, body: String) {
    if !context.notifier.notify(&principal.email, subject, &body).await {
        tracing::warn!(
            email = %principal.email,
            subject,
            "failed to send appointment notification"
        );
    }
}
