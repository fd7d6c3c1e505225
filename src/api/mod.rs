use crate::api::context::ApiContext;
use crate::config::Config;
use anyhow::Context;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod appointments;
pub mod context;
pub mod contracts;
pub mod error;
pub mod favorites;
pub mod health;
pub mod interactions;
pub mod principal;
pub mod properties;
pub mod users;

pub async fn setup_and_serve(state: ApiContext, config: &Config) -> anyhow::Result<()> {
    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .merge(health::router())
        .layer(CorsLayer::permissive());

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to address {}", bind_address))?;

    tracing::info!(
        "property service is up and running with environment {:?} on port {}",
        &config.environment,
        &config.port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error running axum server")
}

/// The full API surface. Exposed so tests can serve it in-process.
pub fn api_router(app_state: ApiContext) -> Router {
    Router::new()
        .nest("/properties", properties::router())
        .nest("/appointments", appointments::router())
        .nest("/contracts", contracts::router())
        .nest("/favorites", favorites::router())
        .nest("/interactions", interactions::router())
        .nest("/users", users::router())
        .layer(axum::middleware::from_fn_with_state(
            app_state.auth.clone(),
            principal::attach_principal,
        ))
        .with_state(app_state)
}
