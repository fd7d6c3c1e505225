use std::sync::Arc;

use anyhow::Context;
use property_service::api::{self, context::ApiContext, principal::AuthKeys};
use property_service::config::{Config, Environment};
use property_service::entrypoint::ServiceEntrypoint;
use property_service::outbound::blob::FsBlobStore;
use property_service::outbound::postgres::PgRecordStore;
use property_service::outbound::ses::SesNotifier;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ServiceEntrypoint::default().init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::info!("initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 30),
        Environment::Develop => (3, 20),
        Environment::Local => (3, 10),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to the database")?;

    tracing::info!(
        min_connections,
        max_connections,
        "initialized database connection"
    );

    sqlx::migrate!()
        .run(&db)
        .await
        .context("could not run database migrations")?;

    tracing::info!("applied database migrations");

    let ses_client = aws_sdk_sesv2::Client::new(
        &aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await,
    );
    tracing::info!("initialized ses client");

    let state = ApiContext {
        store: Arc::new(PgRecordStore::new(db)),
        notifier: Arc::new(SesNotifier::new(ses_client, &config.notify_from_email)),
        blobs: Arc::new(FsBlobStore::new(&config.images_dir)),
        auth: AuthKeys::new(&config.jwt_secret),
    };

    api::setup_and_serve(state, &config).await?;
    Ok(())
}
