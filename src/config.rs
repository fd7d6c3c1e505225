use anyhow::Context;

/// The current environment the application is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// The server is running on localhost
    Local,
}

impl Environment {
    /// Construct an [Environment] from the `ENVIRONMENT` env var, falling
    /// back to production if unset or unrecognized.
    pub fn new_or_prod() -> Self {
        match std::env::var("ENVIRONMENT").as_deref() {
            Ok("local") => Environment::Local,
            Ok("develop" | "dev") => Environment::Develop,
            _ => Environment::Production,
        }
    }
}

/// Configuration parameters for the application.
#[derive(Debug)]
pub struct Config {
    /// The connection URL for the Postgres database
    pub database_url: String,
    /// The port to listen for HTTP requests on.
    pub port: usize,
    /// The environment we are in
    pub environment: Environment,
    /// Secret used to validate bearer tokens
    pub jwt_secret: String,
    /// Verified sender address for appointment notification emails
    pub notify_from_email: String,
    /// Directory property images are written to
    pub images_dir: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a number")?;
        let environment = Environment::new_or_prod();
        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be provided")?;
        let notify_from_email =
            std::env::var("NOTIFY_FROM_EMAIL").context("NOTIFY_FROM_EMAIL must be provided")?;
        let images_dir = std::env::var("IMAGES_DIR").unwrap_or("./images".to_string());

        Ok(Config {
            database_url,
            port,
            environment,
            jwt_secret,
            notify_from_email,
            images_dir,
        })
    }
}
