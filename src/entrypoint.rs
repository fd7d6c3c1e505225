//! Standardized initialization for the service binary.
//! This keeps tracing configuration consistent between environments.

use crate::config::Environment;
use tracing_subscriber::EnvFilter;

/// Unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct ServiceEntrypoint {
    env: Environment,
}

/// Sentinel struct which guarantees that we called [ServiceEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl Default for ServiceEntrypoint {
    fn default() -> Self {
        ServiceEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

impl ServiceEntrypoint {
    /// Create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// Consume self, initialize this binary, and return a proof that it was
    /// initialized.
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Develop | Environment::Production => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .compact()
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}
