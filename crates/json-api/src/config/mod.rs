//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;
use tailor_app::context::AppSettings;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    records::RecordsConfig,
    server::ListenConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod records;
pub(crate) mod server;

/// Tailor JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "tailor-json", about = "Tailor Shop JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ListenConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Admin and session settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Customer record settings.
    #[command(flatten)]
    pub records: RecordsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }

    /// Settings handed to the application services.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            database_url: self.database.database_url.clone(),
            admin_secret: self.auth.admin_secret(),
            revocation_policy: self.auth.revocation_policy,
            partitioning: self.records.partitioning,
            measurement_schema: self.records.measurement_schema(),
            seed_demo_license: self.auth.seed_demo_license,
        }
    }
}
