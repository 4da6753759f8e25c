//! Process settings loaded through OrthoConfig.
//!
//! Every field can be set on the command line, in a config file or through
//! `KUDOS_*` environment variables.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_RUN_MIGRATIONS: bool = true;

/// Listener and database settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "KUDOS")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Fixture data is served when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply pending migrations before serving.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Parsed listen address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Configured pool size, falling back to ten.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Whether to migrate on startup, falling back to `true`.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(DEFAULT_RUN_MIGRATIONS)
    }
}
