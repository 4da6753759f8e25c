//! Kudos backend entry-point: loads settings, wires persistence and serves
//! the pages.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use kudos::inbound::http::health::HealthState;
use kudos::inbound::http::session_config::{BuildMode, session_settings_from_env};
use kudos::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let session = session_settings_from_env(
        &mockable::DefaultEnv::new(),
        BuildMode::from_debug_assertions(),
    )
    .map_err(|e| std::io::Error::other(e.to_string()))?;

    let mut config = ServerConfig::new(session, settings.bind_addr()?);
    if let Some(database_url) = settings.database_url.as_deref() {
        if settings.run_migrations() {
            run_pending_migrations(database_url)
                .await
                .map_err(|e| std::io::Error::other(e.to_string()))?;
        }
        let pool = DbPool::connect(
            PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
        )
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!("kudos backend started");
    server.await
}
