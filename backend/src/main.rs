//! Server entry-point: loads settings, prepares storage and serves the API.

mod server;

use std::env;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use room_allocation::inbound::http::health::HealthState;
use room_allocation::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{ServerConfig, ServerSettings, create_server};

async fn server_config(settings: &ServerSettings) -> Result<ServerConfig> {
    let config = ServerConfig::new(settings.host(), settings.port())
        .with_storage_timeout(settings.storage_timeout());
    let Some(database_url) = settings.database_url() else {
        warn!("DATABASE_URL not set; records will not survive a restart");
        return Ok(config);
    };

    run_migrations(&database_url)
        .await
        .wrap_err("failed to migrate database")?;
    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .wrap_err("failed to build database pool")?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let config = server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start HTTP server")?;
    info!(host = settings.host(), port = settings.port(), "listening");
    server.await.wrap_err("HTTP server terminated")
}
