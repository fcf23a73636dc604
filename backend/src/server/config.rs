//! Server settings loaded via OrthoConfig and the resolved server config.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use room_allocation::domain::DEFAULT_STORAGE_TIMEOUT;
use room_allocation::outbound::memory::InMemoryStore;
use room_allocation::outbound::persistence::DbPool;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Settings read from `ROOM_ALLOCATION_*` variables, config files and flags.
///
/// The bare `PORT` and `DATABASE_URL` variables are honoured when the
/// prefixed ones are unset.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROOM_ALLOCATION")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on each storage call made by the allocation pass.
    pub storage_timeout_secs: Option<u64>,
    /// Maximum pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port
            .or_else(|| env::var("PORT").ok()?.parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| env::var("DATABASE_URL").ok())
            .filter(|url| !url.trim().is_empty())
    }

    pub fn storage_timeout(&self) -> Duration {
        self.storage_timeout_secs
            .map_or(DEFAULT_STORAGE_TIMEOUT, Duration::from_secs)
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }
}

/// Where records live for this process.
#[derive(Clone)]
pub enum Storage {
    Postgres(DbPool),
    Memory(Arc<InMemoryStore>),
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) storage: Storage,
    pub(crate) storage_timeout: Duration,
}

impl ServerConfig {
    /// Configuration backed by an empty in-memory store.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            storage: Storage::Memory(Arc::new(InMemoryStore::new())),
            storage_timeout: DEFAULT_STORAGE_TIMEOUT,
        }
    }

    /// Attach a database connection pool for the Diesel repositories.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.storage = Storage::Postgres(pool);
        self
    }

    /// Bound each storage call made by the allocation pass.
    #[must_use]
    pub fn with_storage_timeout(mut self, storage_timeout: Duration) -> Self {
        self.storage_timeout = storage_timeout;
        self
    }
}
