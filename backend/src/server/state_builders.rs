//! Builders selecting the repository adapters behind the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use room_allocation::inbound::http::state::HttpState;
use room_allocation::outbound::persistence::{DieselEmployeeRepository, DieselRoomRepository};

use super::config::{ServerConfig, Storage};

/// Build the shared HTTP state over the configured storage.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock = Arc::new(DefaultClock);
    let state = match &config.storage {
        Storage::Postgres(pool) => {
            info!("serving records from PostgreSQL");
            HttpState::over_repositories(
                Arc::new(DieselRoomRepository::new(pool.clone())),
                Arc::new(DieselEmployeeRepository::new(pool.clone())),
                clock,
                config.storage_timeout,
            )
        }
        Storage::Memory(store) => {
            info!("no database configured; serving records from memory");
            HttpState::over_repositories(
                store.clone(),
                store.clone(),
                clock,
                config.storage_timeout,
            )
        }
    };
    web::Data::new(state)
}
