//! Driving port for reading room records.

use async_trait::async_trait;

use crate::domain::{Error, Room};

/// Use-case port for room reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomsQuery: Send + Sync {
    /// Every stored room.
    async fn list_rooms(&self) -> Result<Vec<Room>, Error>;
}
