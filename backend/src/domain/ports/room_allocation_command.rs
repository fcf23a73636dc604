//! Driving port for running the room allocation pass.

use async_trait::async_trait;

use crate::domain::{AllocationOutcome, Error};

/// Use-case port for assigning employees to rooms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomAllocationCommand: Send + Sync {
    /// Read both snapshots, pair them, persist the new occupancy and report
    /// what changed.
    async fn assign_employees(&self) -> Result<AllocationOutcome, Error>;
}
