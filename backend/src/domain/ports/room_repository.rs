//! Storage port for room records.
//!
//! The allocation pass only needs `list_rooms` and `update_room_occupants`;
//! the remaining operations back the room record service.

use async_trait::async_trait;

use crate::domain::{EmployeeId, Room, RoomId, RoomNumber};

use super::define_port_error;

define_port_error! {
    /// Errors raised by room repository adapters.
    pub enum RoomRepositoryError {
        /// Store could not be reached.
        Connection { message: String } => "room repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "room repository query failed: {message}",
        /// A room with the same number is already stored.
        DuplicateRoomNumber { room_no: String } => "room number {room_no} already exists",
    }
}

/// Port for room storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Full unfiltered snapshot of every room, in storage order.
    async fn list_rooms(&self) -> Result<Vec<Room>, RoomRepositoryError>;

    /// Look a room up by its unique number.
    async fn find_by_room_number(
        &self,
        room_no: &RoomNumber,
    ) -> Result<Option<Room>, RoomRepositoryError>;

    /// Insert rooms as one batch; either all rows land or none do.
    async fn insert_rooms(&self, rooms: &[Room]) -> Result<(), RoomRepositoryError>;

    /// Overwrite the occupant list of a single room.
    ///
    /// Unknown identifiers are not an error; the write simply matches
    /// nothing, as a partial update against a document store would.
    async fn update_room_occupants(
        &self,
        room_id: &RoomId,
        occupant_ids: &[EmployeeId],
    ) -> Result<(), RoomRepositoryError>;
}
