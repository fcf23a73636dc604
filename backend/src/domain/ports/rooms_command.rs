//! Driving port for creating rooms, singly or from CSV.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Room, RoomNumber, RoomType};

/// Validated input for creating a single room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoomRequest {
    pub room_no: RoomNumber,
    pub room_type: RoomType,
}

/// Result of a CSV import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomImportOutcome {
    /// Number of rooms inserted.
    pub created: usize,
}

impl RoomImportOutcome {
    /// Summary sentence reported to clients.
    ///
    /// # Examples
    /// ```
    /// use room_allocation::domain::ports::RoomImportOutcome;
    ///
    /// let outcome = RoomImportOutcome { created: 3 };
    /// assert_eq!(outcome.message(), "Successfully created 3 rooms");
    /// ```
    pub fn message(&self) -> String {
        format!("Successfully created {} rooms", self.created)
    }
}

/// Use-case port for room writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomsCommand: Send + Sync {
    /// Create one vacant room; duplicate numbers are a conflict.
    async fn create_room(&self, request: CreateRoomRequest) -> Result<Room, Error>;

    /// Parse CSV text (`roomNo,roomType,<ignored>` per record, no header)
    /// and insert every room, or none.
    async fn import_rooms_csv(&self, csv_text: String) -> Result<RoomImportOutcome, Error>;
}
