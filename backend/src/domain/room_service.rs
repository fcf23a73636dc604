//! Room record services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    CreateRoomRequest, RoomImportOutcome, RoomRepository, RoomRepositoryError, RoomsCommand,
    RoomsQuery,
};
use crate::domain::{Error, Room, RoomNumber, parse_rooms_csv};

/// Map storage failures onto domain errors.
pub(crate) fn map_room_repository_error(error: RoomRepositoryError) -> Error {
    match error {
        RoomRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("room repository unavailable: {message}"))
        }
        RoomRepositoryError::Query { message } => {
            Error::internal(format!("room repository error: {message}"))
        }
        RoomRepositoryError::DuplicateRoomNumber { room_no } => duplicate_room(&room_no),
    }
}

fn duplicate_room(room_no: &str) -> Error {
    Error::conflict(format!("room {room_no} already exists"))
}

/// Room service implementing [`RoomsQuery`] and [`RoomsCommand`].
#[derive(Clone)]
pub struct RoomService<R> {
    room_repo: Arc<R>,
}

impl<R> RoomService<R> {
    /// Create a service over `room_repo`.
    pub fn new(room_repo: Arc<R>) -> Self {
        Self { room_repo }
    }
}

impl<R> RoomService<R>
where
    R: RoomRepository,
{
    async fn ensure_unused(&self, room_no: &RoomNumber) -> Result<(), Error> {
        let existing = self
            .room_repo
            .find_by_room_number(room_no)
            .await
            .map_err(map_room_repository_error)?;
        match existing {
            Some(_) => Err(duplicate_room(room_no.as_str())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<R> RoomsQuery for RoomService<R>
where
    R: RoomRepository,
{
    async fn list_rooms(&self) -> Result<Vec<Room>, Error> {
        self.room_repo
            .list_rooms()
            .await
            .map_err(map_room_repository_error)
    }
}

#[async_trait]
impl<R> RoomsCommand for RoomService<R>
where
    R: RoomRepository,
{
    async fn create_room(&self, request: CreateRoomRequest) -> Result<Room, Error> {
        self.ensure_unused(&request.room_no).await?;
        let room = Room::vacant(request.room_no, request.room_type);
        self.room_repo
            .insert_rooms(std::slice::from_ref(&room))
            .await
            .map_err(map_room_repository_error)?;
        info!(room_id = %room.id, room_no = %room.room_no, "room created");
        Ok(room)
    }

    async fn import_rooms_csv(&self, csv_text: String) -> Result<RoomImportOutcome, Error> {
        let rooms = parse_rooms_csv(&csv_text)?;
        for room in &rooms {
            self.ensure_unused(&room.room_no).await?;
        }
        self.room_repo
            .insert_rooms(&rooms)
            .await
            .map_err(map_room_repository_error)?;

        let outcome = RoomImportOutcome {
            created: rooms.len(),
        };
        info!(created = outcome.created, "rooms imported from CSV");
        Ok(outcome)
    }
}
