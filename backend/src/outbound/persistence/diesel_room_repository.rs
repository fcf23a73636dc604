//! PostgreSQL-backed `RoomRepository`.
//!
//! `insert_rooms` issues a single multi-row `INSERT`, so a batch lands
//! atomically. `update_room_occupants` touches exactly one row and is never
//! wrapped in a wider transaction.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{RoomRepository, RoomRepositoryError};
use crate::domain::{EmployeeId, Room, RoomId, RoomNumber};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{NewRoomRow, RoomRow};
use super::pool::{DbPool, PoolError};
use super::schema::rooms;

/// Diesel implementation of [`RoomRepository`].
#[derive(Clone)]
pub struct DieselRoomRepository {
    pool: DbPool,
}

impl DieselRoomRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RoomRepositoryError {
    RoomRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> RoomRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => RoomRepositoryError::connection(message),
        DieselFailure::Query(message) => RoomRepositoryError::query(message),
        DieselFailure::UniqueViolation { key } => {
            RoomRepositoryError::duplicate_room_number(key.unwrap_or_else(|| "unknown".to_owned()))
        }
    }
}

fn row_to_room(row: RoomRow) -> Result<Room, RoomRepositoryError> {
    Room::try_from(row).map_err(|err| {
        warn!(error = %err, "rejecting invalid room row");
        RoomRepositoryError::query(err.to_string())
    })
}

#[async_trait]
impl RoomRepository for DieselRoomRepository {
    async fn list_rooms(&self) -> Result<Vec<Room>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RoomRow> = rooms::table
            .order(rooms::position.asc())
            .select(RoomRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_room).collect()
    }

    async fn find_by_room_number(
        &self,
        room_no: &RoomNumber,
    ) -> Result<Option<Room>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RoomRow> = rooms::table
            .filter(rooms::room_no.eq(room_no.as_str()))
            .select(RoomRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_room).transpose()
    }

    async fn insert_rooms(&self, new_rooms: &[Room]) -> Result<(), RoomRepositoryError> {
        if new_rooms.is_empty() {
            return Ok(());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<NewRoomRow<'_>> = new_rooms.iter().map(NewRoomRow::from).collect();

        diesel::insert_into(rooms::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update_room_occupants(
        &self,
        room_id: &RoomId,
        occupant_ids: &[EmployeeId],
    ) -> Result<(), RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let occupants: Vec<String> = occupant_ids.iter().map(EmployeeId::to_string).collect();

        diesel::update(rooms::table.filter(rooms::id.eq(room_id.as_uuid())))
            .set(rooms::occupied_by.eq(occupants))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
