//! Employee-to-room allocation.
//!
//! Rooms are grouped by [`RoomType`](crate::domain::RoomType); employees are
//! grouped by their own identifier. A room-type group is paired positionally
//! with the employee group whose key equals the room type label. Since
//! generated employee identifiers and category labels almost never coincide,
//! a typical run leaves every room untouched.
//!
//! The employee grouping key is isolated in [`employee_group_key`]; swap it
//! there once employees carry a room-type preference.
//!
//! Persistence is a sequence of independent single-room writes. There is no
//! surrounding transaction: a failed write leaves earlier rooms updated and
//! later rooms untouched.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use utoipa::ToSchema;

use crate::domain::ports::{EmployeeRepository, RoomAllocationCommand, RoomRepository};
use crate::domain::{Employee, Error, Room, RoomId};

/// Default bound applied to every storage call made by the allocation pass.
pub const DEFAULT_STORAGE_TIMEOUT: Duration = Duration::from_secs(100);

/// Rooms that received an occupant and employees left without a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocationOutcome {
    /// Rooms as persisted after assignment, in write order.
    #[serde(rename = "updatedRoomData")]
    pub updated_rooms: Vec<Room>,
    /// Employees of groups whose room list ran past the end of the group.
    pub unallocated_employees: Vec<Employee>,
}

/// Collection a snapshot read was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Rooms,
    Employees,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rooms => f.write_str("rooms"),
            Self::Employees => f.write_str("employees"),
        }
    }
}

/// Failures of the allocation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    /// A snapshot could not be read; nothing was written.
    #[error("failed to read {collection} snapshot: {reason}")]
    ReadFailure { collection: Collection, reason: String },
    /// A room update failed; rooms written before it stay updated.
    #[error("failed to update occupants of room {room_id}: {reason}")]
    WriteFailure { room_id: RoomId, reason: String },
}

impl From<AllocationError> for Error {
    fn from(value: AllocationError) -> Self {
        let message = match &value {
            AllocationError::ReadFailure {
                collection: Collection::Rooms,
                ..
            } => "Error fetching room data",
            AllocationError::ReadFailure {
                collection: Collection::Employees,
                ..
            } => "Error fetching employee data",
            AllocationError::WriteFailure { .. } => "Error assigning employees to rooms",
        };
        Self::service_unavailable(message)
    }
}

/// Grouping key for rooms: the room type label.
fn room_group_key(room: &Room) -> String {
    room.room_type.as_str().to_owned()
}

/// Grouping key for employees: the employee's own identifier.
///
/// Kept literal; each group normally holds exactly one employee.
pub fn employee_group_key(employee: &Employee) -> String {
    employee.employee_id.as_str().to_owned()
}

/// Partition `items` by `key`, keeping groups in order of first appearance
/// and members in input order.
fn group_in_order<T, K>(items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let group_key = key(&item);
        match positions.get(&group_key) {
            Some(&position) => {
                if let Some((_, members)) = groups.get_mut(position) {
                    members.push(item);
                }
            }
            None => {
                positions.insert(group_key.clone(), groups.len());
                groups.push((group_key, vec![item]));
            }
        }
    }
    groups
}

/// Pair room snapshots with employee snapshots without touching storage.
///
/// For each room-type group, room `i` receives employee `i` of the matching
/// employee group as its sole occupant. Rooms without an employee at their
/// position are left out of both outputs. Reaching a position beyond the end
/// of the employee group reports the whole group as unallocated and ends the
/// group. Employees left over once the rooms run out are not reported.
/// Groups without a matching employee group are skipped.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use room_allocation::domain::{
///     Employee, EmployeeId, EmployeeName, NteId, Room, RoomNumber, RoomType, plan_allocation,
/// };
///
/// let room = Room::vacant(
///     RoomNumber::new("101").expect("number"),
///     RoomType::new("single").expect("type"),
/// );
/// let employee = Employee::new(
///     EmployeeId::random(),
///     EmployeeName::new("Ada Lovelace").expect("name"),
///     NteId::new("NTE-1").expect("nte id"),
///     Utc::now(),
/// );
///
/// let outcome = plan_allocation(vec![room], vec![employee]);
/// assert!(outcome.updated_rooms.is_empty());
/// assert!(outcome.unallocated_employees.is_empty());
/// ```
pub fn plan_allocation(rooms: Vec<Room>, employees: Vec<Employee>) -> AllocationOutcome {
    let mut employee_groups: HashMap<String, Vec<Employee>> =
        group_in_order(employees, employee_group_key)
            .into_iter()
            .collect();
    let mut outcome = AllocationOutcome::default();

    for (room_type, rooms) in group_in_order(rooms, room_group_key) {
        let Some(employees) = employee_groups.remove(&room_type) else {
            debug!(room_type = %room_type, rooms = rooms.len(), "no employee group for room type");
            continue;
        };

        for (position, room) in rooms.into_iter().enumerate() {
            if let Some(employee) = employees.get(position) {
                outcome
                    .updated_rooms
                    .push(room.occupied_by_only(employee.employee_id.clone()));
                continue;
            }
            if position > employees.len() {
                outcome.unallocated_employees.extend(employees);
                break;
            }
        }
    }

    outcome
}

/// Allocation service reading and writing through the storage ports.
#[derive(Clone)]
pub struct RoomAllocationService<R, E> {
    room_repo: Arc<R>,
    employee_repo: Arc<E>,
    storage_timeout: Duration,
}

impl<R, E> RoomAllocationService<R, E> {
    /// Create a service using [`DEFAULT_STORAGE_TIMEOUT`].
    pub fn new(room_repo: Arc<R>, employee_repo: Arc<E>) -> Self {
        Self {
            room_repo,
            employee_repo,
            storage_timeout: DEFAULT_STORAGE_TIMEOUT,
        }
    }

    /// Override the per-call storage timeout.
    #[must_use]
    pub fn with_storage_timeout(mut self, storage_timeout: Duration) -> Self {
        self.storage_timeout = storage_timeout;
        self
    }

    async fn bounded<T, Err>(
        &self,
        call: impl Future<Output = Result<T, Err>>,
    ) -> Result<T, String>
    where
        Err: fmt::Display,
    {
        match tokio::time::timeout(self.storage_timeout, call).await {
            Ok(result) => result.map_err(|err| err.to_string()),
            Err(_) => Err(format!(
                "storage call timed out after {}ms",
                self.storage_timeout.as_millis()
            )),
        }
    }
}

impl<R, E> RoomAllocationService<R, E>
where
    R: RoomRepository,
    E: EmployeeRepository,
{
    /// Run one allocation pass.
    ///
    /// Reads rooms then employees, plans the pairing, and writes each
    /// updated room in turn. The first failed write aborts the loop.
    pub async fn allocate(&self) -> Result<AllocationOutcome, AllocationError> {
        let rooms = self
            .bounded(self.room_repo.list_rooms())
            .await
            .map_err(|reason| AllocationError::ReadFailure {
                collection: Collection::Rooms,
                reason,
            })?;
        let employees = self
            .bounded(self.employee_repo.list_employees())
            .await
            .map_err(|reason| AllocationError::ReadFailure {
                collection: Collection::Employees,
                reason,
            })?;

        let outcome = plan_allocation(rooms, employees);

        for (written, room) in outcome.updated_rooms.iter().enumerate() {
            if let Err(reason) = self
                .bounded(
                    self.room_repo
                        .update_room_occupants(&room.id, &room.occupied_by),
                )
                .await
            {
                warn!(
                    room_id = %room.id,
                    rooms_written = written,
                    reason = %reason,
                    "room occupancy update failed; earlier updates remain applied"
                );
                return Err(AllocationError::WriteFailure {
                    room_id: room.id,
                    reason,
                });
            }
        }

        info!(
            updated_rooms = outcome.updated_rooms.len(),
            unallocated_employees = outcome.unallocated_employees.len(),
            "room allocation completed"
        );
        Ok(outcome)
    }
}

#[async_trait]
impl<R, E> RoomAllocationCommand for RoomAllocationService<R, E>
where
    R: RoomRepository,
    E: EmployeeRepository,
{
    async fn assign_employees(&self) -> Result<AllocationOutcome, Error> {
        self.allocate().await.map_err(Error::from)
    }
}

#[cfg(test)]
#[path = "allocation_tests.rs"]
mod tests;
