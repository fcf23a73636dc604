//! Process-local storage adapter.
//!
//! Backs both repositories when no database URL is configured and serves as
//! the fake store in tests. Records live behind `std::sync::Mutex`; a
//! poisoned lock is recovered rather than propagated since every mutation
//! leaves the vectors consistent.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    EmployeeRepository, EmployeeRepositoryError, RoomRepository, RoomRepositoryError,
};
use crate::domain::{Employee, EmployeeId, Room, RoomId, RoomNumber};

/// In-memory room and employee store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rooms: Mutex<Vec<Room>>,
    employees: Mutex<Vec<Employee>>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given records in the given order.
    pub fn seeded(rooms: Vec<Room>, employees: Vec<Employee>) -> Self {
        Self {
            rooms: Mutex::new(rooms),
            employees: Mutex::new(employees),
        }
    }

    /// Copy of the stored rooms.
    pub fn rooms(&self) -> Vec<Room> {
        locked(&self.rooms).clone()
    }

    /// Copy of the stored employees.
    pub fn employees(&self) -> Vec<Employee> {
        locked(&self.employees).clone()
    }
}

#[async_trait]
impl RoomRepository for InMemoryStore {
    async fn list_rooms(&self) -> Result<Vec<Room>, RoomRepositoryError> {
        Ok(self.rooms())
    }

    async fn find_by_room_number(
        &self,
        room_no: &RoomNumber,
    ) -> Result<Option<Room>, RoomRepositoryError> {
        Ok(locked(&self.rooms)
            .iter()
            .find(|room| &room.room_no == room_no)
            .cloned())
    }

    async fn insert_rooms(&self, rooms: &[Room]) -> Result<(), RoomRepositoryError> {
        let mut stored = locked(&self.rooms);
        let mut seen: HashSet<&str> = stored.iter().map(|room| room.room_no.as_str()).collect();
        for room in rooms {
            if !seen.insert(room.room_no.as_str()) {
                return Err(RoomRepositoryError::duplicate_room_number(
                    room.room_no.to_string(),
                ));
            }
        }
        stored.extend_from_slice(rooms);
        Ok(())
    }

    async fn update_room_occupants(
        &self,
        room_id: &RoomId,
        occupant_ids: &[EmployeeId],
    ) -> Result<(), RoomRepositoryError> {
        if let Some(room) = locked(&self.rooms)
            .iter_mut()
            .find(|room| &room.id == room_id)
        {
            room.occupied_by = occupant_ids.to_vec();
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        Ok(self.employees())
    }

    async fn find_by_id(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        Ok(locked(&self.employees)
            .iter()
            .find(|employee| &employee.employee_id == employee_id)
            .cloned())
    }

    async fn insert(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let mut stored = locked(&self.employees);
        if stored
            .iter()
            .any(|existing| existing.employee_id == employee.employee_id)
        {
            return Err(EmployeeRepositoryError::duplicate_employee_id(
                employee.employee_id.to_string(),
            ));
        }
        stored.push(employee.clone());
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        if let Some(existing) = locked(&self.employees)
            .iter_mut()
            .find(|existing| existing.employee_id == employee.employee_id)
        {
            *existing = employee.clone();
        }
        Ok(())
    }
}
