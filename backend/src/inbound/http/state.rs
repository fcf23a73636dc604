//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised with mocks and no storage.

use std::sync::Arc;
use std::time::Duration;

use mockable::Clock;

use crate::domain::ports::{
    EmployeeRepository, EmployeesCommand, EmployeesQuery, RoomAllocationCommand, RoomRepository,
    RoomsCommand, RoomsQuery,
};
use crate::domain::{EmployeeService, RoomAllocationService, RoomService};

/// Port implementations used by the HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeesCommand>,
    pub employees_query: Arc<dyn EmployeesQuery>,
    pub rooms: Arc<dyn RoomsCommand>,
    pub rooms_query: Arc<dyn RoomsQuery>,
    pub allocation: Arc<dyn RoomAllocationCommand>,
}

impl HttpState {
    /// Wire the domain services over a pair of repositories.
    ///
    /// `storage_timeout` bounds each storage call made by the allocation
    /// pass.
    pub fn over_repositories<R, E>(
        room_repo: Arc<R>,
        employee_repo: Arc<E>,
        clock: Arc<dyn Clock>,
        storage_timeout: Duration,
    ) -> Self
    where
        R: RoomRepository + 'static,
        E: EmployeeRepository + 'static,
    {
        let employees = Arc::new(EmployeeService::new(employee_repo.clone(), clock));
        let rooms = Arc::new(RoomService::new(room_repo.clone()));
        let allocation = Arc::new(
            RoomAllocationService::new(room_repo, employee_repo)
                .with_storage_timeout(storage_timeout),
        );
        Self {
            employees: employees.clone(),
            employees_query: employees,
            rooms: rooms.clone(),
            rooms_query: rooms,
            allocation,
        }
    }
}
