//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe what the domain needs from storage.
//! Driving ports (`*Query`, `*Command`) are the use cases inbound adapters
//! call.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_repository;
mod employees_command;
mod employees_query;
mod room_allocation_command;
mod room_repository;
mod rooms_command;
mod rooms_query;

pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError};
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employees_command::{CreateEmployeeRequest, EmployeesCommand, UpdateEmployeeRequest};
#[cfg(test)]
pub use employees_command::MockEmployeesCommand;
pub use employees_query::EmployeesQuery;
#[cfg(test)]
pub use employees_query::MockEmployeesQuery;
pub use room_allocation_command::RoomAllocationCommand;
#[cfg(test)]
pub use room_allocation_command::MockRoomAllocationCommand;
pub use room_repository::{RoomRepository, RoomRepositoryError};
#[cfg(test)]
pub use room_repository::MockRoomRepository;
pub use rooms_command::{CreateRoomRequest, RoomImportOutcome, RoomsCommand};
#[cfg(test)]
pub use rooms_command::MockRoomsCommand;
pub use rooms_query::RoomsQuery;
#[cfg(test)]
pub use rooms_query::MockRoomsQuery;
