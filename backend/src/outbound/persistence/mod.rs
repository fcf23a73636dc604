//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories translate between Diesel rows and domain records and map
//! every database failure onto the port error types. Row structs and table
//! definitions stay private to this module.
//!
//! ```ignore
//! use room_allocation::outbound::persistence::{DbPool, DieselRoomRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/rooms")).await?;
//! let rooms = DieselRoomRepository::new(pool);
//! ```

mod diesel_employee_repository;
mod diesel_error_mapping;
mod diesel_room_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use diesel_room_repository::DieselRoomRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
