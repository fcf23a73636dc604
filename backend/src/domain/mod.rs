//! Domain primitives, services and ports.
//!
//! Purpose: define the employee and room records, the allocation pass that
//! pairs them, and the ports through which adapters reach the domain. Types
//! validate on construction; serde contracts are documented on each type.
//!
//! Public surface:
//! - [`Employee`] and [`Room`] records plus their validated field types.
//! - [`RoomAllocationService`], [`EmployeeService`] and [`RoomService`]
//!   implementing the driving ports in [`ports`].
//! - [`Error`] / [`ErrorCode`], the transport-agnostic error payload.
//! - [`TraceId`], the request-scoped correlation identifier.

pub mod allocation;
pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod room;
pub mod room_import;
pub mod room_service;
pub mod trace_id;

pub use self::allocation::{
    AllocationError, AllocationOutcome, Collection, DEFAULT_STORAGE_TIMEOUT,
    RoomAllocationService, employee_group_key, plan_allocation,
};
pub use self::employee::{
    EMPLOYEE_NAME_MAX, EMPLOYEE_NAME_MIN, Employee, EmployeeId, EmployeeName,
    EmployeeValidationError, NteId,
};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode};
pub use self::room::{Room, RoomId, RoomNumber, RoomType, RoomValidationError};
pub use self::room_import::{ROOM_CSV_COLUMNS, RoomImportError, parse_rooms_csv};
pub use self::room_service::RoomService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use room_allocation::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("nope"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
