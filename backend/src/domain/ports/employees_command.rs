//! Driving port for creating and updating employee records.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, EmployeeName, Error, NteId};

/// Validated input for creating an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployeeRequest {
    pub name: EmployeeName,
    pub nte_id: NteId,
}

/// Validated input for a partial employee update.
///
/// At least one of `name` or `nte_id` must be set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEmployeeRequest {
    pub employee_id: EmployeeId,
    pub name: Option<EmployeeName>,
    pub nte_id: Option<NteId>,
}

/// Use-case port for employee writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeesCommand: Send + Sync {
    /// Create an employee with a generated identifier and timestamps.
    async fn create_employee(&self, request: CreateEmployeeRequest) -> Result<Employee, Error>;

    /// Apply a partial update and return the stored result.
    async fn update_employee(&self, request: UpdateEmployeeRequest) -> Result<Employee, Error>;
}
