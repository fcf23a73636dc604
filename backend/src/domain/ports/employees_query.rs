//! Driving port for reading employee records.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Error};

/// Use-case port for employee reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeesQuery: Send + Sync {
    /// Every stored employee.
    async fn list_employees(&self) -> Result<Vec<Employee>, Error>;

    /// A single employee; [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn get_employee(&self, employee_id: &EmployeeId) -> Result<Employee, Error>;
}
