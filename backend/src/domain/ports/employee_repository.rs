//! Storage port for employee records.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Store could not be reached.
        Connection { message: String } => "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "employee repository query failed: {message}",
        /// An employee with the same identifier is already stored.
        DuplicateEmployeeId { employee_id: String } =>
            "employee {employee_id} already exists",
    }
}

/// Port for employee storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Full unfiltered snapshot of every employee, in storage order.
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Fetch an employee by identifier.
    async fn find_by_id(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Insert a new employee.
    async fn insert(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError>;

    /// Persist the mutable fields (`name`, `nte_id`, `updated_at`) of an
    /// existing employee.
    async fn update(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError>;
}
