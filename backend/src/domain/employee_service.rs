//! Employee record services.
//!
//! Implements the employee driving ports on top of [`EmployeeRepository`].
//! Updates never create records: an unknown identifier is `NotFound`.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{
    CreateEmployeeRequest, EmployeeRepository, EmployeeRepositoryError, EmployeesCommand,
    EmployeesQuery, UpdateEmployeeRequest,
};
use crate::domain::{Employee, EmployeeId, Error};

/// Map storage failures onto domain errors.
pub(crate) fn map_employee_repository_error(error: EmployeeRepositoryError) -> Error {
    match error {
        EmployeeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("employee repository unavailable: {message}"))
        }
        EmployeeRepositoryError::Query { message } => {
            Error::internal(format!("employee repository error: {message}"))
        }
        EmployeeRepositoryError::DuplicateEmployeeId { employee_id } => {
            Error::conflict(format!("employee {employee_id} already exists"))
        }
    }
}

fn employee_not_found(employee_id: &EmployeeId) -> Error {
    Error::not_found(format!("employee {employee_id} not found"))
}

/// Employee service implementing [`EmployeesQuery`] and [`EmployeesCommand`].
#[derive(Clone)]
pub struct EmployeeService<R> {
    employee_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> EmployeeService<R> {
    /// Create a service over `employee_repo`, stamping records with `clock`.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use room_allocation::domain::EmployeeService;
    /// # use room_allocation::outbound::memory::InMemoryStore;
    /// let service = EmployeeService::new(Arc::new(InMemoryStore::new()), Arc::new(DefaultClock));
    /// # let _ = service;
    /// ```
    pub fn new(employee_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            employee_repo,
            clock,
        }
    }
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn fetch(&self, employee_id: &EmployeeId) -> Result<Employee, Error> {
        self.employee_repo
            .find_by_id(employee_id)
            .await
            .map_err(map_employee_repository_error)?
            .ok_or_else(|| employee_not_found(employee_id))
    }
}

#[async_trait]
impl<R> EmployeesQuery for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn list_employees(&self) -> Result<Vec<Employee>, Error> {
        self.employee_repo
            .list_employees()
            .await
            .map_err(map_employee_repository_error)
    }

    async fn get_employee(&self, employee_id: &EmployeeId) -> Result<Employee, Error> {
        self.fetch(employee_id).await
    }
}

#[async_trait]
impl<R> EmployeesCommand for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn create_employee(&self, request: CreateEmployeeRequest) -> Result<Employee, Error> {
        let employee = Employee::new(
            EmployeeId::random(),
            request.name,
            request.nte_id,
            self.clock.utc(),
        );
        self.employee_repo
            .insert(&employee)
            .await
            .map_err(map_employee_repository_error)?;
        info!(employee_id = %employee.employee_id, "employee created");
        Ok(employee)
    }

    async fn update_employee(&self, request: UpdateEmployeeRequest) -> Result<Employee, Error> {
        let UpdateEmployeeRequest {
            employee_id,
            name,
            nte_id,
        } = request;
        if name.is_none() && nte_id.is_none() {
            return Err(Error::invalid_request(
                "at least one of name or nteId must be provided",
            ));
        }

        let updated = self
            .fetch(&employee_id)
            .await?
            .with_changes(name, nte_id, self.clock.utc());
        self.employee_repo
            .update(&updated)
            .await
            .map_err(map_employee_repository_error)?;
        info!(employee_id = %updated.employee_id, "employee updated");
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
