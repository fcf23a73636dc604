//! PostgreSQL-backed `EmployeeRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{EmployeeRow, EmployeeUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::employees;

/// Diesel implementation of [`EmployeeRepository`].
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    EmployeeRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> EmployeeRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => EmployeeRepositoryError::connection(message),
        DieselFailure::Query(message) => EmployeeRepositoryError::query(message),
        DieselFailure::UniqueViolation { key } => EmployeeRepositoryError::duplicate_employee_id(
            key.unwrap_or_else(|| "unknown".to_owned()),
        ),
    }
}

fn row_to_employee(row: EmployeeRow) -> Result<Employee, EmployeeRepositoryError> {
    Employee::try_from(row).map_err(|err| {
        warn!(error = %err, "rejecting invalid employee row");
        EmployeeRepositoryError::query(err.to_string())
    })
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::position.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_employee).collect()
    }

    async fn find_by_id(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .filter(employees::employee_id.eq(employee_id.as_str()))
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_employee).transpose()
    }

    async fn insert(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(employees::table)
            .values(EmployeeRow::from(employee))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(
            employees::table.filter(employees::employee_id.eq(employee.employee_id.as_str())),
        )
        .set(EmployeeUpdate::from(employee))
        .execute(&mut conn)
        .await
        .map(|_| ())
        .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::Error as DieselError;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::build("invalid URL"));

        assert_eq!(err, EmployeeRepositoryError::connection("invalid URL"));
    }

    #[rstest]
    fn query_builder_error_maps_to_query_error() {
        let err = map_diesel_error(DieselError::QueryBuilderError("empty changeset".into()));

        assert_eq!(err, EmployeeRepositoryError::query("database query error"));
    }
}
