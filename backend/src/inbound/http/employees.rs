//! Employee record handlers.
//!
//! ```text
//! GET   /api/v1/employees
//! POST  /api/v1/employees {"name":"Ada Lovelace","nteId":"NTE-1"}
//! GET   /api/v1/employees/{employee_id}
//! PATCH /api/v1/employees/{employee_id} {"nteId":"NTE-2"}
//! ```

use actix_web::{HttpResponse, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::domain::{Employee, EmployeeId, EmployeeName, Error, NteId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, empty_update_error, employee_field_error, require,
};

const EMPLOYEE_ID: FieldName = FieldName::new("employeeId");
const NAME: FieldName = FieldName::new("name");
const NTE_ID: FieldName = FieldName::new("nteId");

/// Request body for `POST /api/v1/employees`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeBody {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "NTE-0042")]
    pub nte_id: Option<String>,
}

/// Request body for `PATCH /api/v1/employees/{employee_id}`.
///
/// Blank fields count as absent; at least one must remain.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeBody {
    pub name: Option<String>,
    pub nte_id: Option<String>,
}

fn parse_employee_id(raw: String) -> Result<EmployeeId, Error> {
    EmployeeId::new(raw).map_err(|err| employee_field_error(EMPLOYEE_ID, err))
}

fn parse_name(raw: String) -> Result<EmployeeName, Error> {
    EmployeeName::new(raw).map_err(|err| employee_field_error(NAME, err))
}

fn parse_nte_id(raw: String) -> Result<NteId, Error> {
    NteId::new(raw).map_err(|err| employee_field_error(NTE_ID, err))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl TryFrom<CreateEmployeeBody> for CreateEmployeeRequest {
    type Error = Error;

    fn try_from(body: CreateEmployeeBody) -> Result<Self, Self::Error> {
        Ok(Self {
            name: parse_name(require(body.name, NAME)?)?,
            nte_id: parse_nte_id(require(body.nte_id, NTE_ID)?)?,
        })
    }
}

fn parse_update(employee_id: EmployeeId, body: UpdateEmployeeBody) -> ApiResult<UpdateEmployeeRequest> {
    let name = non_blank(body.name).map(parse_name).transpose()?;
    let nte_id = non_blank(body.nte_id).map(parse_nte_id).transpose()?;
    if name.is_none() && nte_id.is_none() {
        return Err(empty_update_error());
    }
    Ok(UpdateEmployeeRequest {
        employee_id,
        name,
        nte_id,
    })
}

/// List every employee.
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "Employees", body = [Employee]),
        (status = 503, description = "Storage unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    let employees = state.employees_query.list_employees().await?;
    Ok(web::Json(employees))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/api/v1/employees/{employee_id}",
    params(("employee_id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee", body = Employee),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employees/{employee_id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Employee>> {
    let employee_id = parse_employee_id(path.into_inner())?;
    let employee = state.employees_query.get_employee(&employee_id).await?;
    Ok(web::Json(employee))
}

/// Create an employee with a generated identifier.
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = CreateEmployeeBody,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Identifier clash", body = Error)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEmployeeBody>,
) -> ApiResult<HttpResponse> {
    let request = CreateEmployeeRequest::try_from(payload.into_inner())?;
    let employee = state.employees.create_employee(request).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Update an employee's name and/or NTE id.
#[utoipa::path(
    patch,
    path = "/api/v1/employees/{employee_id}",
    params(("employee_id" = String, Path, description = "Employee identifier")),
    request_body = UpdateEmployeeBody,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[patch("/employees/{employee_id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateEmployeeBody>,
) -> ApiResult<web::Json<Employee>> {
    let employee_id = parse_employee_id(path.into_inner())?;
    let request = parse_update(employee_id, payload.into_inner())?;
    let employee = state.employees.update_employee(request).await?;
    Ok(web::Json(employee))
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
