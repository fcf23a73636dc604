//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP endpoint from the inbound layer together
//! with the request, response and error schemas they reference. The document
//! is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{AllocationOutcome, Employee, Error, ErrorCode, Room};
use crate::inbound::http::employees::{CreateEmployeeBody, UpdateEmployeeBody};
use crate::inbound::http::rooms::{AssignRoomsResponse, CreateRoomBody, ImportRoomsResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Room allocation API",
        description = "Employee and room records plus the room allocation pass."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::rooms::list_rooms,
        crate::inbound::http::rooms::create_room,
        crate::inbound::http::rooms::upload_rooms_csv,
        crate::inbound::http::rooms::assign_employees,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Employee,
        Room,
        AllocationOutcome,
        Error,
        ErrorCode,
        CreateEmployeeBody,
        UpdateEmployeeBody,
        CreateRoomBody,
        ImportRoomsResponse,
        AssignRoomsResponse,
    )),
    tags(
        (name = "employees", description = "Employee records"),
        (name = "rooms", description = "Room records and allocation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
