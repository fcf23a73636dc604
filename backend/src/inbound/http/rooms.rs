//! Room record and allocation handlers.
//!
//! ```text
//! GET  /api/v1/rooms
//! POST /api/v1/rooms {"roomNo":"101","roomType":"double"}
//! POST /api/v1/rooms/upload-csv (text/csv: roomNo,roomType,<ignored>)
//! POST /api/v1/rooms/assign
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::ports::CreateRoomRequest;
use crate::domain::{AllocationOutcome, Error, Room, RoomNumber, RoomType};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require, room_field_error};

const ROOM_NO: FieldName = FieldName::new("roomNo");
const ROOM_TYPE: FieldName = FieldName::new("roomType");

/// Message returned after a successful allocation pass.
pub const ASSIGN_SUCCESS_MESSAGE: &str = "Employees assigned to rooms successfully";

/// Request body for `POST /api/v1/rooms`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomBody {
    #[schema(example = "101")]
    pub room_no: Option<String>,
    #[schema(example = "double")]
    pub room_type: Option<String>,
}

impl TryFrom<CreateRoomBody> for CreateRoomRequest {
    type Error = Error;

    fn try_from(body: CreateRoomBody) -> Result<Self, Self::Error> {
        let room_no = RoomNumber::new(require(body.room_no, ROOM_NO)?)
            .map_err(|err| room_field_error(ROOM_NO, err))?;
        let room_type = RoomType::new(require(body.room_type, ROOM_TYPE)?)
            .map_err(|err| room_field_error(ROOM_TYPE, err))?;
        Ok(Self { room_no, room_type })
    }
}

/// Response body for a CSV import.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportRoomsResponse {
    #[schema(example = "Successfully created 3 rooms")]
    pub message: String,
    pub created: usize,
}

/// Response body for `POST /api/v1/rooms/assign`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoomsResponse {
    #[schema(example = "Employees assigned to rooms successfully")]
    pub message: String,
    #[serde(flatten)]
    pub outcome: AllocationOutcome,
}

/// List every room.
#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    responses(
        (status = 200, description = "Rooms", body = [Room]),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["rooms"],
    operation_id = "listRooms"
)]
#[get("/rooms")]
pub async fn list_rooms(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Room>>> {
    let rooms = state.rooms_query.list_rooms().await?;
    Ok(web::Json(rooms))
}

/// Create a vacant room.
#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    request_body = CreateRoomBody,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Room number already exists", body = Error)
    ),
    tags = ["rooms"],
    operation_id = "createRoom"
)]
#[post("/rooms")]
pub async fn create_room(
    state: web::Data<HttpState>,
    payload: web::Json<CreateRoomBody>,
) -> ApiResult<HttpResponse> {
    let request = CreateRoomRequest::try_from(payload.into_inner())?;
    let room = state.rooms.create_room(request).await?;
    Ok(HttpResponse::Created().json(room))
}

/// Import rooms from a headerless three-column CSV body.
#[utoipa::path(
    post,
    path = "/api/v1/rooms/upload-csv",
    request_body(content = String, content_type = "text/csv", example = "101,single,\n102,double,\n"),
    responses(
        (status = 201, description = "Rooms created", body = ImportRoomsResponse),
        (status = 400, description = "Malformed CSV", body = Error),
        (status = 409, description = "Room number already exists", body = Error)
    ),
    tags = ["rooms"],
    operation_id = "uploadRoomsCsv"
)]
#[post("/rooms/upload-csv")]
pub async fn upload_rooms_csv(
    state: web::Data<HttpState>,
    body: String,
) -> ApiResult<HttpResponse> {
    let outcome = state.rooms.import_rooms_csv(body).await?;
    Ok(HttpResponse::Created().json(ImportRoomsResponse {
        message: outcome.message(),
        created: outcome.created,
    }))
}

/// Run the allocation pass over the current rooms and employees.
#[utoipa::path(
    post,
    path = "/api/v1/rooms/assign",
    responses(
        (status = 200, description = "Allocation result", body = AssignRoomsResponse),
        (status = 503, description = "Storage read or write failed", body = Error)
    ),
    tags = ["rooms"],
    operation_id = "assignEmployees"
)]
#[post("/rooms/assign")]
pub async fn assign_employees(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<AssignRoomsResponse>> {
    let outcome = state.allocation.assign_employees().await?;
    info!(
        updated_rooms = outcome.updated_rooms.len(),
        "allocation request served"
    );
    Ok(web::Json(AssignRoomsResponse {
        message: ASSIGN_SUCCESS_MESSAGE.to_owned(),
        outcome,
    }))
}

#[cfg(test)]
#[path = "rooms_tests.rs"]
mod tests;
