//! Tests for room HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use super::*;
use crate::domain::ports::RoomImportOutcome;
use crate::domain::{EmployeeId, RoomId};
use crate::inbound::http::test_utils::{MockPorts, test_app};

fn double_room() -> Room {
    Room {
        id: RoomId::from_uuid(Uuid::nil()),
        room_no: RoomNumber::new("1").expect("room number"),
        room_type: RoomType::new("double").expect("room type"),
        occupied_by: vec![EmployeeId::new("double").expect("employee id")],
    }
}

async fn send(ports: MockPorts, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(ports)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[rstest]
#[actix_web::test]
async fn assign_reports_outcome_with_message() {
    let mut ports = MockPorts::default();
    ports
        .allocation
        .expect_assign_employees()
        .times(1)
        .return_once(|| {
            Ok(AllocationOutcome {
                updated_rooms: vec![double_room()],
                unallocated_employees: Vec::new(),
            })
        });

    let (status, body) = send(ports, actix_test::TestRequest::post().uri("/api/v1/rooms/assign")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Employees assigned to rooms successfully",
            "updatedRoomData": [{
                "id": "00000000-0000-0000-0000-000000000000",
                "roomNo": "1",
                "roomType": "double",
                "occupiedBy": ["double"],
            }],
            "unallocatedEmployees": [],
        })
    );
}

#[rstest]
#[case("Error fetching room data")]
#[case("Error fetching employee data")]
#[case("Error assigning employees to rooms")]
#[actix_web::test]
async fn assign_failures_are_service_unavailable(#[case] message: &'static str) {
    let mut ports = MockPorts::default();
    ports
        .allocation
        .expect_assign_employees()
        .times(1)
        .return_once(move || Err(Error::service_unavailable(message)));

    let (status, body) = send(ports, actix_test::TestRequest::post().uri("/api/v1/rooms/assign")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "service_unavailable");
    assert_eq!(body["message"], message);
}

#[rstest]
#[actix_web::test]
async fn create_room_returns_created() {
    let mut ports = MockPorts::default();
    ports
        .rooms
        .expect_create_room()
        .withf(|request| request.room_no.as_str() == "101" && request.room_type.as_str() == "single")
        .times(1)
        .return_once(|request| Ok(Room::vacant(request.room_no, request.room_type)));

    let (status, body) = send(
        ports,
        actix_test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(json!({ "roomNo": "101", "roomType": "single" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["roomNo"], "101");
    assert_eq!(body["occupiedBy"], json!([]));
}

#[rstest]
#[case(json!({ "roomType": "single" }), "roomNo")]
#[case(json!({ "roomNo": "101", "roomType": " " }), "roomType")]
#[actix_web::test]
async fn create_room_rejects_invalid_bodies(#[case] payload: Value, #[case] field: &str) {
    let mut ports = MockPorts::default();
    ports.rooms.expect_create_room().never();

    let (status, body) = send(
        ports,
        actix_test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], field);
}

#[rstest]
#[actix_web::test]
async fn create_room_conflict_maps_to_409() {
    let mut ports = MockPorts::default();
    ports
        .rooms
        .expect_create_room()
        .times(1)
        .return_once(|_| Err(Error::conflict("room 101 already exists")));

    let (status, _) = send(
        ports,
        actix_test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(json!({ "roomNo": "101", "roomType": "single" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[rstest]
#[actix_web::test]
async fn upload_csv_passes_body_through() {
    let mut ports = MockPorts::default();
    ports
        .rooms
        .expect_import_rooms_csv()
        .withf(|text| text == "1,single,\n2,double,\n")
        .times(1)
        .return_once(|_| Ok(RoomImportOutcome { created: 2 }));

    let (status, body) = send(
        ports,
        actix_test::TestRequest::post()
            .uri("/api/v1/rooms/upload-csv")
            .insert_header(("content-type", "text/csv"))
            .set_payload("1,single,\n2,double,\n"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "message": "Successfully created 2 rooms", "created": 2 })
    );
}

#[rstest]
#[actix_web::test]
async fn list_rooms_returns_rooms() {
    let mut ports = MockPorts::default();
    ports
        .rooms_query
        .expect_list_rooms()
        .times(1)
        .return_once(|| Ok(vec![double_room()]));

    let (status, body) = send(ports, actix_test::TestRequest::get().uri("/api/v1/rooms")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}
