//! Tests for employee HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ErrorCode;
use crate::inbound::http::test_utils::{MockPorts, test_app};

#[fixture]
fn stored() -> Employee {
    Employee::new(
        EmployeeId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id"),
        EmployeeName::new("Ada Lovelace").expect("valid name"),
        NteId::new("NTE-1").expect("valid nte id"),
        Utc.with_ymd_and_hms(2026, 5, 4, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp"),
    )
}

async fn send(ports: MockPorts, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(ports)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

#[rstest]
#[actix_web::test]
async fn list_returns_wire_shape(stored: Employee) {
    let mut ports = MockPorts::default();
    ports
        .employees_query
        .expect_list_employees()
        .times(1)
        .return_once(move || Ok(vec![stored]));

    let (status, body) = send(ports, actix_test::TestRequest::get().uri("/api/v1/employees")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "employeeId": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "name": "Ada Lovelace",
            "nteId": "NTE-1",
            "createdAt": "2026-05-04T09:00:00Z",
            "updatedAt": "2026-05-04T09:00:00Z",
        }])
    );
}

#[rstest]
#[actix_web::test]
async fn get_maps_not_found() {
    let mut ports = MockPorts::default();
    ports
        .employees_query
        .expect_get_employee()
        .times(1)
        .return_once(|id| Err(Error::not_found(format!("employee {id} not found"))));

    let (status, body) = send(
        ports,
        actix_test::TestRequest::get().uri("/api/v1/employees/emp-404"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "employee emp-404 not found");
}

#[rstest]
#[actix_web::test]
async fn create_returns_created(stored: Employee) {
    let mut ports = MockPorts::default();
    ports
        .employees
        .expect_create_employee()
        .withf(|request| request.name.as_str() == "Ada Lovelace" && request.nte_id.as_str() == "NTE-1")
        .times(1)
        .return_once(move |_| Ok(stored));

    let (status, body) = send(
        ports,
        actix_test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(json!({ "name": "Ada Lovelace", "nteId": "NTE-1" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["employeeId"], "3fa85f64-5717-4562-b3fc-2c963f66afa6");
}

#[rstest]
#[case(json!({ "nteId": "NTE-1" }), "name", "missing_field")]
#[case(json!({ "name": "A", "nteId": "NTE-1" }), "name", "invalid_length")]
#[case(json!({ "name": "Ada Lovelace", "nteId": "  " }), "nteId", "blank_value")]
#[case(json!({ "name": "Ada Lovelace" }), "nteId", "missing_field")]
#[actix_web::test]
async fn create_rejects_invalid_bodies(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let mut ports = MockPorts::default();
    ports.employees.expect_create_employee().never();

    let (status, body) = send(
        ports,
        actix_test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], code);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_an_invalid_request() {
    let (status, body) = send(
        MockPorts::default(),
        actix_test::TestRequest::post()
            .uri("/api/v1/employees")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn update_forwards_only_non_blank_fields(stored: Employee) {
    let mut ports = MockPorts::default();
    ports
        .employees
        .expect_update_employee()
        .withf(|request| {
            request.employee_id.as_str() == "emp-1"
                && request.name.is_none()
                && request.nte_id.as_ref().map(NteId::as_str) == Some("NTE-2")
        })
        .times(1)
        .return_once(move |_| Ok(stored));

    let (status, _) = send(
        ports,
        actix_test::TestRequest::patch()
            .uri("/api/v1/employees/emp-1")
            .set_json(json!({ "name": "", "nteId": "NTE-2" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn update_without_changes_is_rejected() {
    let mut ports = MockPorts::default();
    ports.employees.expect_update_employee().never();

    let (status, body) = send(
        ports,
        actix_test::TestRequest::patch()
            .uri("/api/v1/employees/emp-1")
            .set_json(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "empty_update");
}

#[rstest]
fn update_body_parsing_rejects_short_name() {
    let err = parse_update(
        EmployeeId::new("emp-1").expect("valid id"),
        UpdateEmployeeBody {
            name: Some("X".to_owned()),
            nte_id: None,
        },
    )
    .expect_err("short name");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}
