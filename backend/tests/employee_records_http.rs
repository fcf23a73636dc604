//! Employee record lifecycle over the in-memory store.

mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use room_allocation::outbound::memory::InMemoryStore;
use support::{app_with, employee, state_over};

#[rstest]
#[actix_web::test]
async fn create_get_and_update_round_trip() {
    let store = Arc::new(InMemoryStore::new());
    let app = test::init_service(app_with(state_over(&store))).await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(json!({ "name": "Grace Hopper", "nteId": "NTE-7" }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(created).await;
    let id = created["employeeId"].as_str().expect("generated id").to_owned();

    let updated: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/v1/employees/{id}"))
            .set_json(json!({ "nteId": "NTE-8" }))
            .to_request(),
    )
    .await;
    assert_eq!(updated["name"], "Grace Hopper");
    assert_eq!(updated["nteId"], "NTE-8");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let fetched: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/employees/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched, updated);
    assert_eq!(store.employees().len(), 1);
}

#[rstest]
#[actix_web::test]
async fn unknown_employee_is_not_found_with_trace_header() {
    let store = Arc::new(InMemoryStore::seeded(Vec::new(), vec![employee("emp-1")]));
    let app = test::init_service(app_with(state_over(&store))).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/employees/emp-2")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let header = res
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["traceId"], header);
}

#[rstest]
#[actix_web::test]
async fn updating_a_missing_employee_creates_nothing() {
    let store = Arc::new(InMemoryStore::new());
    let app = test::init_service(app_with(state_over(&store))).await;

    let res = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/api/v1/employees/ghost")
            .set_json(json!({ "name": "Nobody Here" }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(store.employees().is_empty());
}
