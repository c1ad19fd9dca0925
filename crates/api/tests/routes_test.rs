mod test_utils;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use clinic_api::routes::health::{HealthResponse, VersionResponse};
use clinic_core::models::appointment::GenerateAppointmentsResponse;
use uuid::Uuid;

use test_utils::lazy_server;

#[tokio::test]
async fn test_health_check() {
    let server = lazy_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "ok");
    assert_eq!(body.service, "clinic-api");
}

#[tokio::test]
async fn test_version() {
    let server = lazy_server();

    let response = server.get("/version").await;

    response.assert_status_ok();
    let body: VersionResponse = response.json();
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_generate_reversed_range_creates_nothing() {
    let server = lazy_server();

    let response = server
        .post("/api/appointments/generate")
        .json(&json!({ "start_date": "2024-03-22", "end_date": "2024-03-16" }))
        .await;

    response.assert_status_ok();
    let body: GenerateAppointmentsResponse = response.json();
    assert_eq!(body.created_count, 0);
}

#[rstest]
#[case(json!({ "start_date": "2024-13-45", "end_date": "2024-03-16" }))]
#[case(json!({ "start_date": "2024-03-16" }))]
#[case(json!({ "start_date": 20240316, "end_date": "2024-03-16" }))]
#[tokio::test]
async fn test_generate_rejects_malformed_body(#[case] body: Value) {
    let server = lazy_server();

    let response = server
        .post("/api/appointments/generate")
        .json(&body)
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[rstest]
#[case(0, "08:00:00", "10:00:00")]
#[case(4, "10:00:00", "08:00:00")]
#[case(4, "09:00:00", "09:00:00")]
#[tokio::test]
async fn test_create_schedule_validation(
    #[case] count: i32,
    #[case] start_time: &str,
    #[case] end_time: &str,
) {
    let server = lazy_server();

    let response = server
        .post("/api/schedules")
        .json(&json!({
            "doctor_id": Uuid::new_v4(),
            "clinic_id": null,
            "shift_id": null,
            "service_id": Uuid::new_v4(),
            "day_of_week": "saturday",
            "start_time": start_time,
            "end_time": end_time,
            "count": count,
        }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
}

#[tokio::test]
async fn test_list_holidays_rejects_reversed_range() {
    let server = lazy_server();

    let response = server
        .get("/api/holidays")
        .add_query_param("start", "2024-03-22")
        .add_query_param("end", "2024-03-16")
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_appointments_requires_range() {
    let server = lazy_server();

    let response = server
        .get("/api/appointments")
        .add_query_param("doctor_id", Uuid::new_v4())
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
