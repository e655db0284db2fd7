//! Router-level tests: requests go through the full axum stack without a socket.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use callgrid_engine::MemoryStore;
use callgrid_server::{app, seed, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState::new(MemoryStore::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_booking(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::post("/api/bookings")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

fn booking_body(call_type: &str, date: &str, time: &str) -> Value {
    json!({
        "clientId": "c1",
        "clientName": "Sriram Kumar",
        "clientPhone": "+91-9876543210",
        "callType": call_type,
        "date": date,
        "time": time,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Calendar
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_calendar_day() {
    let app = test_app();
    let (status, body) = get(&app, "/api/calendar/2024-01-15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2024-01-15");
    let slots = body["timeSlots"].as_array().unwrap();
    assert_eq!(slots.len(), 28);
    assert!(slots.iter().all(|s| s["available"] == true));
}

#[tokio::test]
async fn malformed_date_is_bad_request() {
    let app = test_app();
    for uri in [
        "/api/calendar/15-01-2024",
        "/api/calendar/2024-02-30",
        "/api/calendar/today",
        "/api/calendar/+2024-1-15",
        "/api/calendar/%202024-1-15",
        "/api/calendar/2024-%201-15",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].as_str().unwrap().contains("YYYY-MM-DD"));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Booking creation
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_conflict() {
    let app = test_app();

    let (status, created) = post_booking(&app, booking_body("onboarding", "2024-01-15", "10:30")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["duration"], 40);
    assert_eq!(created["isRecurring"], false);
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));

    let (status, body) = post_booking(&app, booking_body("follow-up", "2024-01-15", "10:50")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Would overlap with existing onboarding call at 10:30");
}

#[tokio::test]
async fn follow_up_shows_on_later_weeks() {
    let app = test_app();
    let (status, created) = post_booking(&app, booking_body("follow-up", "2024-01-15", "11:10")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["recurringPattern"], json!({ "frequency": "weekly", "dayOfWeek": 1 }));

    let (_, next) = get(&app, "/api/calendar/2024-01-22").await;
    assert_eq!(next["timeSlots"][2]["time"], "11:10");
    assert_eq!(next["timeSlots"][2]["booking"]["id"], created["id"]);

    let (_, prior) = get(&app, "/api/calendar/2024-01-08").await;
    assert_eq!(prior["timeSlots"][2]["available"], true);
}

#[tokio::test]
async fn last_slot_onboarding_beyond_hours() {
    let app = test_app();
    let (status, body) = post_booking(&app, booking_body("onboarding", "2024-01-15", "19:30")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Booking extends beyond business hours");
}

#[tokio::test]
async fn invalid_payloads_are_bad_requests() {
    let app = test_app();

    let mut missing = booking_body("onboarding", "2024-01-15", "10:30");
    missing.as_object_mut().unwrap().remove("clientPhone");

    let cases = [
        missing,
        booking_body("workshop", "2024-01-15", "10:30"),
        booking_body("onboarding", "2024/01/15", "10:30"),
        booking_body("onboarding", " 2024-1-15", "10:30"),
        booking_body("onboarding", "2024- 1-15", "10:30"),
        booking_body("onboarding", "+2024-1-15", "10:30"),
        booking_body("onboarding", "2024-01-15", "10:40"),
        json!({ "clientId": 7 }),
    ];
    for case in cases {
        let (status, body) = post_booking(&app, case.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
        assert!(body["error"].is_string());
    }

    let not_json = Request::post("/api/bookings")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(&app, not_json).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was written.
    let (_, day) = get(&app, "/api/calendar/2024-01-15").await;
    assert!(day["timeSlots"].as_array().unwrap().iter().all(|s| s["available"] == true));
}

// ─────────────────────────────────────────────────────────────────────────────
// Deletion and stats
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_series_is_idempotent() {
    let app = test_app();
    let (_, created) = post_booking(&app, booking_body("follow-up", "2024-01-15", "11:10")).await;
    let uri = format!("/api/bookings/{}", created["id"].as_str().unwrap());

    let (status, _) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    for date in ["2024-01-15", "2024-01-22", "2024-03-04"] {
        let (_, day) = get(&app, &format!("/api/calendar/{date}")).await;
        assert_eq!(day["timeSlots"][2]["available"], true, "{date}");
    }
}

#[tokio::test]
async fn day_stats() {
    let app = test_app();
    post_booking(&app, booking_body("follow-up", "2024-01-08", "12:10")).await;
    post_booking(&app, booking_body("onboarding", "2024-01-15", "14:30")).await;
    post_booking(&app, booking_body("follow-up", "2024-01-15", "16:10")).await;

    let (status, stats) = get(&app, "/api/calendar/2024-01-15/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats, json!({ "total": 3, "recurring": 2, "oneTime": 1 }));
}

// ─────────────────────────────────────────────────────────────────────────────
// Clients and health
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn clients_listing_and_search() {
    let state = AppState::new(MemoryStore::new());
    seed::seed_clients(state.scheduler.store()).unwrap();
    let app = app(state);

    let (status, all) = get(&app, "/api/clients").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 20);

    let (_, found) = get(&app, "/api/clients?search=kapoor").await;
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Ritu Kapoor");
    assert_eq!(found[0]["phone"], "+91-9876543225");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}
