
use axum::http::{header, StatusCode};
use fixtures::*;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_home_page_shows_banner_after_booking() {
    let app = create_test_app().await;

    let response = app.clone().oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_text(response).await.contains("booked successfully"));

    let response = app.oneshot(get_request("/?booked=1")).await.unwrap();
    assert!(body_text(response).await.contains("booked successfully"));
}

#[tokio::test]
async fn test_booking_form_renders() {
    let app = create_test_app().await;
    let response = app.oneshot(get_request("/booking")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"<form method="post" action="/booking">"#));
}

#[tokio::test]
async fn test_submit_booking_redirects() {
    let app = create_test_app().await;

    let response = app
        .clone()
        .oneshot(form_request(
            "/booking",
            booking_form_body("Ana", "2026-02-11", "09:00"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/?booked=1");

    let response = app
        .oneshot(get_request("/api/available-slots?date=2026-02-11"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["slots"][0], "10:00");
}

#[tokio::test]
async fn test_submit_booking_missing_field_rerenders_form() {
    let app = create_test_app().await;
    let body = booking_form_body("", "2026-02-11", "09:00");

    let response = app
        .clone()
        .oneshot(form_request("/booking", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("name is required"));

    let response = app
        .oneshot(get_request(&format!(
            "/view-appointments?password={}",
            ADMIN_PASSWORD
        )))
        .await
        .unwrap();
    assert!(body_text(response).await.contains("Appointments (0)"));
}

#[tokio::test]
async fn test_submit_booking_taken_slot_is_conflict() {
    let app = create_test_app().await;
    app.clone()
        .oneshot(form_request(
            "/booking",
            booking_form_body("Ana", "2026-02-11", "09:00"),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(form_request(
            "/booking",
            booking_form_body("Ben", "2026-02-11", "09:00"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_text(response).await.contains("already taken"));
}

#[tokio::test]
async fn test_view_appointments_requires_password() {
    let app = create_test_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/view-appointments"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(get_request("/view-appointments?password=wrong"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(get_request(&format!(
            "/view-appointments?password={}",
            ADMIN_PASSWORD
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_view_appointments_lists_bookings() {
    let app = create_test_app().await;
    app.clone()
        .oneshot(form_request(
            "/booking",
            booking_form_body("Ana Muster", "2026-02-11", "14:00"),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(get_request(&format!(
            "/view-appointments?password={}",
            ADMIN_PASSWORD
        )))
        .await
        .unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Ana Muster"));
    assert!(html.contains("scheduled"));
}

#[tokio::test]
async fn test_update_status() {
    let app = create_test_app().await;
    app.clone()
        .oneshot(form_request(
            "/booking",
            booking_form_body("Ana", "2026-02-11", "09:00"),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("/update-status/1", json!({ "status": "no-show" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["appointment"]["status"], "no-show");
    assert_eq!(body["appointment"]["time"], "09:00");
}

#[tokio::test]
async fn test_update_status_rejects_unknown_status() {
    let app = create_test_app().await;
    app.clone()
        .oneshot(form_request(
            "/booking",
            booking_form_body("Ana", "2026-02-11", "09:00"),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("/update-status/1", json!({ "status": "cancelled" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], 400);
}

#[tokio::test]
async fn test_update_status_unknown_id() {
    let app = create_test_app().await;
    let response = app
        .oneshot(json_request("/update-status/99", json!({ "status": "completed" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], 404);
}

#[tokio::test]
async fn test_reschedule_marks_postponed() {
    let app = create_test_app().await;
    app.clone()
        .oneshot(form_request(
            "/booking",
            booking_form_body("Ana", "2026-02-11", "09:00"),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "/reschedule/1",
            json!({ "new_date": "2026-03-01", "new_time": "10:00" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["appointment"]["date"], "2026-03-01");
    assert_eq!(body["appointment"]["time"], "10:00");
    assert_eq!(body["appointment"]["status"], "postponed");
}

#[tokio::test]
async fn test_reschedule_unknown_id() {
    let app = create_test_app().await;
    let response = app
        .oneshot(json_request(
            "/reschedule/5",
            json!({ "new_date": "2026-03-01", "new_time": "10:00" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blocked_dates_after_three_bookings() {
    let app = create_test_app().await;
    for (name, time) in [("Ana", "09:00"), ("Ben", "10:00"), ("Cleo", "11:00")] {
        let response = app
            .clone()
            .oneshot(form_request(
                "/booking",
                booking_form_body(name, "2026-02-11", time),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let response = app
        .clone()
        .oneshot(get_request("/api/blocked-dates"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body, json!({ "blocked_dates": ["2026-02-11"] }));

    let response = app
        .oneshot(get_request("/api/available-slots?date=2026-02-11"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(
        body["slots"],
        json!(["12:00", "13:00", "14:00", "15:00", "16:00", "17:00"])
    );
}

#[tokio::test]
async fn test_available_slots_requires_date() {
    let app = create_test_app().await;
    let response = app
        .oneshot(get_request("/api/available-slots"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], 400);
}

#[tokio::test]
async fn test_update_status_missing_field_is_json_error() {
    let app = create_test_app().await;
    let response = app
        .oneshot(json_request("/update-status/1", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], 400);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap_or_default()
        .contains("status"));
}

#[tokio::test]
async fn test_reschedule_missing_time_is_json_error() {
    let app = create_test_app().await;
    let response = app
        .oneshot(json_request(
            "/reschedule/1",
            json!({ "new_date": "2026-03-01" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], 400);
}

#[tokio::test]
async fn test_non_numeric_id_is_json_error() {
    let app = create_test_app().await;
    let response = app
        .oneshot(json_request("/update-status/abc", json!({ "status": "completed" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], 400);
}

#[tokio::test]
async fn test_reschedule_blank_time_is_bad_request() {
    let app = create_test_app().await;
    app.clone()
        .oneshot(form_request(
            "/booking",
            booking_form_body("Ana", "2026-02-11", "09:00"),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "/reschedule/1",
            json!({ "new_date": "2026-03-01", "new_time": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
