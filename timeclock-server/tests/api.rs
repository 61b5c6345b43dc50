//! Router-level API tests over the in-memory stores
//!
//! Exercises the full HTTP contract without a database: status codes,
//! Location headers, error bodies, and the employee/time-entry rules.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use timeclock_server::api;
use timeclock_server::state::AppState;

fn app() -> Router {
    api::create_router(AppState::in_memory())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn create_employee(app: &Router) -> String {
    let (status, body) = send_json(
        app,
        "POST",
        "/api/Employees",
        Some(json!({
            "firstName": "Jan",
            "lastName": "T",
            "email": "jan@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

// ==================== Employees ====================

#[tokio::test]
async fn create_employee_returns_id_and_location() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/Employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "firstName": "Jan",
                "lastName": "T",
                "email": "jan@example.com"
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let id = body["id"].as_str().unwrap();
    assert_eq!(location, format!("/api/Employees/{id}"));
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = app();
    let id = create_employee(&app).await;

    let (status, body) = send_json(&app, "GET", &format!("/api/Employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["firstName"], "Jan");
    assert_eq!(body["lastName"], "T");
    assert_eq!(body["email"], "jan@example.com");
}

#[tokio::test]
async fn list_employees_returns_created_records() {
    let app = app();
    let id = create_employee(&app).await;

    let (status, body) = send_json(&app, "GET", "/api/Employees", None).await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], id);
}

#[tokio::test]
async fn get_missing_employee_returns_404_without_body() {
    let app = app();
    let (status, bytes) = send(
        &app,
        "GET",
        "/api/Employees/00000000-0000-0000-0000-000000000001",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn update_employee_overwrites_record() {
    let app = app();
    let id = create_employee(&app).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/Employees/{id}"),
        Some(json!({
            "id": id,
            "firstName": "Janusz",
            "lastName": "Tester",
            "email": "janusz@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send_json(&app, "GET", &format!("/api/Employees/{id}"), None).await;
    assert_eq!(body["firstName"], "Janusz");
    assert_eq!(body["email"], "janusz@example.com");
}

#[tokio::test]
async fn update_with_mismatched_ids_is_rejected_without_write() {
    let app = app();
    let id = create_employee(&app).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/Employees/{id}"),
        Some(json!({
            "id": "00000000-0000-0000-0000-000000000009",
            "firstName": "Other",
            "lastName": "Person",
            "email": "other@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Storage untouched
    let (_, body) = send_json(&app, "GET", &format!("/api/Employees/{id}"), None).await;
    assert_eq!(body["firstName"], "Jan");
}

#[tokio::test]
async fn update_without_body_id_is_rejected_as_mismatch() {
    let app = app();
    let id = create_employee(&app).await;

    // Absent id defaults to nil, which fails the path/body comparison
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/Employees/{id}"),
        Some(json!({
            "firstName": "Janusz",
            "lastName": "Tester",
            "email": "janusz@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send_json(&app, "GET", &format!("/api/Employees/{id}"), None).await;
    assert_eq!(body["firstName"], "Jan");
}

#[tokio::test]
async fn update_missing_employee_returns_404() {
    let app = app();
    let ghost = "00000000-0000-0000-0000-000000000002";
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/Employees/{ghost}"),
        Some(json!({
            "id": ghost,
            "firstName": "No",
            "lastName": "Body",
            "email": "nobody@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_employee_twice_fails_the_second_time() {
    let app = app();
    let id = create_employee(&app).await;

    let (first, _) = send(&app, "DELETE", &format!("/api/Employees/{id}"), None).await;
    assert_eq!(first, StatusCode::NO_CONTENT);

    let (second, _) = send(&app, "DELETE", &format!("/api/Employees/{id}"), None).await;
    assert_eq!(second, StatusCode::NOT_FOUND);
}

// ==================== Time entries ====================

#[tokio::test]
async fn time_entry_hours_bounds_are_enforced() {
    let app = app();
    let id = create_employee(&app).await;
    let uri = format!("/api/Employees/{id}/time-entries");

    let cases = [
        (0, "2024-01-01", StatusCode::BAD_REQUEST),
        (1, "2024-01-02", StatusCode::CREATED),
        (24, "2024-01-03", StatusCode::CREATED),
        (25, "2024-01-04", StatusCode::BAD_REQUEST),
    ];
    for (hours, date, expected) in cases {
        let (status, bytes) = send(
            &app,
            "POST",
            &uri,
            Some(json!({ "date": date, "hoursWorked": hours })),
        )
        .await;
        assert_eq!(status, expected, "hoursWorked = {hours}");
        if expected == StatusCode::BAD_REQUEST {
            assert_eq!(
                String::from_utf8(bytes).unwrap(),
                "Work hours must be between 1 and 24."
            );
        }
    }

    // Rejected values never reached storage
    let (_, body) = send_json(&app, "GET", &uri, None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn second_entry_for_same_date_conflicts() {
    let app = app();
    let id = create_employee(&app).await;
    let uri = format!("/api/Employees/{id}/time-entries");
    let payload = json!({ "date": "2024-01-01", "hoursWorked": 8 });

    let (first, _) = send(&app, "POST", &uri, Some(payload.clone())).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, bytes) = send(&app, "POST", &uri, Some(payload)).await;
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "Time entry for this date already exists."
    );
}

#[tokio::test]
async fn create_time_entry_returns_entry_and_employee_location() {
    let app = app();
    let id = create_employee(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/Employees/{id}/time-entries"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "date": "2024-01-01", "hoursWorked": 8 }).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        &format!("/api/Employees/{id}")
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["employeeId"], id);
    assert_eq!(body["date"], "2024-01-01");
    assert_eq!(body["hoursWorked"], 8);
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn time_entries_are_scoped_to_their_employee() {
    let app = app();
    let first = create_employee(&app).await;
    let second = create_employee(&app).await;

    let (_, entry) = send_json(
        &app,
        "POST",
        &format!("/api/Employees/{first}/time-entries"),
        Some(json!({ "date": "2024-01-01", "hoursWorked": 8 })),
    )
    .await;
    let entry_id = entry["id"].as_str().unwrap();

    // Visible under the owning employee
    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/Employees/{first}/time-entries/{entry_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Absent under anyone else
    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/Employees/{second}/time-entries/{entry_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send_json(
        &app,
        "GET",
        &format!("/api/Employees/{second}/time-entries"),
        None,
    )
    .await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn update_time_entry_uses_route_id() {
    let app = app();
    let id = create_employee(&app).await;

    let (_, entry) = send_json(
        &app,
        "POST",
        &format!("/api/Employees/{id}/time-entries"),
        Some(json!({ "date": "2024-01-01", "hoursWorked": 8 })),
    )
    .await;
    let entry_id = entry["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/Employees/{id}/time-entries/{entry_id}"),
        Some(json!({ "date": "2024-01-02", "hoursWorked": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, updated) = send_json(
        &app,
        "GET",
        &format!("/api/Employees/{id}/time-entries/{entry_id}"),
        None,
    )
    .await;
    assert_eq!(updated["date"], "2024-01-02");
    assert_eq!(updated["hoursWorked"], 6);
}

#[tokio::test]
async fn update_or_delete_missing_time_entry_returns_404() {
    let app = app();
    let id = create_employee(&app).await;
    let ghost = "00000000-0000-0000-0000-000000000003";

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/Employees/{id}/time-entries/{ghost}"),
        Some(json!({ "date": "2024-01-01", "hoursWorked": 8 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/Employees/{id}/time-entries/{ghost}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_time_entry_then_list_is_empty() {
    let app = app();
    let id = create_employee(&app).await;

    let (_, entry) = send_json(
        &app,
        "POST",
        &format!("/api/Employees/{id}/time-entries"),
        Some(json!({ "date": "2024-01-01", "hoursWorked": 8 })),
    )
    .await;
    let entry_id = entry["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/Employees/{id}/time-entries/{entry_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, listed) = send_json(
        &app,
        "GET",
        &format!("/api/Employees/{id}/time-entries"),
        None,
    )
    .await;
    assert!(listed.as_array().unwrap().is_empty());
}

// ==================== Health ====================

#[tokio::test]
async fn health_check_is_ok() {
    let app = app();
    let (status, body) = send_json(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
