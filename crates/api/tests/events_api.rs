//! HTTP-level tests for `/api/events`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn test_create_event_defaults_to_upcoming(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app.clone(),
        "/api/events",
        json!({ "title": "Sports Day", "date": "2024-03-15", "category": "Sports" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert!(created["id"].is_i64());
    assert_eq!(created["status"], "upcoming");
    assert_eq!(created["date"], "2024-03-15");

    // Listed in date order among the seeded events.
    let list = body_json(get(app, "/api/events").await).await;
    let dates: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(
        dates,
        vec!["2024-02-20", "2024-03-15", "2024-03-15", "2024-04-10"]
    );
    assert!(list
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["id"] == created["id"] && e["title"] == "Sports Day"));
}

#[sqlx::test(migrations = false)]
async fn test_create_event_without_date_is_400(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(app, "/api/events", json!({ "title": "No date" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing required field: date");
}

#[sqlx::test(migrations = false)]
async fn test_update_event_replaces_row(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let created = body_json(
        post_json(
            app.clone(),
            "/api/events",
            json!({ "title": "PTA Meeting", "date": "2024-05-01" }),
        )
        .await,
    )
    .await;

    let response = put_json(
        app,
        "/api/events",
        json!({
            "id": created["id"],
            "title": "PTA Meeting (moved)",
            "date": "2024-05-08",
            "status": "completed",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["title"], "PTA Meeting (moved)");
    assert_eq!(updated["date"], "2024-05-08");
    assert_eq!(updated["status"], "completed");
    let ts = |v: &serde_json::Value| {
        chrono::DateTime::parse_from_rfc3339(v.as_str().unwrap()).unwrap()
    };
    assert!(ts(&updated["updated_at"]) >= ts(&created["updated_at"]));
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[sqlx::test(migrations = false)]
async fn test_update_unknown_event_is_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = put_json(
        app,
        "/api/events",
        json!({ "id": 999_999, "title": "Ghost", "date": "2024-01-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = false)]
async fn test_update_without_id_is_400(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = put_json(
        app,
        "/api/events",
        json!({ "title": "Anonymous", "date": "2024-01-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = false)]
async fn test_delete_event_twice(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let created = body_json(
        post_json(
            app.clone(),
            "/api/events",
            json!({ "title": "Book Fair", "date": "2024-06-01" }),
        )
        .await,
    )
    .await;
    let uri = format!("/api/events?id={}", created["id"]);

    let first = delete(app.clone(), &uri).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await["message"], "Event deleted successfully");

    let second = delete(app, &uri).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = false)]
async fn test_delete_without_id_is_400(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = delete(app, "/api/events").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
