//! HTTP-level tests for `/api/news`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn test_create_article_defaults(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post_json(
        app.clone(),
        "/api/news",
        json!({ "title": "Admissions Open", "content": "Admissions for 2025-26 are open." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["status"], "draft");
    let publish_date = created["publish_date"].as_str().unwrap();
    assert!(chrono::NaiveDate::parse_from_str(publish_date, "%Y-%m-%d").is_ok());

    // Drafts are listed too, and the newest article comes first.
    let list = body_json(get(app, "/api/news").await).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list[0]["id"], created["id"]);
}

#[sqlx::test(migrations = false)]
async fn test_seeded_articles_are_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let list = body_json(get(app, "/api/news").await).await;
    let dates: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["publish_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-01-30", "2024-01-25", "2024-01-20"]);
}

#[sqlx::test(migrations = false)]
async fn test_create_with_bad_date_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    // Not a calendar date, so the body fails to decode.
    let response = post_json(
        app,
        "/api/news",
        json!({ "title": "Oops", "content": "x", "publish_date": "2024-02-30" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = false)]
async fn test_update_and_delete_article(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let created = body_json(
        post_json(
            app.clone(),
            "/api/news",
            json!({ "title": "Draft", "content": "tbd", "publish_date": "2024-02-01" }),
        )
        .await,
    )
    .await;

    let response = put_json(
        app.clone(),
        "/api/news",
        json!({
            "id": created["id"],
            "title": "Science Olympiad Winners",
            "content": "Congratulations to our winners.",
            "publish_date": "2024-02-02",
            "status": "published",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "published");
    assert_eq!(updated["publish_date"], "2024-02-02");

    let missing = put_json(
        app.clone(),
        "/api/news",
        json!({ "id": 777_777, "title": "x", "content": "y" }),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let uri = format!("/api/news?id={}", created["id"]);
    let first = delete(app.clone(), &uri).await;
    assert_eq!(
        body_json(first).await["message"],
        "News article deleted successfully"
    );
    assert_eq!(delete(app, &uri).await.status(), StatusCode::NOT_FOUND);
}
