//! Starting the server against tables and accounts left by an older
//! deployment.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{admin_token, body_json, get, post_json, ADMIN_EMAIL};
use schoolsite_api::bootstrap::{provision_admin, Provisioned};
use serde_json::json;
use sqlx::PgPool;

/// A bcrypt hash in the format `bcryptjs` wrote with 10 rounds.
const BCRYPT_HASH: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

async fn create_legacy_tables(pool: &PgPool) {
    for ddl in [
        "CREATE TABLE events (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            description TEXT,
            category VARCHAR(100),
            status VARCHAR(20) DEFAULT 'upcoming',
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
        "CREATE TABLE gallery_images (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            category VARCHAR(100),
            src VARCHAR(500) NOT NULL,
            alt VARCHAR(255),
            upload_date DATE DEFAULT CURRENT_DATE,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
        "CREATE TABLE admin_users (
            id SERIAL PRIMARY KEY,
            email VARCHAR(255) UNIQUE NOT NULL,
            password_hash VARCHAR(255) NOT NULL,
            name VARCHAR(255),
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
    ] {
        sqlx::query(ddl).execute(pool).await.unwrap();
    }
}

async fn insert_legacy_admin(pool: &PgPool, email: &str) {
    sqlx::query(
        "INSERT INTO admin_users (name, email, password_hash) VALUES ('Admin User', $1, $2)",
    )
    .bind(email)
    .bind(BCRYPT_HASH)
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test(migrations = false)]
async fn test_legacy_tables_are_served_after_startup(pool: PgPool) {
    create_legacy_tables(&pool).await;
    sqlx::query("INSERT INTO events (title, date) VALUES ('Parents Evening', '2023-11-02')")
        .execute(&pool)
        .await
        .unwrap();
    insert_legacy_admin(&pool, ADMIN_EMAIL).await;

    let app = common::build_test_app(pool).await;

    let response = get(app.clone(), "/api/events").await;
    assert_eq!(response.status(), StatusCode::OK);
    let events = body_json(response).await;
    assert_eq!(events[0]["title"], "Parents Evening");

    let response = get(app.clone(), "/api/gallery").await;
    assert_eq!(response.status(), StatusCode::OK);

    // Startup replaced the bootstrap admin's bcrypt hash.
    admin_token(app).await;
}

#[sqlx::test(migrations = false)]
async fn test_bcrypt_admin_is_refused_until_reprovisioned(pool: PgPool) {
    create_legacy_tables(&pool).await;
    insert_legacy_admin(&pool, "office@school.test").await;
    let app = common::build_test_app(pool.clone()).await;

    let response = post_json(
        app.clone(),
        "/api/admin/auth",
        json!({ "email": "office@school.test", "password": "admin123456" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid credentials");
    assert_eq!(json["code"], "UNAUTHORIZED");

    let outcome = provision_admin(&pool, "office@school.test", "Office", "fresh-password")
        .await
        .unwrap();
    assert_matches!(
        outcome,
        Provisioned::Rehashed(p) if p.name.as_deref() == Some("Admin User")
    );

    let response = post_json(
        app,
        "/api/admin/auth",
        json!({ "email": "office@school.test", "password": "fresh-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
