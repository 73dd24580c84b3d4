//! HTTP-level tests for admin login and `/api/admin/me`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, ADMIN_EMAIL, ADMIN_PASSWORD, TEST_JWT_SECRET};
use schoolsite_api::auth::jwt::{generate_token, validate_token, JwtConfig};
use schoolsite_db::repositories::AdminUserRepo;
use serde_json::json;
use sqlx::PgPool;

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiry_hours: 24,
    }
}

#[sqlx::test(migrations = false)]
async fn test_login_returns_token_for_admin(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let admin = AdminUserRepo::find_by_email(&pool, ADMIN_EMAIL)
        .await
        .unwrap()
        .expect("bootstrap admin exists");

    let response = post_json(
        app,
        "/api/admin/auth",
        json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["id"], admin.id);
    assert_eq!(json["user"]["email"], ADMIN_EMAIL);
    assert_eq!(json["user"]["name"], "Test Admin");
    assert!(json["user"].get("password_hash").is_none());

    let claims = validate_token(json["token"].as_str().unwrap(), &jwt_config()).unwrap();
    assert_eq!(claims.sub, admin.id);
    assert_eq!(claims.email, ADMIN_EMAIL);
    assert_eq!(claims.exp - claims.iat, 24 * 3600);
}

#[sqlx::test(migrations = false)]
async fn test_wrong_password_and_unknown_email_look_the_same(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let wrong_password = post_json(
        app.clone(),
        "/api/admin/auth",
        json!({ "email": ADMIN_EMAIL, "password": "not-the-password" }),
    )
    .await;
    let unknown_email = post_json(
        app,
        "/api/admin/auth",
        json!({ "email": "nobody@school.test", "password": ADMIN_PASSWORD }),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let a = body_json(wrong_password).await;
    let b = body_json(unknown_email).await;
    assert_eq!(a, b);
    assert_eq!(a["error"], "Invalid credentials");
}

#[sqlx::test(migrations = false)]
async fn test_login_requires_both_fields(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    for body in [
        json!({ "email": ADMIN_EMAIL }),
        json!({ "password": ADMIN_PASSWORD }),
        json!({ "email": "", "password": ADMIN_PASSWORD }),
        json!({}),
    ] {
        let response = post_json(app.clone(), "/api/admin/auth", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Email and password are required"
        );
    }
}

#[sqlx::test(migrations = false)]
async fn test_me_returns_profile_for_valid_token(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let token = common::admin_token(app.clone()).await;

    let response = get_auth(app, "/api/admin/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["email"], ADMIN_EMAIL);
    assert_eq!(json["name"], "Test Admin");
}

#[sqlx::test(migrations = false)]
async fn test_me_rejects_missing_or_bad_tokens(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    assert_eq!(
        get(app.clone(), "/api/admin/me").await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        get_auth(app.clone(), "/api/admin/me", "not-a-jwt").await.status(),
        StatusCode::UNAUTHORIZED
    );

    let foreign = JwtConfig {
        secret: "some-other-secret".to_string(),
        expiry_hours: 24,
    };
    let forged = generate_token(1, ADMIN_EMAIL, &foreign).unwrap();
    assert_eq!(
        get_auth(app.clone(), "/api/admin/me", &forged).await.status(),
        StatusCode::UNAUTHORIZED
    );

    // Correctly signed, but for an account that does not exist.
    let orphan = generate_token(987_654, "gone@school.test", &jwt_config()).unwrap();
    assert_eq!(
        get_auth(app, "/api/admin/me", &orphan).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[sqlx::test(migrations = false)]
async fn test_concurrent_logins_all_complete(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let attempts: Vec<_> = [ADMIN_PASSWORD, "wrong-password", ADMIN_PASSWORD, "also-wrong"]
        .into_iter()
        .map(|password| {
            let app = app.clone();
            tokio::spawn(async move {
                post_json(
                    app,
                    "/api/admin/auth",
                    json!({ "email": ADMIN_EMAIL, "password": password }),
                )
                .await
                .status()
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for attempt in attempts {
        statuses.push(attempt.await.unwrap());
    }
    assert_eq!(
        statuses,
        vec![
            StatusCode::OK,
            StatusCode::UNAUTHORIZED,
            StatusCode::OK,
            StatusCode::UNAUTHORIZED,
        ]
    );
}
