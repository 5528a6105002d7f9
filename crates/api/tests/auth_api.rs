//! HTTP-level integration tests for token issuance and the authenticated
//! `/users/me` endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json};
use sqlx::PgPool;

/// Create a user through the API and return its JSON representation.
async fn create_user_api(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/users", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Request a token through the API, asserting success, and return the JSON.
async fn obtain_token(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/token", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Successful login returns 200 with an access token in the original
/// OAuth2-ish shape.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_token_success(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_user_api(app.clone(), "loginuser", "secret-password-1").await;

    let json = obtain_token(app, "loginuser", "secret-password-1").await;

    assert!(
        json["access_token"].is_string(),
        "response must contain access_token"
    );
    assert_eq!(json["token_type"], "bearer");
    assert!(
        json["expires_in"].is_number(),
        "response must contain expires_in"
    );
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_token_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    create_user_api(app.clone(), "wrongpw", "secret-password-1").await;

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/token", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns the same 401 as a wrong
/// password, so the response does not reveal which credential failed.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_token_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    create_user_api(app.clone(), "existing", "secret-password-1").await;

    let wrong_pw = serde_json::json!({ "username": "existing", "password": "bad" });
    let wrong_pw_response = post_json(app.clone(), "/api/v1/auth/token", wrong_pw).await;

    let ghost = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let ghost_response = post_json(app, "/api/v1/auth/token", ghost).await;

    assert_eq!(wrong_pw_response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ghost_response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(wrong_pw_response).await["error"],
        body_json(ghost_response).await["error"],
        "both failures must carry the same message"
    );
}

/// A valid token resolves `/users/me` to the issuing user.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_with_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let created = create_user_api(app.clone(), "meuser", "secret-password-1").await;

    let token_json = obtain_token(app.clone(), "meuser", "secret-password-1").await;
    let token = token_json["access_token"].as_str().unwrap();

    let response = get_auth(app, "/api/v1/users/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], created["id"]);
    assert_eq!(json["username"], "meuser");
    assert!(
        json.get("hashed_password").is_none(),
        "the hash must never appear in responses"
    );
}

/// `/users/me` without a token returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/users/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// `/users/me` with a garbage token returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_rejects_garbage_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/users/me", "not-a-real-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
