pub mod auth;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/token                      issue access token (public)
///
/// /users                           create
/// /users/me                        current user (requires auth)
/// /users/{id}                      get, update, delete
/// /users/by-username/{username}    get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
}
