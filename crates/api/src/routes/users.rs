//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /                          -> create_user
/// GET    /me                        -> current_user (requires auth)
/// GET    /{id}                      -> get_user
/// PATCH  /{id}                      -> update_user
/// DELETE /{id}                      -> delete_user
/// GET    /by-username/{username}    -> get_user_by_username
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::post(users::create_user))
        .route("/me", get(users::current_user))
        .route(
            "/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route("/by-username/{username}", get(users::get_user_by_username))
}
