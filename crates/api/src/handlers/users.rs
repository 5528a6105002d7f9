//! Handlers for the `/users` resource.

use atrium_core::error::CoreError;
use atrium_core::types::DbId;
use atrium_db::models::user::{CreateUser, UpdateUser, UserResponse};
use atrium_db::repositories::UserRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::auth::password::validate_password_strength;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Minimum password length enforced on user creation and password change.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `PATCH /users/{id}`. Omitted fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/users
///
/// Create a new user. Validates the input, hashes the password, and returns
/// a safe [`UserResponse`] with 201 Created. A duplicate username is
/// rejected by the schema constraint and surfaces as 409.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    if input.username.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Username must not be empty".into(),
        )));
    }
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = state
        .hasher
        .hash(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        hashed_password: hashed,
    };

    let user = UserRepo::create(&state.pool, &create_dto).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /api/v1/users/me
///
/// Return the user identified by the Bearer token.
pub async fn current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;

    Ok(Json(UserResponse::from(&user)))
}

/// GET /api/v1/users/{id}
///
/// Get a single user by ID.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(UserResponse::from(&user)))
}

/// GET /api/v1/users/by-username/{username}
///
/// Get a single user by username.
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{username}' not found")))?;

    Ok(Json(UserResponse::from(&user)))
}

/// PATCH /api/v1/users/{id}
///
/// Partially update a user. Each field is independently optional; a new
/// password is re-hashed before storage.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    if let Some(username) = &input.username {
        if username.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Username must not be empty".into(),
            )));
        }
    }

    let hashed = match &input.password {
        Some(password) => {
            validate_password_strength(password, MIN_PASSWORD_LENGTH)
                .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
            let hash = state
                .hasher
                .hash(password)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
            Some(hash)
        }
        None => None,
    };

    let update_dto = UpdateUser {
        username: input.username,
        hashed_password: hashed,
    };

    let user = UserRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/v1/users/{id}
///
/// Hard-delete a user. Returns the record as it existed before deletion.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(UserResponse::from(&user)))
}
