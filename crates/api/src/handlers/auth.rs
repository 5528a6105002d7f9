//! Handlers for the `/auth` resource (token issuance).

use atrium_core::error::CoreError;
use atrium_db::repositories::UserRepo;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::token::issue_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/token`.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Successful token response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// POST /api/v1/auth/token
///
/// Authenticate with username + password and receive a bearer token.
///
/// The plaintext is always verified against the stored hash before a token
/// is issued. Unknown username and wrong password return the same 401 so
/// the response does not reveal which one failed.
pub async fn issue(
    State(state): State<AppState>,
    Json(input): Json<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    if !state.hasher.verify(&input.password, &user.hashed_password) {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let access_token = issue_token(user.id, &user.username, &state.config.token)
        .map_err(|e| AppError::InternalError(format!("Token issuance error: {e}")))?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        expires_in: state.config.token.expiry_mins * 60,
    }))
}
