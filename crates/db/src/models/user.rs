//! User entity model and DTOs.

use atrium_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    /// PHC-formatted Argon2id hash. Invariant: always the output of the
    /// hasher, never raw input.
    pub hashed_password: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user. The password is hashed before it gets here.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub hashed_password: String,
}

/// DTO for updating an existing user. All fields are optional; `None`
/// means "leave unchanged".
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub hashed_password: Option<String>,
}
