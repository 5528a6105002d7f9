//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`token`] -- JWT access-token issuance and validation.

pub mod password;
pub mod token;
