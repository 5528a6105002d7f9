//! Shared domain types and the error taxonomy used across the Atrium crates.

pub mod error;
pub mod types;

pub use error::CoreError;
