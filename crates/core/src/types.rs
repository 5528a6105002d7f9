//! Primitive type aliases shared by the db and api crates.

/// Database primary key (`BIGSERIAL`).
pub type DbId = i64;

/// UTC timestamp as stored in `TIMESTAMPTZ` columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
