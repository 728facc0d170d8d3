use sea_orm::{DbErr, SqlErr};

pub mod matches;
pub mod notifications;
pub mod registrations;
pub mod tournaments;
pub mod users;

/// Whether the store rejected a write because of a unique index.
fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Trims optional free text and drops it when nothing is left.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
