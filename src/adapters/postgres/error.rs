//! Translation of sqlx errors into `StorageError`.
//!
//! This is the only place that knows PostgreSQL error codes.

use crate::domain::StorageError;
use sqlx::migrate::MigrateError;

/// SQLSTATE for unique_violation
pub(super) const UNIQUE_VIOLATION: &str = "23505";

pub(super) fn translate(op: &'static str, err: sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::Database(ref db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            StorageError::TitleExists { op }
        }
        sqlx::Error::RowNotFound => StorageError::IdNotFound { op },
        sqlx::Error::PoolClosed => StorageError::Closed { op },
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::WorkerCrashed => StorageError::unavailable(op, err),
        err => StorageError::unknown(op, err),
    }
}

pub(super) fn translate_migrate(op: &'static str, err: MigrateError) -> StorageError {
    match err {
        MigrateError::Execute(err) => translate(op, err),
        other => StorageError::unknown(op, other),
    }
}
