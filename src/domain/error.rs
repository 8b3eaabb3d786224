//! Storage error taxonomy.
//!
//! Every variant carries the dotted name of the operation that failed
//! (e.g. `storage.postgres.create`). Backend errors are kept only as an
//! opaque `source`, so nothing outside an adapter depends on driver types.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    /// A video with the same title is already stored
    #[error("{op}: title exists")]
    TitleExists { op: &'static str },

    /// No video matches the requested id
    #[error("{op}: id is not found")]
    IdNotFound { op: &'static str },

    /// The backend could not be reached (connect, I/O, TLS, pool timeout)
    #[error("{op}: storage unavailable: {source}")]
    Unavailable {
        op: &'static str,
        #[source]
        source: BoxError,
    },

    /// The store has been closed
    #[error("{op}: storage is closed")]
    Closed { op: &'static str },

    /// Any backend failure without a more specific meaning
    #[error("{op}: {source}")]
    Unknown {
        op: &'static str,
        #[source]
        source: BoxError,
    },
}

impl StorageError {
    pub fn unavailable(op: &'static str, source: impl Into<BoxError>) -> Self {
        StorageError::Unavailable {
            op,
            source: source.into(),
        }
    }

    pub fn unknown(op: &'static str, source: impl Into<BoxError>) -> Self {
        StorageError::Unknown {
            op,
            source: source.into(),
        }
    }

    /// Name of the operation that produced this error.
    pub fn op(&self) -> &'static str {
        match self {
            StorageError::TitleExists { op }
            | StorageError::IdNotFound { op }
            | StorageError::Unavailable { op, .. }
            | StorageError::Closed { op }
            | StorageError::Unknown { op, .. } => op,
        }
    }

    pub fn is_title_exists(&self) -> bool {
        matches!(self, StorageError::TitleExists { .. })
    }

    pub fn is_id_not_found(&self) -> bool {
        matches!(self, StorageError::IdNotFound { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, StorageError::Closed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_includes_operation() {
        let err = StorageError::TitleExists {
            op: "storage.postgres.create",
        };
        assert_eq!(err.to_string(), "storage.postgres.create: title exists");

        let err = StorageError::IdNotFound {
            op: "storage.postgres.get",
        };
        assert_eq!(err.to_string(), "storage.postgres.get: id is not found");
    }

    #[test]
    fn test_wrapped_errors_keep_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StorageError::unavailable("storage.postgres.new", io);

        assert_eq!(err.op(), "storage.postgres.new");
        assert!(err.to_string().contains("refused"));
        assert!(err.source().is_some());
        assert!(!err.is_title_exists());
    }

    #[test]
    fn test_unknown_from_message() {
        let err = StorageError::unknown("storage.memory.create", "size out of range");
        assert_eq!(err.to_string(), "storage.memory.create: size out of range");
    }
}
