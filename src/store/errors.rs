//! # Store errors
//!
//! Failure taxonomy for the persistence layer. Authorization denials and
//! lookup misses are NOT errors; they come back as `Ok(false)` and
//! `Ok(None)` so callers decide how to present them. Everything here is
//! local and recoverable; nothing is fatal to the process.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence-layer errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The user file exists but could not be opened for reading.
    ///
    /// A configuration problem for the surrounding application; the
    /// lenient open path recovers by starting empty.
    #[error("user file exists but cannot be read: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The user file content is not the expected JSON object.
    ///
    /// Also raised for out-of-range access-level codes.
    #[error("user file is not a valid user collection")]
    Malformed(#[from] serde_json::Error),

    /// The collection could not be persisted
    #[error("failed to persist user file: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A writer panicked while holding the store lock
    #[error("user store lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_names_the_path() {
        let err = StoreError::Unreadable {
            path: PathBuf::from("/etc/registry/users.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/etc/registry/users.json"));
        assert!(err.to_string().contains("cannot be read"));
    }

    #[test]
    fn test_write_failure_names_the_path() {
        let err = StoreError::WriteFailed {
            path: PathBuf::from("users.json"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert!(err.to_string().contains("users.json"));
    }

    #[test]
    fn test_malformed_wraps_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StoreError::from(json_err);
        assert!(matches!(err, StoreError::Malformed(_)));
    }
}
