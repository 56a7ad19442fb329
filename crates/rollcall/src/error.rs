//! Error types for rollcall.
//!
//! This module defines all error types used throughout the rollcall crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::FieldErrors;

/// The main error type for rollcall operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Record Errors ===
    /// One or more fields of a submitted record failed their format check.
    #[error("invalid student record: {0}")]
    InvalidFields(FieldErrors),

    /// Another record already uses this student ID.
    #[error("student ID '{id}' already exists")]
    DuplicateId {
        /// The conflicting identifier.
        id: String,
    },

    /// A position does not reference an existing record.
    #[error("no record at position {position} (collection holds {len})")]
    InvalidPosition {
        /// The requested zero-based position.
        position: usize,
        /// Number of records at the time of the call.
        len: usize,
    },

    // === Storage Errors ===
    /// The durable medium could not be read or written.
    #[error("storage unavailable: {message}")]
    StorageUnavailable {
        /// Description of what went wrong.
        message: String,
    },

    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Stored records could not be decoded into a valid collection.
    #[error("stored records under '{key}' are corrupt: {reason}")]
    CorruptRecords {
        /// Storage key holding the collection.
        key: String,
        /// What made the content unusable.
        reason: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rollcall operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new storage unavailable error.
    #[must_use]
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
        }
    }

    /// Create a corrupt records error for the given storage key.
    #[must_use]
    pub fn corrupt_records(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorruptRecords {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error means the durable medium did not accept or yield data.
    ///
    /// When this is true for a mutating call, the mutation was not persisted.
    #[must_use]
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable { .. }
                | Self::DatabaseOpen { .. }
                | Self::DatabaseQuery(_)
                | Self::DirectoryCreate { .. }
                | Self::CorruptRecords { .. }
        )
    }

    /// Check if this error is a duplicate student ID.
    #[must_use]
    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, Self::DuplicateId { .. })
    }

    /// Check if this error is an out-of-range position.
    #[must_use]
    pub fn is_invalid_position(&self) -> bool {
        matches!(self, Self::InvalidPosition { .. })
    }
}
