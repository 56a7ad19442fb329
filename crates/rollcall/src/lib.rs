//! `rollcall` - A student record manager with validated, durable local storage
//!
//! This library provides field and record validation, an ordered record store
//! with unique student IDs, and persistence of the whole collection under a
//! single key of a `SQLite`-backed key-value table.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod record;
pub mod service;
pub mod storage;
pub mod store;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use persistence::{CorruptPolicy, Persistence};
pub use record::{FieldKind, Student, StudentInput};
pub use service::{DeleteOutcome, Notice, NoticeKind, Registry, SubmitOutcome};
pub use storage::{KeyValueStore, MemoryStorage, Storage, StorageStats};
pub use store::RecordStore;

/// Open the registry described by `config`, backed by its `SQLite` database.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the stored records
/// cannot be loaded.
pub fn open_registry(config: &Config) -> Result<Registry<Storage>> {
    let storage = Storage::open(config.database_path())?;
    let persistence = Persistence::new(storage, config.storage.key.clone())
        .with_corrupt_policy(config.storage.on_corrupt);
    Ok(Registry::new(RecordStore::open(persistence)?))
}
