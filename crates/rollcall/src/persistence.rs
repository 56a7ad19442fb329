//! Persistence of record collections.
//!
//! The whole collection is stored as one JSON array under a single key of a
//! [`KeyValueStore`]. Each element has exactly the fields `name`, `id`,
//! `email` and `contact`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::record::{Student, StudentInput};
use crate::storage::KeyValueStore;
use crate::validation::check_record;

/// How [`Persistence::load`] treats stored content it cannot accept.
///
/// Content is corrupt when it is not a JSON array of four-field records, or
/// when the records break the collection invariants (an invalid field value,
/// a repeated student ID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptPolicy {
    /// Fail the load with [`Error::CorruptRecords`].
    #[default]
    Fail,
    /// Log a warning and load an empty collection. The stored content is left
    /// in place until the next save overwrites it.
    Empty,
}

/// Reads and writes the record collection under one storage key.
#[derive(Debug)]
pub struct Persistence<S> {
    storage: S,
    key: String,
    on_corrupt: CorruptPolicy,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Create an adapter storing the collection under `key`.
    #[must_use]
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            on_corrupt: CorruptPolicy::default(),
        }
    }

    /// Set the policy for corrupt stored content.
    #[must_use]
    pub fn with_corrupt_policy(mut self, policy: CorruptPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }

    /// The storage key holding the collection.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The active corrupt-content policy.
    #[must_use]
    pub fn corrupt_policy(&self) -> CorruptPolicy {
        self.on_corrupt
    }

    /// Borrow the underlying storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutably borrow the underlying storage.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consume the adapter and return the underlying storage.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Load the stored collection.
    ///
    /// An absent key yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read, or if the stored content is
    /// corrupt and the policy is [`CorruptPolicy::Fail`].
    pub fn load(&self) -> Result<Vec<Student>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            debug!("No records stored under {}", self.key);
            return Ok(Vec::new());
        };

        match decode(&raw) {
            Ok(records) => {
                debug!("Loaded {} records from {}", records.len(), self.key);
                Ok(records)
            }
            Err(reason) => match self.on_corrupt {
                CorruptPolicy::Fail => Err(Error::corrupt_records(&self.key, reason)),
                CorruptPolicy::Empty => {
                    warn!(
                        "Stored records under {} are corrupt ({}); starting empty",
                        self.key, reason
                    );
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Replace the stored collection.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or storage cannot be written.
    pub fn save(&mut self, records: &[Student]) -> Result<()> {
        let encoded = serde_json::to_string(records)?;
        self.storage.set(&self.key, &encoded)?;
        debug!("Saved {} records to {}", records.len(), self.key);
        Ok(())
    }
}

/// Decode a stored collection, checking the model invariants.
fn decode(raw: &str) -> std::result::Result<Vec<Student>, String> {
    let records: Vec<Student> = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let mut seen = HashSet::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        match check_record(&StudentInput::from(record)) {
            Ok(checked) if checked == *record => {}
            Ok(_) => return Err(format!("record {position} has untrimmed fields")),
            Err(errors) => return Err(format!("record {position} is invalid: {errors}")),
        }
        if !seen.insert(record.id.as_str()) {
            return Err(format!("student ID '{}' is stored more than once", record.id));
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::FailingStorage;
    use crate::storage::MemoryStorage;

    fn sample() -> Vec<Student> {
        vec![
            Student::new("Ann Lee", "101", "a@b.com", "1234567890"),
            Student::new("Bo Chen", "102", "bo@school.edu", "5551234567"),
        ]
    }

    fn persistence_with(raw: &str) -> Persistence<MemoryStorage> {
        let mut storage = MemoryStorage::new();
        storage.set("students", raw).unwrap();
        Persistence::new(storage, "students")
    }

    #[test]
    fn test_load_absent_is_empty() {
        let persistence = Persistence::new(MemoryStorage::new(), "students");
        assert!(persistence.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut persistence = Persistence::new(MemoryStorage::new(), "students");
        let records = sample();

        persistence.save(&records).unwrap();
        assert_eq!(persistence.load().unwrap(), records);
    }

    #[test]
    fn test_save_empty_collection() {
        let mut persistence = Persistence::new(MemoryStorage::new(), "students");
        persistence.save(&[]).unwrap();
        assert_eq!(persistence.storage().get("students").unwrap().as_deref(), Some("[]"));
        assert!(persistence.load().unwrap().is_empty());
    }

    #[test]
    fn test_encoded_format() {
        let mut persistence = Persistence::new(MemoryStorage::new(), "students");
        persistence.save(&sample()[..1]).unwrap();

        let raw = persistence.storage().get("students").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"name": "Ann Lee", "id": "101", "email": "a@b.com", "contact": "1234567890"}
            ])
        );
    }

    #[test]
    fn test_field_order_is_not_significant() {
        let persistence = persistence_with(
            r#"[{"contact":"1234567890","email":"a@b.com","id":"101","name":"Ann Lee"}]"#,
        );
        assert_eq!(persistence.load().unwrap(), sample()[..1].to_vec());
    }

    #[test]
    fn test_key_is_namespaced() {
        let mut persistence = Persistence::new(MemoryStorage::new(), "class_a");
        persistence.save(&sample()).unwrap();

        let storage = persistence.into_inner();
        assert!(storage.get("students").unwrap().is_none());
        assert!(storage.get("class_a").unwrap().is_some());
    }

    #[test]
    fn test_unparseable_content_fails_by_default() {
        let persistence = persistence_with("{not json");
        let err = persistence.load().unwrap_err();
        assert!(matches!(err, Error::CorruptRecords { .. }));
        assert!(err.is_storage_unavailable());
    }

    #[test]
    fn test_schema_mismatch_fails() {
        let persistence = persistence_with(r#"{"students": []}"#);
        assert!(persistence.load().is_err());

        let persistence = persistence_with(r#"[{"name":"Ann Lee","id":"101"}]"#);
        assert!(persistence.load().is_err());
    }

    #[test]
    fn test_invalid_stored_field_is_corrupt() {
        let persistence = persistence_with(
            r#"[{"name":"A1","id":"101","email":"a@b.com","contact":"1234567890"}]"#,
        );
        let err = persistence.load().unwrap_err().to_string();
        assert!(err.contains("record 0"));
    }

    #[test]
    fn test_untrimmed_stored_field_is_corrupt() {
        let persistence = persistence_with(
            r#"[{"name":"Ann Lee ","id":"101","email":"a@b.com","contact":"1234567890"}]"#,
        );
        assert!(persistence.load().is_err());
    }

    #[test]
    fn test_duplicate_stored_ids_are_corrupt() {
        let persistence = persistence_with(
            r#"[{"name":"Ann","id":"101","email":"a@b.com","contact":"1234567890"},
                {"name":"Bo","id":"101","email":"b@b.com","contact":"1234567890"}]"#,
        );
        let err = persistence.load().unwrap_err().to_string();
        assert!(err.contains("'101'"));
    }

    #[test]
    fn test_corrupt_content_with_empty_policy() {
        crate::logging::init_test_logging();
        let persistence = persistence_with("garbage").with_corrupt_policy(CorruptPolicy::Empty);
        assert_eq!(persistence.corrupt_policy(), CorruptPolicy::Empty);
        assert!(persistence.load().unwrap().is_empty());
        // Left in place until the next save
        assert_eq!(
            persistence.storage().get("students").unwrap().as_deref(),
            Some("garbage")
        );
    }

    #[test]
    fn test_save_failure_propagates() {
        let mut persistence = Persistence::new(FailingStorage::default(), "students");
        persistence.storage.fail_writes = true;

        let err = persistence.save(&sample()).unwrap_err();
        assert!(err.is_storage_unavailable());
    }

    #[test]
    fn test_load_failure_propagates() {
        let mut storage = FailingStorage::default();
        storage.fail_reads = true;
        let persistence = Persistence::new(storage, "students").with_corrupt_policy(CorruptPolicy::Empty);

        // The policy only covers bad content, not an unreadable medium
        assert!(persistence.load().unwrap_err().is_storage_unavailable());
    }

    #[test]
    fn test_corrupt_policy_serde() {
        assert_eq!(serde_json::to_string(&CorruptPolicy::Empty).unwrap(), "\"empty\"");
        let policy: CorruptPolicy = serde_json::from_str("\"fail\"").unwrap();
        assert_eq!(policy, CorruptPolicy::Fail);
    }
}
