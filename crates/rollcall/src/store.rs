//! The in-memory record collection.
//!
//! [`RecordStore`] owns the ordered list of students for a session and keeps
//! it in step with durable storage: every mutation is saved before it is
//! applied in memory, so a failed save leaves the store exactly as it was.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::persistence::Persistence;
use crate::record::Student;
use crate::storage::KeyValueStore;

/// Ordered, persisted collection of student records with unique IDs.
///
/// The store checks ID uniqueness and positions only. Field formats are the
/// caller's responsibility (see [`crate::validation`]).
#[derive(Debug)]
pub struct RecordStore<S> {
    records: Vec<Student>,
    persistence: Persistence<S>,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Open a store, loading the current collection from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored collection cannot be loaded.
    pub fn open(persistence: Persistence<S>) -> Result<Self> {
        let records = persistence.load()?;
        info!(
            "Opened record store '{}' with {} records",
            persistence.key(),
            records.len()
        );
        Ok(Self {
            records,
            persistence,
        })
    }

    /// The current records in order.
    #[must_use]
    pub fn all(&self) -> &[Student] {
        &self.records
    }

    /// The record at `position`, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Student> {
        self.records.get(position)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the persistence adapter.
    #[must_use]
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    #[cfg(test)]
    pub(crate) fn persistence_mut(&mut self) -> &mut Persistence<S> {
        &mut self.persistence
    }

    /// Re-read the collection from storage, picking up external changes.
    ///
    /// On error the in-memory collection is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored collection cannot be loaded.
    pub fn reload(&mut self) -> Result<()> {
        self.records = self.persistence.load()?;
        debug!("Reloaded {} records", self.records.len());
        Ok(())
    }

    /// Append a record. Returns its position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if a record with the same ID exists, or
    /// a storage error if the new collection cannot be saved.
    pub fn add(&mut self, record: Student) -> Result<usize> {
        if self.position_of(&record.id).is_some() {
            return Err(Error::DuplicateId { id: record.id });
        }

        let mut candidate = self.records.clone();
        candidate.push(record);
        self.commit(candidate)?;

        let position = self.records.len() - 1;
        debug!("Added record at position {}", position);
        Ok(position)
    }

    /// Replace the record at `position`. Returns the replaced record.
    ///
    /// The record currently at `position` may keep its ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position` is out of range,
    /// [`Error::DuplicateId`] if another position holds the same ID, or a
    /// storage error if the new collection cannot be saved.
    pub fn update_at(&mut self, position: usize, record: Student) -> Result<Student> {
        self.check_position(position)?;
        if matches!(self.position_of(&record.id), Some(other) if other != position) {
            return Err(Error::DuplicateId { id: record.id });
        }

        let mut candidate = self.records.clone();
        let previous = std::mem::replace(&mut candidate[position], record);
        self.commit(candidate)?;

        debug!("Updated record at position {}", position);
        Ok(previous)
    }

    /// Remove the record at `position`, shifting later records down.
    /// Returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position` is out of range, or a
    /// storage error if the new collection cannot be saved.
    pub fn remove_at(&mut self, position: usize) -> Result<Student> {
        self.check_position(position)?;

        let mut candidate = self.records.clone();
        let removed = candidate.remove(position);
        self.commit(candidate)?;

        debug!("Removed record at position {}", position);
        Ok(removed)
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.records.len() {
            Ok(())
        } else {
            Err(Error::InvalidPosition {
                position,
                len: self.records.len(),
            })
        }
    }

    /// Save `candidate`, then make it the current collection.
    fn commit(&mut self, candidate: Vec<Student>) -> Result<()> {
        self.persistence.save(&candidate)?;
        self.records = candidate;
        Ok(())
    }
}
