//! Registry use-cases for a presentation layer.
//!
//! [`Registry`] is what a front end talks to: it validates raw form input,
//! drives the [`RecordStore`], and turns recoverable failures into
//! [`SubmitOutcome`] values carrying the user-facing text. Storage failures and
//! stale positions are returned as errors.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{Student, StudentInput};
use crate::storage::KeyValueStore;
use crate::store::RecordStore;
use crate::validation::{check_record, FieldErrors};

/// Notice shown after a record is registered.
pub const REGISTERED_MESSAGE: &str = "Student registered successfully!";
/// Notice shown after a record is updated.
pub const UPDATED_MESSAGE: &str = "Student record updated successfully!";
/// Notice shown after a record is deleted.
pub const DELETED_MESSAGE: &str = "Student record deleted successfully!";
/// Collection-level error for a student ID already in use.
pub const DUPLICATE_ID_MESSAGE: &str = "Student ID already exists. Please use a different ID.";
/// Question to put to the user before deleting a record.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this student record?";

/// Kind of notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// The action succeeded.
    Success,
    /// The action was refused.
    Error,
}

/// A transient notification for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Banner style.
    pub kind: NoticeKind,
    /// Literal message text.
    pub message: String,
}

impl Notice {
    /// A success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of submitting a new or edited record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was committed and persisted.
    Saved {
        /// Position of the record in the collection.
        position: usize,
        /// Success notice.
        notice: Notice,
    },
    /// One or more fields are invalid; nothing changed.
    Invalid(FieldErrors),
    /// Refused for a collection-level reason (duplicate ID); nothing changed.
    Rejected(Notice),
}

impl SubmitOutcome {
    /// True if the record was saved.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }

    /// Per-field errors, if the submission was invalid.
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    /// The notice to show, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Saved { notice, .. } | Self::Rejected(notice) => Some(notice),
            Self::Invalid(_) => None,
        }
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed and the collection persisted.
    Deleted {
        /// The removed record.
        record: Student,
        /// Success notice.
        notice: Notice,
    },
    /// The user declined; nothing changed.
    Cancelled,
}

/// Front-end entry point over a [`RecordStore`].
#[derive(Debug)]
pub struct Registry<S> {
    store: RecordStore<S>,
}

impl<S: KeyValueStore> Registry<S> {
    /// Wrap an opened store.
    #[must_use]
    pub fn new(store: RecordStore<S>) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    #[must_use]
    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    /// Validate and register a new record.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the record could not be persisted.
    pub fn submit_new_record(&mut self, input: &StudentInput) -> Result<SubmitOutcome> {
        let student = match check_record(input) {
            Ok(student) => student,
            Err(errors) => {
                debug!("New record rejected: {}", errors);
                return Ok(SubmitOutcome::Invalid(errors));
            }
        };

        match self.store.add(student) {
            Ok(position) => {
                info!("Registered student at position {}", position);
                Ok(SubmitOutcome::Saved {
                    position,
                    notice: Notice::success(REGISTERED_MESSAGE),
                })
            }
            Err(Error::DuplicateId { id }) => {
                debug!("New record rejected: duplicate ID {}", id);
                Ok(SubmitOutcome::Rejected(Notice::error(DUPLICATE_ID_MESSAGE)))
            }
            Err(err) => Err(err),
        }
    }

    /// Validate and apply an edit to the record at `position`.
    ///
    /// The record being edited may keep its own ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position` no longer references a
    /// record, or a storage error if the change could not be persisted.
    pub fn submit_edited_record(
        &mut self,
        position: usize,
        input: &StudentInput,
    ) -> Result<SubmitOutcome> {
        let student = match check_record(input) {
            Ok(student) => student,
            Err(errors) => {
                debug!("Edit of position {} rejected: {}", position, errors);
                return Ok(SubmitOutcome::Invalid(errors));
            }
        };

        match self.store.update_at(position, student) {
            Ok(_) => {
                info!("Updated student at position {}", position);
                Ok(SubmitOutcome::Saved {
                    position,
                    notice: Notice::success(UPDATED_MESSAGE),
                })
            }
            Err(Error::DuplicateId { id }) => {
                debug!("Edit of position {} rejected: duplicate ID {}", position, id);
                Ok(SubmitOutcome::Rejected(Notice::error(DUPLICATE_ID_MESSAGE)))
            }
            Err(err) => Err(err),
        }
    }

    /// Delete the record at `position` once `confirm` agrees.
    ///
    /// `confirm` receives the record about to be removed and must return
    /// `true` only on explicit user confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position` no longer references a
    /// record, or a storage error if the change could not be persisted.
    pub fn request_delete<F>(&mut self, position: usize, confirm: F) -> Result<DeleteOutcome>
    where
        F: FnOnce(&Student) -> bool,
    {
        let Some(record) = self.store.get(position) else {
            return Err(Error::InvalidPosition {
                position,
                len: self.store.len(),
            });
        };

        if !confirm(record) {
            debug!("Delete of position {} cancelled", position);
            return Ok(DeleteOutcome::Cancelled);
        }

        let record = self.store.remove_at(position)?;
        info!("Deleted student at position {}", position);
        Ok(DeleteOutcome::Deleted {
            record,
            notice: Notice::success(DELETED_MESSAGE),
        })
    }

    /// Reload from storage and return the current records.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored collection cannot be loaded.
    pub fn list_records(&mut self) -> Result<&[Student]> {
        self.store.reload()?;
        Ok(self.store.all())
    }

    /// Input prefilled from the record at `position`, for an edit form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if there is no record at `position`.
    pub fn record_at(&self, position: usize) -> Result<StudentInput> {
        self.store
            .get(position)
            .map(StudentInput::from)
            .ok_or(Error::InvalidPosition {
                position,
                len: self.store.len(),
            })
    }
}
