//! Core record types for rollcall.
//!
//! This module defines the student record committed to the store, the raw
//! form input it is built from, and the field kinds shared by both.

use serde::{Deserialize, Serialize};

/// One of the four fields every student record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Student name.
    Name,
    /// Student identifier.
    Id,
    /// Email address.
    Email,
    /// Contact phone number.
    Contact,
}

impl FieldKind {
    /// All field kinds, in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Id, Self::Email, Self::Contact];

    /// Display label used in user-facing messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Student name",
            Self::Id => "Student ID",
            Self::Email => "Email",
            Self::Contact => "Contact number",
        }
    }

    /// Serialized field name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id => "id",
            Self::Email => "email",
            Self::Contact => "contact",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A committed student record.
///
/// Records reaching the store have passed validation, so every field is
/// trimmed and in the expected format. The serialized form has exactly
/// these four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Student {
    /// Letters and spaces only.
    pub name: String,
    /// Digits only; unique within a store.
    pub id: String,
    /// `local@domain.tld` shaped address.
    pub email: String,
    /// Exactly ten digits.
    pub contact: String,
}

impl Student {
    /// Create a record from already validated values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }

    /// Get the value of a field.
    #[must_use]
    pub fn field(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Id => &self.id,
            FieldKind::Email => &self.email,
            FieldKind::Contact => &self.contact,
        }
    }
}

/// Raw, unvalidated form input for a student record.
///
/// Values are kept exactly as entered; trimming happens during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentInput {
    /// Entered name.
    pub name: String,
    /// Entered student ID.
    pub id: String,
    /// Entered email address.
    pub email: String,
    /// Entered contact number.
    pub contact: String,
}

impl StudentInput {
    /// Create input from the four entered values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }

    /// Get the raw value entered for a field.
    #[must_use]
    pub fn field(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Id => &self.id,
            FieldKind::Email => &self.email,
            FieldKind::Contact => &self.contact,
        }
    }

    /// Replace the raw value of a field.
    pub fn set_field(&mut self, kind: FieldKind, value: impl Into<String>) {
        let slot = match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::Id => &mut self.id,
            FieldKind::Email => &mut self.email,
            FieldKind::Contact => &mut self.contact,
        };
        *slot = value.into();
    }
}

impl From<&Student> for StudentInput {
    fn from(student: &Student) -> Self {
        Self::new(
            student.name.clone(),
            student.id.clone(),
            student.email.clone(),
            student.contact.clone(),
        )
    }
}
