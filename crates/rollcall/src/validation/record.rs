//! Whole-record validation.

use serde::Serialize;

use super::field::validate;
use crate::record::{FieldKind, Student, StudentInput};

/// Per-field error messages for a rejected record, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(Vec<(FieldKind, String)>);

impl FieldErrors {
    /// Record an error for a field.
    pub fn push(&mut self, kind: FieldKind, message: impl Into<String>) {
        self.0.push((kind, message.into()));
    }

    /// Get the error message for a field, if it failed.
    #[must_use]
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, message)| message.as_str())
    }

    /// Iterate over failing fields and their messages.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, &str)> {
        self.0.iter().map(|(kind, message)| (*kind, message.as_str()))
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (kind, message)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{kind}: {message}")?;
        }
        Ok(())
    }
}

/// Validate every field of a candidate record.
///
/// All four fields are checked even after a failure, so each invalid field
/// reports its own message. On success the trimmed record is returned.
///
/// # Errors
///
/// Returns the messages of every field that failed.
pub fn check_record(candidate: &StudentInput) -> Result<Student, FieldErrors> {
    let mut errors = FieldErrors::default();
    for kind in FieldKind::ALL {
        let check = validate(kind, candidate.field(kind));
        if !check.valid {
            errors.push(kind, check.message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Student::new(
        candidate.name.trim(),
        candidate.id.trim(),
        candidate.email.trim(),
        candidate.contact.trim(),
    ))
}

/// True iff every field of the candidate passes its rule.
#[must_use]
pub fn validate_record(candidate: &StudentInput) -> bool {
    check_record(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record_is_trimmed() {
        let input = StudentInput::new("  Ann Lee ", " 101", "a@b.com  ", "\t1234567890\n");
        let student = check_record(&input).unwrap();
        assert_eq!(student, Student::new("Ann Lee", "101", "a@b.com", "1234567890"));
        assert!(validate_record(&input));
    }

    #[test]
    fn test_every_field_is_reported() {
        let input = StudentInput::new("A1", "x", "nope", "123");
        let errors = check_record(&input).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get(FieldKind::Name),
            Some("Name should contain only letters and spaces")
        );
        assert_eq!(
            errors.get(FieldKind::Id),
            Some("Student ID should contain only numbers")
        );
        assert_eq!(
            errors.get(FieldKind::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.get(FieldKind::Contact),
            Some("Contact number should be exactly 10 digits")
        );
    }

    #[test]
    fn test_failure_in_first_field_does_not_hide_later_ones() {
        let input = StudentInput::new("", "101", "a@b.com", "");
        let errors = check_record(&input).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![FieldKind::Name, FieldKind::Contact]);
    }

    #[test]
    fn test_single_bad_field() {
        let input = StudentInput::new("A1", "102", "a@b.com", "1234567890");
        let errors = check_record(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(FieldKind::Id).is_none());
        assert!(!validate_record(&input));
    }

    #[test]
    fn test_field_errors_display() {
        let mut errors = FieldErrors::default();
        errors.push(FieldKind::Name, "Student name is required");
        errors.push(FieldKind::Email, "Email is required");
        assert_eq!(
            errors.to_string(),
            "name: Student name is required; email: Email is required"
        );
    }

    #[test]
    fn test_empty_field_errors() {
        let errors = FieldErrors::default();
        assert!(errors.is_empty());
        assert_eq!(errors.to_string(), "");
    }
}
