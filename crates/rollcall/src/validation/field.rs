//! Per-field format rules.
//!
//! Each [`FieldKind`] has exactly one rule. The same rules serve new and
//! edited records.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::FieldKind;

/// A compiled format rule for one field kind.
#[derive(Debug)]
pub struct FieldRule {
    /// Field this rule applies to.
    pub kind: FieldKind,

    /// Message shown when a non-empty value does not match.
    pub message: &'static str,

    /// The compiled regex.
    regex: Regex,
}

impl FieldRule {
    /// Create a new field rule.
    ///
    /// # Panics
    ///
    /// Panics if the regex pattern is invalid.
    #[must_use]
    pub fn new(kind: FieldKind, message: &'static str, pattern: &str) -> Self {
        Self {
            kind,
            message,
            regex: Regex::new(pattern).expect("Invalid field pattern"),
        }
    }

    /// Check if an already trimmed value matches this rule.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

// Digit classes are spelled `[0-9]`: `\d` is Unicode-aware in `regex`.
static RULES: Lazy<[FieldRule; 4]> = Lazy::new(|| {
    [
        FieldRule::new(
            FieldKind::Name,
            "Name should contain only letters and spaces",
            r"^[A-Za-z\s]+$",
        ),
        FieldRule::new(
            FieldKind::Id,
            "Student ID should contain only numbers",
            r"^[0-9]+$",
        ),
        FieldRule::new(
            FieldKind::Email,
            "Please enter a valid email address",
            r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
        ),
        FieldRule::new(
            FieldKind::Contact,
            "Contact number should be exactly 10 digits",
            r"^[0-9]{10}$",
        ),
    ]
});

/// Get the format rule for a field kind.
#[must_use]
pub fn rule(kind: FieldKind) -> &'static FieldRule {
    let index = match kind {
        FieldKind::Name => 0,
        FieldKind::Id => 1,
        FieldKind::Email => 2,
        FieldKind::Contact => 3,
    };
    &RULES[index]
}

/// Outcome of checking a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    /// Whether the value is acceptable.
    pub valid: bool,
    /// Error text; empty when `valid`.
    pub message: String,
}

impl FieldCheck {
    fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Validate a raw value for the given field kind.
///
/// Leading and trailing whitespace is ignored. An empty value reports
/// `"<label> is required"`; otherwise the kind's format rule applies.
#[must_use]
pub fn validate(kind: FieldKind, raw: &str) -> FieldCheck {
    let value = raw.trim();
    if value.is_empty() {
        return FieldCheck::fail(format!("{} is required", kind.label()));
    }

    let rule = rule(kind);
    if rule.matches(value) {
        FieldCheck::pass()
    } else {
        FieldCheck::fail(rule.message)
    }
}
