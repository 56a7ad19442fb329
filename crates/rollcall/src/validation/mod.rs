//! Validation of student record input.
//!
//! - **Field rules**: one format rule per [`FieldKind`](crate::record::FieldKind),
//!   applied to the trimmed value, with a required check first.
//!
//! - **Record validation**: runs every field rule without stopping at the first
//!   failure, so all invalid fields can be reported together.
//!
//! # Example
//!
//! ```
//! use rollcall::record::{FieldKind, StudentInput};
//! use rollcall::validation::{check_record, validate};
//!
//! let check = validate(FieldKind::Contact, "12345");
//! assert!(!check.valid);
//! assert_eq!(check.message, "Contact number should be exactly 10 digits");
//!
//! let input = StudentInput::new("Ann Lee", "101", "a@b.com", "1234567890");
//! assert!(check_record(&input).is_ok());
//! ```

mod field;
mod record;

pub use field::{rule, validate, FieldCheck, FieldRule};
pub use record::{check_record, validate_record, FieldErrors};
