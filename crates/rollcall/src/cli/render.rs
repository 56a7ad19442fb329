//! Text rendering of records, field errors and notices.

use std::fmt::Write as _;

use crate::error::Result;
use crate::record::Student;
use crate::service::{Notice, NoticeKind};
use crate::validation::{FieldCheck, FieldErrors};

use super::OutputFormat;

/// Shown instead of a table when there are no records.
pub const EMPTY_STATE: &str = "No students registered yet.";

const HEADERS: [&str; 5] = ["#", "Name", "Student ID", "Email", "Contact"];

/// Render the record listing in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_records(records: &[Student], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        _ if records.is_empty() => Ok(EMPTY_STATE.to_string()),
        OutputFormat::Plain => Ok(render_plain(records)),
        OutputFormat::Table => Ok(render_table(records)),
    }
}

fn render_plain(records: &[Student]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(position, r)| {
            format!(
                "{position}: {} ({}) {} {}",
                r.name, r.id, r.email, r.contact
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(records: &[Student]) -> String {
    let rows: Vec<[String; 5]> = records
        .iter()
        .enumerate()
        .map(|(position, r)| {
            [
                position.to_string(),
                r.name.clone(),
                r.id.clone(),
                r.email.clone(),
                r.contact.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.truncate(out.trim_end().len());
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render per-field errors, one field per line.
#[must_use]
pub fn render_field_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for (kind, message) in errors.iter() {
        let _ = writeln!(out, "  {:<8} {message}", format!("{kind}:"));
    }
    out.truncate(out.trim_end().len());
    out
}

/// Render a notice with a marker for its kind.
#[must_use]
pub fn render_notice(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => format!("✓ {notice}"),
        NoticeKind::Error => format!("✗ {notice}"),
    }
}

/// Render the result of a single-field check.
#[must_use]
pub fn render_check(check: &FieldCheck) -> String {
    if check.valid {
        "valid".to_string()
    } else {
        format!("invalid: {}", check.message)
    }
}
