//! Command-line interface for rollcall.
//!
//! This module provides the CLI structure, output rendering and the delete
//! confirmation prompt for the `rollcall` binary.

mod commands;
pub mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::record::Student;
use crate::service::DELETE_CONFIRMATION;

pub use commands::{
    AddCommand, CheckCommand, ConfigCommand, DeleteCommand, EditCommand, FieldArg, ListCommand,
    OutputFormat, StatusCommand,
};

/// rollcall - Keep a validated register of students
///
/// Register, list, edit and delete student records. Records are checked
/// field by field and saved to a local database after every change.
#[derive(Debug, Parser)]
#[command(name = "rollcall")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short = 'C', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use this database file instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new student
    Add(AddCommand),

    /// Edit the student at a position
    Edit(EditCommand),

    /// Delete the student at a position
    Delete(DeleteCommand),

    /// List registered students
    List(ListCommand),

    /// Check a single field value without saving anything
    Check(CheckCommand),

    /// Show storage status
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                2 => crate::logging::Verbosity::Debug,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

/// Ask the user to confirm deleting `record`.
///
/// Only an explicit `y` or `yes` (any case) confirms; anything else, including
/// end of input, declines.
///
/// # Errors
///
/// Returns an error if the prompt cannot be written or the answer cannot be read.
pub fn prompt_confirmation<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    record: &Student,
) -> io::Result<bool> {
    write!(
        output,
        "{DELETE_CONFIRMATION}\n  {} ({})\n[y/N] ",
        record.name, record.id
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn ann() -> Student {
        Student::new("Ann Lee", "101", "a@b.com", "1234567890")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(parse(&["rollcall", "list"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["rollcall", "-v", "list"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["rollcall", "-vv", "list"]).verbosity(), Verbosity::Debug);
        assert_eq!(parse(&["rollcall", "-vvv", "list"]).verbosity(), Verbosity::Trace);
        assert_eq!(parse(&["rollcall", "list", "-q"]).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_parse_add() {
        let cli = parse(&[
            "rollcall", "add", "--name", "Ann Lee", "--id", "101", "--email", "a@b.com",
            "--contact", "1234567890",
        ]);
        let Command::Add(cmd) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(cmd.name, "Ann Lee");
        assert_eq!(cmd.contact, "1234567890");
    }

    #[test]
    fn test_parse_add_missing_fields_default_empty() {
        let cli = parse(&["rollcall", "add", "-n", "Ann Lee"]);
        let Command::Add(cmd) = cli.command else {
            panic!("expected add");
        };
        assert!(cmd.id.is_empty());
        assert!(cmd.email.is_empty());
    }

    #[test]
    fn test_parse_edit() {
        let cli = parse(&["rollcall", "edit", "0", "-p", "9999999999"]);
        let Command::Edit(cmd) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(cmd.position, 0);
        assert_eq!(cmd.contact.as_deref(), Some("9999999999"));
        assert!(cmd.name.is_none());
    }

    #[test]
    fn test_parse_delete_and_global_database() {
        let cli = parse(&["rollcall", "delete", "1", "--yes", "--database", "/tmp/x.db"]);
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/x.db")));
        let Command::Delete(cmd) = cli.command else {
            panic!("expected delete");
        };
        assert_eq!(cmd.position, 1);
        assert!(cmd.yes);
    }

    #[test]
    fn test_parse_list_format() {
        let cli = parse(&["rollcall", "list", "--format", "json"]);
        let Command::List(cmd) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(cmd.format, OutputFormat::Json);

        let Command::List(cmd) = parse(&["rollcall", "list"]).command else {
            panic!("expected list");
        };
        assert_eq!(cmd.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_check() {
        let Command::Check(cmd) = parse(&["rollcall", "check", "email", "a@b"]).command else {
            panic!("expected check");
        };
        assert_eq!(cmd.field, FieldArg::Email);
        assert_eq!(cmd.value, "a@b");
    }

    #[test]
    fn test_parse_rejects_negative_position() {
        assert!(Cli::try_parse_from(["rollcall", "delete", "-1"]).is_err());
    }

    #[test]
    fn test_prompt_confirmation_accepts_yes() {
        for answer in ["y\n", "Y\n", "yes\n", "  YES  \n"] {
            let mut output = Vec::new();
            assert!(prompt_confirmation(answer.as_bytes(), &mut output, &ann()).unwrap());
        }
    }

    #[test]
    fn test_prompt_confirmation_declines_otherwise() {
        for answer in ["n\n", "\n", "", "sure\n"] {
            let mut output = Vec::new();
            assert!(!prompt_confirmation(answer.as_bytes(), &mut output, &ann()).unwrap());
        }
    }

    #[test]
    fn test_prompt_confirmation_shows_question_and_record() {
        let mut output = Vec::new();
        prompt_confirmation("n\n".as_bytes(), &mut output, &ann()).unwrap();
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with(DELETE_CONFIRMATION));
        assert!(shown.contains("Ann Lee (101)"));
    }
}
