//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::record::{FieldKind, StudentInput};

/// Register command arguments.
///
/// Omitted fields are submitted empty and reported as required.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Student name (letters and spaces)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Student ID (digits only, unique)
    #[arg(short, long, default_value = "")]
    pub id: String,

    /// Email address
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Contact number (10 digits)
    #[arg(short = 'p', long, default_value = "")]
    pub contact: String,
}

impl AddCommand {
    /// The submitted form input.
    #[must_use]
    pub fn to_input(&self) -> StudentInput {
        StudentInput::new(
            self.name.clone(),
            self.id.clone(),
            self.email.clone(),
            self.contact.clone(),
        )
    }
}

/// Edit command arguments.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Position of the record, as shown by `list`
    pub position: usize,

    /// New student name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New student ID
    #[arg(short, long)]
    pub id: Option<String>,

    /// New email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// New contact number
    #[arg(short = 'p', long)]
    pub contact: Option<String>,
}

impl EditCommand {
    /// Overwrite the prefilled input with the fields given on the command line.
    pub fn apply(&self, input: &mut StudentInput) {
        let changes = [
            (FieldKind::Name, &self.name),
            (FieldKind::Id, &self.id),
            (FieldKind::Email, &self.email),
            (FieldKind::Contact, &self.contact),
        ];
        for (kind, value) in changes {
            if let Some(value) = value {
                input.set_field(kind, value.clone());
            }
        }
    }
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Position of the record, as shown by `list`
    pub position: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Check command arguments.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Field to check
    #[arg(value_enum)]
    pub field: FieldArg,

    /// Value to check
    pub value: String,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Field argument for single-field checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    /// Student name
    Name,
    /// Student ID
    Id,
    /// Email address
    Email,
    /// Contact number
    Contact,
}

impl From<FieldArg> for FieldKind {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Name => Self::Name,
            FieldArg::Id => Self::Id,
            FieldArg::Email => Self::Email,
            FieldArg::Contact => Self::Contact,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}
