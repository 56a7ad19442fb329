//! `rollcall` - CLI for the student register
//!
//! This binary is the presentation layer: it collects form input from the
//! command line, hands it to the registry, and prints notices, field errors
//! and listings.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;

use rollcall::cli::render::{render_check, render_field_errors, render_notice, render_records};
use rollcall::cli::{
    prompt_confirmation, AddCommand, CheckCommand, Cli, Command, ConfigCommand, DeleteCommand,
    EditCommand, ListCommand,
};
use rollcall::validation::validate;
use rollcall::{init_logging, open_registry, Config, DeleteOutcome, FieldKind, SubmitOutcome};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let mut config = Config::load_from(cli.config.clone())?;
    if let Some(path) = cli.database.clone() {
        config.storage.database_path = Some(path);
    }

    // Execute the command
    match cli.command {
        Command::Add(cmd) => handle_add(&config, &cmd),
        Command::Edit(cmd) => handle_edit(&config, &cmd),
        Command::Delete(cmd) => handle_delete(&config, &cmd),
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Check(cmd) => Ok(handle_check(&cmd)),
        Command::Status(cmd) => handle_status(&config, cmd.json),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Attach a "not saved" hint to storage failures of mutating commands.
fn not_saved(err: rollcall::Error) -> anyhow::Error {
    if err.is_storage_unavailable() {
        anyhow::Error::new(err).context("The change was not saved")
    } else {
        err.into()
    }
}

fn report_outcome(outcome: &SubmitOutcome) -> ExitCode {
    match outcome {
        SubmitOutcome::Saved { notice, .. } => {
            println!("{}", render_notice(notice));
            ExitCode::SUCCESS
        }
        SubmitOutcome::Invalid(errors) => {
            eprintln!("Please correct the following fields:");
            eprintln!("{}", render_field_errors(errors));
            ExitCode::FAILURE
        }
        SubmitOutcome::Rejected(notice) => {
            eprintln!("{}", render_notice(notice));
            ExitCode::FAILURE
        }
    }
}

fn handle_add(config: &Config, cmd: &AddCommand) -> anyhow::Result<ExitCode> {
    let mut registry = open_registry(config)?;
    let outcome = registry
        .submit_new_record(&cmd.to_input())
        .map_err(not_saved)?;
    Ok(report_outcome(&outcome))
}

fn handle_edit(config: &Config, cmd: &EditCommand) -> anyhow::Result<ExitCode> {
    let mut registry = open_registry(config)?;
    let mut input = registry.record_at(cmd.position)?;
    cmd.apply(&mut input);

    let outcome = registry
        .submit_edited_record(cmd.position, &input)
        .map_err(not_saved)?;
    Ok(report_outcome(&outcome))
}

fn handle_delete(config: &Config, cmd: &DeleteCommand) -> anyhow::Result<ExitCode> {
    let mut registry = open_registry(config)?;
    let yes = cmd.yes;
    let outcome = registry
        .request_delete(cmd.position, |record| {
            yes || prompt_confirmation(io::stdin().lock(), io::stderr(), record).unwrap_or_else(
                |err| {
                    warn!("Could not read confirmation: {}", err);
                    false
                },
            )
        })
        .map_err(not_saved)?;

    match outcome {
        DeleteOutcome::Deleted { notice, .. } => println!("{}", render_notice(&notice)),
        DeleteOutcome::Cancelled => println!("Nothing deleted."),
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<ExitCode> {
    let mut registry = open_registry(config)?;
    let records = registry.list_records()?;
    println!("{}", render_records(records, cmd.format)?);
    Ok(ExitCode::SUCCESS)
}

fn handle_check(cmd: &CheckCommand) -> ExitCode {
    let check = validate(FieldKind::from(cmd.field), &cmd.value);
    println!("{}", render_check(&check));
    if check.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn handle_status(config: &Config, json: bool) -> anyhow::Result<ExitCode> {
    let registry = open_registry(config)?;
    let persistence = registry.store().persistence();
    let storage = persistence.storage();
    let stats = storage.stats()?;
    let last_saved = storage.updated_at(persistence.key())?;

    if json {
        let status = serde_json::json!({
            "database_path": storage.path(),
            "key": persistence.key(),
            "records": registry.store().len(),
            "last_saved": last_saved.map(|t| t.to_rfc3339()),
            "db_size_bytes": stats.db_size_bytes,
            "on_corrupt": persistence.corrupt_policy(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("rollcall status");
        println!("---------------");
        println!("Database:      {}", storage.path().display());
        println!("Key:           {}", persistence.key());
        println!("Records:       {}", registry.store().len());
        match last_saved {
            Some(t) => println!("Last saved:    {}", t.format("%Y-%m-%d %H:%M:%S UTC")),
            None => println!("Last saved:    never"),
        }
        println!("Size:          {} bytes", stats.db_size_bytes);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<ExitCode> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
                println!("  Key:                {}", config.storage.key);
                println!("  On corrupt data:    {:?}", config.storage.on_corrupt);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => {
                    println!("Configuration error: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
