//! `snippets` command-line entry point.
//!
//! # Responsibility
//! - Parse one invocation, open the store once, run exactly one command.
//! - Keep stdout for results; diagnostics go to the log file or stderr.

mod cli;
mod dispatch;
mod render;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use snippets_core::{init_logging, open_db, SnippetService, SqliteSnippetRepository};

use crate::cli::Cli;
use crate::settings::Settings;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::from_cli(&cli)?;

    // Commands still run without a log file.
    if let Err(err) = init_logging(&settings.log_level, &settings.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let conn = open_db(&settings.db_path).with_context(|| {
        format!(
            "failed to open snippet store `{}`",
            settings.db_path.display()
        )
    })?;
    let repo = SqliteSnippetRepository::try_new(&conn).context("snippet store is not usable")?;
    let service = SnippetService::new(repo);

    info!(
        "event=command_start module=cli status=start command={}",
        command_name(&cli.cmd)
    );
    let outcome = dispatch::dispatch(&service, cli.cmd).context("snippet command failed")?;

    let output = if settings.json {
        render::render_json(&outcome).context("failed to encode JSON output")?
    } else {
        render::render_text(&outcome)
    };
    println!("{output}");
    Ok(())
}

fn command_name(cmd: &cli::Cmd) -> &'static str {
    match cmd {
        cli::Cmd::Put { .. } => "put",
        cli::Cmd::Get { .. } => "get",
        cli::Cmd::Patch { .. } => "patch",
        cli::Cmd::Delete { .. } => "delete",
        cli::Cmd::Catalog => "catalog",
        cli::Cmd::Search { .. } => "search",
    }
}
