//! Runtime settings resolved from command-line options.

use crate::cli::Cli;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Fully resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub json: bool,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to resolve current directory")?;
        Ok(Self::resolve(cli, &cwd))
    }

    fn resolve(cli: &Cli, cwd: &Path) -> Self {
        let log_level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| snippets_core::default_log_level().to_string());

        Self {
            db_path: cli.db.clone(),
            log_dir: absolutize(&cli.log_dir, cwd),
            log_level,
            json: cli.json,
        }
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
