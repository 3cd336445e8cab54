//! Command-line surface of the `snippets` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Store and retrieve snippets of text
#[derive(Parser, Debug)]
#[command(name = "snippets", version, about = "Store and retrieve snippets of text")]
pub struct Cli {
    /// SQLite database file holding the snippets table
    #[arg(long, global = true, default_value = "snippets.db")]
    pub db: PathBuf,
    /// Directory for diagnostic log files (relative paths resolve against the
    /// current directory)
    #[arg(long, global = true, default_value = "logs")]
    pub log_dir: PathBuf,
    /// Log verbosity; defaults to `debug` in debug builds and `info` otherwise
    #[arg(long, global = true, value_parser = LOG_LEVELS)]
    pub log_level: Option<String>,
    /// Print results as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Store a snippet, replacing any snippet with the same name
    Put {
        /// Name of the snippet
        name: String,
        /// Snippet text
        snippet: String,
        /// Leave the snippet out of catalog and search listings
        #[arg(long)]
        hidden: bool,
    },
    /// Retrieve a snippet
    Get {
        /// Name of the snippet
        name: String,
    },
    /// Update the text of an existing snippet
    Patch {
        /// Name of the snippet
        name: String,
        /// New snippet text
        snippet: String,
    },
    /// Delete a snippet
    Delete {
        /// Name of the snippet
        name: String,
    },
    /// List the names of all visible snippets
    Catalog,
    /// Find visible snippets whose name contains a string
    Search {
        /// Text to look for in snippet names
        string: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Cmd};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn put_hidden_flag_defaults_to_false() {
        let cli = Cli::try_parse_from(["snippets", "put", "greeting", "hello"]).unwrap();
        assert_eq!(
            cli.cmd,
            Cmd::Put {
                name: "greeting".to_string(),
                snippet: "hello".to_string(),
                hidden: false,
            }
        );

        let cli =
            Cli::try_parse_from(["snippets", "put", "greeting", "hello", "--hidden"]).unwrap();
        assert!(matches!(cli.cmd, Cmd::Put { hidden: true, .. }));
    }

    #[test]
    fn global_options_are_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["snippets", "catalog", "--db", "other.db", "--json"])
            .unwrap();
        assert_eq!(cli.cmd, Cmd::Catalog);
        assert_eq!(cli.db.to_str(), Some("other.db"));
        assert!(cli.json);
    }

    #[test]
    fn missing_argument_is_rejected() {
        assert!(Cli::try_parse_from(["snippets", "patch", "greeting"]).is_err());
        assert!(Cli::try_parse_from(["snippets", "search"]).is_err());
    }

    #[test]
    fn unknown_command_and_log_level_are_rejected() {
        assert!(Cli::try_parse_from(["snippets", "rename", "a", "b"]).is_err());
        assert!(Cli::try_parse_from(["snippets", "--log-level", "loud", "catalog"]).is_err());
    }
}
