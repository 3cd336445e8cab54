//! Core storage logic for the snippet tool.
//! This crate owns the snippet table and every rule about how it changes.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::snippet::{Snippet, SnippetValidationError};
pub use repo::snippet_repo::{RepoError, RepoResult, SnippetRepository, SqliteSnippetRepository};
pub use service::snippet_service::SnippetService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
