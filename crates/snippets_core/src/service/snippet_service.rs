//! Snippet use-case service.
//!
//! # Responsibility
//! - Provide the six snippet store entry points used by the CLI.
//! - Emit one audit log line per operation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/transaction contracts.
//! - Log lines carry keyword lengths and counts only; message text is never
//!   written to the log.

use crate::model::snippet::Snippet;
use crate::repo::snippet_repo::{RepoResult, SnippetRepository};
use log::{info, warn};

/// Use-case service wrapper for snippet operations.
pub struct SnippetService<R: SnippetRepository> {
    repo: R,
}

impl<R: SnippetRepository> SnippetService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a snippet, replacing message and hidden flag of an existing
    /// keyword.
    pub fn put(
        &self,
        keyword: impl Into<String>,
        message: impl Into<String>,
        hidden: bool,
    ) -> RepoResult<Snippet> {
        let snippet = Snippet {
            keyword: keyword.into(),
            message: message.into(),
            hidden,
        };
        let stored = log_failure("snippet_put", self.repo.put(&snippet))?;
        info!(
            "event=snippet_put module=service status=ok keyword_len={} message_len={} hidden={}",
            stored.keyword.len(),
            stored.message.len(),
            stored.hidden
        );
        Ok(stored)
    }

    /// Retrieves one message by keyword.
    pub fn get(&self, keyword: &str) -> RepoResult<Option<String>> {
        let message = log_failure("snippet_get", self.repo.get(keyword))?;
        info!(
            "event=snippet_get module=service status={} keyword_len={}",
            found_status(message.is_some()),
            keyword.len()
        );
        Ok(message)
    }

    /// Replaces the message of an existing snippet.
    pub fn patch(&self, keyword: &str, message: &str) -> RepoResult<Option<Snippet>> {
        let updated = log_failure("snippet_patch", self.repo.patch(keyword, message))?;
        info!(
            "event=snippet_patch module=service status={} keyword_len={} message_len={}",
            found_status(updated.is_some()),
            keyword.len(),
            message.len()
        );
        Ok(updated)
    }

    /// Deletes one snippet by keyword.
    pub fn delete(&self, keyword: &str) -> RepoResult<Option<String>> {
        let deleted = log_failure("snippet_delete", self.repo.delete(keyword))?;
        info!(
            "event=snippet_delete module=service status={} keyword_len={}",
            found_status(deleted.is_some()),
            keyword.len()
        );
        Ok(deleted)
    }

    /// Lists visible keywords in ascending order.
    pub fn catalog(&self) -> RepoResult<Vec<String>> {
        let keywords = log_failure("snippet_catalog", self.repo.catalog())?;
        info!(
            "event=snippet_catalog module=service status=ok count={}",
            keywords.len()
        );
        Ok(keywords)
    }

    /// Lists visible snippets whose keyword contains `needle`.
    pub fn search(&self, needle: &str) -> RepoResult<Vec<Snippet>> {
        let hits = log_failure("snippet_search", self.repo.search(needle))?;
        info!(
            "event=snippet_search module=service status=ok needle_len={} count={}",
            needle.len(),
            hits.len()
        );
        Ok(hits)
    }
}

fn found_status(found: bool) -> &'static str {
    if found {
        "ok"
    } else {
        "not_found"
    }
}

fn log_failure<T>(event: &str, result: RepoResult<T>) -> RepoResult<T> {
    if let Err(err) = &result {
        warn!("event={event} module=service status=error error={err}");
    }
    result
}
