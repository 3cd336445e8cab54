//! Maps one parsed command onto one snippet store call.

use crate::cli::Cmd;
use snippets_core::{RepoResult, Snippet, SnippetRepository, SnippetService};

/// Result of one command, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Stored(Snippet),
    Retrieved { keyword: String, message: String },
    Updated(Snippet),
    Deleted(String),
    Catalog(Vec<String>),
    Matches(Vec<Snippet>),
    /// get/patch/delete targeted a keyword that is not stored.
    NotFound { keyword: String },
}

pub fn dispatch<R: SnippetRepository>(
    service: &SnippetService<R>,
    cmd: Cmd,
) -> RepoResult<Outcome> {
    let outcome = match cmd {
        Cmd::Put {
            name,
            snippet,
            hidden,
        } => Outcome::Stored(service.put(name, snippet, hidden)?),
        Cmd::Get { name } => match service.get(&name)? {
            Some(message) => Outcome::Retrieved {
                keyword: name,
                message,
            },
            None => Outcome::NotFound { keyword: name },
        },
        Cmd::Patch { name, snippet } => match service.patch(&name, &snippet)? {
            Some(updated) => Outcome::Updated(updated),
            None => Outcome::NotFound { keyword: name },
        },
        Cmd::Delete { name } => match service.delete(&name)? {
            Some(deleted) => Outcome::Deleted(deleted),
            None => Outcome::NotFound { keyword: name },
        },
        Cmd::Catalog => Outcome::Catalog(service.catalog()?),
        Cmd::Search { string } => Outcome::Matches(service.search(&string)?),
    };
    Ok(outcome)
}
