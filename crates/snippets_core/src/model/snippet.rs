//! Snippet domain model.
//!
//! # Responsibility
//! - Define the single record kept by the snippet store.
//! - Validate write input before it reaches SQL.
//!
//! # Invariants
//! - `keyword` is unique and non-blank; it is never renamed.
//! - `hidden` defaults to `false`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A named text record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Unique lookup key.
    pub keyword: String,
    /// Stored text body. May be empty.
    pub message: String,
    /// Excludes the snippet from catalog and search listings.
    #[serde(default)]
    pub hidden: bool,
}

impl Snippet {
    /// Creates a visible snippet.
    pub fn new(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            message: message.into(),
            hidden: false,
        }
    }

    /// Creates a snippet that is left out of catalog and search results.
    pub fn hidden(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hidden: true,
            ..Self::new(keyword, message)
        }
    }

    /// Returns whether this snippet shows up in listings.
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    /// Checks write-path invariants.
    pub fn validate(&self) -> Result<(), SnippetValidationError> {
        validate_keyword(&self.keyword)
    }
}

/// Rejects keywords that cannot serve as a lookup key.
pub fn validate_keyword(keyword: &str) -> Result<(), SnippetValidationError> {
    if keyword.trim().is_empty() {
        return Err(SnippetValidationError::EmptyKeyword);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetValidationError {
    EmptyKeyword,
}

impl Display for SnippetValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKeyword => write!(f, "snippet keyword must not be empty"),
        }
    }
}

impl Error for SnippetValidationError {}
