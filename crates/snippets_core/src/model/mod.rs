//! Domain model for stored text snippets.
//!
//! # Invariants
//! - Every snippet is identified by its unique, non-empty `keyword`.
//! - Visibility only affects listing (catalog/search), never direct lookup.

pub mod snippet;
