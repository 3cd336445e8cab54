//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the snippet store data access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce `Snippet::validate()` before persistence.
//! - A missing keyword is an ordinary `None` result, never an error.

pub mod snippet_repo;
