//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the command-line layer decoupled from storage details.

pub mod snippet_service;
