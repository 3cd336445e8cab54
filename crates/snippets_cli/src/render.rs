//! Human-readable and JSON rendering of command outcomes.

use crate::dispatch::Outcome;
use serde_json::json;

pub const NOT_FOUND_TEXT: &str = "404: Snippet Not Found";
const NO_RECORDS_TEXT: &str = "No records";
const NO_MATCHES_TEXT: &str = "No matches";

/// Renders an outcome as plain text lines for stdout.
pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Stored(snippet) => {
            let mut line = format!("Stored '{}' as '{}'", snippet.message, snippet.keyword);
            if snippet.hidden {
                line.push_str(" (hidden)");
            }
            line
        }
        Outcome::Retrieved { message, .. } => format!("Retrieved snippet: '{message}'"),
        Outcome::Updated(snippet) => format!(
            "Updated snippet '{}' to '{}'",
            snippet.keyword, snippet.message
        ),
        Outcome::Deleted(keyword) => format!("Deleted snippet '{keyword}'"),
        Outcome::Catalog(keywords) if keywords.is_empty() => NO_RECORDS_TEXT.to_string(),
        Outcome::Catalog(keywords) => keywords.join("\n"),
        Outcome::Matches(hits) if hits.is_empty() => NO_MATCHES_TEXT.to_string(),
        Outcome::Matches(hits) => hits
            .iter()
            .map(|hit| format!("{}: {}", hit.keyword, hit.message))
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::NotFound { .. } => NOT_FOUND_TEXT.to_string(),
    }
}

/// Renders an outcome as one JSON document.
pub fn render_json(outcome: &Outcome) -> serde_json::Result<String> {
    let payload = match outcome {
        Outcome::Stored(snippet) | Outcome::Updated(snippet) => {
            json!({ "status": "ok", "snippet": snippet })
        }
        Outcome::Retrieved { keyword, message } => {
            json!({ "status": "ok", "keyword": keyword, "message": message })
        }
        Outcome::Deleted(keyword) => json!({ "status": "ok", "keyword": keyword }),
        Outcome::Catalog(keywords) => json!({ "status": "ok", "keywords": keywords }),
        Outcome::Matches(hits) => json!({ "status": "ok", "snippets": hits }),
        Outcome::NotFound { keyword } => json!({ "status": "not_found", "keyword": keyword }),
    };
    serde_json::to_string(&payload)
}
