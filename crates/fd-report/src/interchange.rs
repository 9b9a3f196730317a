//! Interchange serialization for external collaborators.
//!
//! The narrative-generation collaborator takes the model as JSON and returns
//! free-text prose; [`strip_emphasis`] cleans stray markup from that prose
//! before it is inserted into a rendered report.

use fd_graph::GraphModel;
use once_cell::sync::Lazy;
use regex::Regex;

/// Serialize the model to pretty JSON.
pub fn to_json(model: &GraphModel) -> serde_json::Result<String> {
    serde_json::to_string_pretty(model)
}

static EMPHASIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[*_]{1,2}([^*_]+)[*_]{1,2}|`([^`]+)`").unwrap());

/// Remove stray emphasis markup (`*`, `_`, backticks), keeping the wrapped
/// text.
pub fn strip_emphasis(text: &str) -> String {
    EMPHASIS_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        })
        .into_owned()
}
