//! fd-catalog: descriptor catalog for flowdoc.
//!
//! Maps component-type and parameter-name tokens to human-readable phrases.
//! Lookups are case-insensitive, pure, and total: an unknown type falls back
//! to a generic phrase, while an unknown parameter name falls back to a
//! humanized rendering of the name itself. The two fallbacks are distinct on
//! purpose.

use std::collections::HashMap;

use once_cell::sync::Lazy;

mod tables;

static TYPE_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| tables::TYPE_PHRASES.iter().copied().collect());

static PARAM_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| tables::PARAM_NAMES.iter().copied().collect());

/// Human-readable role phrase for a component type.
///
/// ```
/// assert_eq!(
///     fd_catalog::describe_type("JOIN"),
///     "Combines records from multiple inputs by matching keys."
/// );
/// ```
pub fn describe_type(ctype: &str) -> &'static str {
    TYPE_TABLE
        .get(ctype.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(tables::FALLBACK_TYPE_PHRASE)
}

/// Friendly display name for a parameter.
///
/// Known names resolve through the synonym table; anything else is
/// humanized: separators become spaces and each word is title-cased.
pub fn friendly_param_name(name: &str) -> String {
    match PARAM_TABLE.get(name.to_ascii_lowercase().as_str()) {
        Some(friendly) => (*friendly).to_string(),
        None => humanize(name),
    }
}

fn humanize(name: &str) -> String {
    name.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
