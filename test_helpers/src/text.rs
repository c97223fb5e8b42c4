//! Shared text normalization helpers for behavioural test suites.

use anyhow::{Context, Result, ensure};

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Normalizes a scalar placeholder by trimming and unquoting one outer layer.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).trim().to_owned()
}

/// Splits a comma-separated list, unquoting each entry.
///
/// An empty or blank input yields an empty list.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    let inner = unquote(value);
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(normalize_scalar).collect()
}

/// Parses a node table of the form `Kind=a,b; Other=c`.
///
/// Kinds keep their order of appearance. A kind with nothing after `=`
/// yields an empty value list.
///
/// # Errors
///
/// Returns an error when an entry lacks `=` or names an empty kind.
pub fn parse_node_table(value: &str) -> Result<Vec<(String, Vec<String>)>> {
    unquote(value)
        .split(';')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            let (kind, values) = entry
                .split_once('=')
                .with_context(|| format!("node entry '{entry}' lacks '='"))?;
            let name = kind.trim();
            ensure!(!name.is_empty(), "node entry '{entry}' has no kind");
            Ok((name.to_owned(), split_list(values)))
        })
        .collect()
}

/// Expands the `\n` and `\t` escapes used to write multi-line step text.
#[must_use]
pub fn unescape(value: &str) -> String {
    value.replace("\\n", "\n").replace("\\t", "\t")
}
