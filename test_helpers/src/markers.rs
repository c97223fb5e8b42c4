//! Parsing of `line:column` jump-marker lists written in step text.

use anyhow::{Context, Result};

/// Parses `"0:3, 2:8"` into `[(0, 3), (2, 8)]`.
///
/// A blank list, or the word `none`, yields no markers.
///
/// # Errors
///
/// Returns an error when an entry is not two unsigned integers joined by
/// a colon.
pub fn parse_markers(value: &str) -> Result<Vec<(usize, usize)>> {
    let list = crate::text::unquote(value).trim();
    if list.is_empty() || list.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }
    list.split(',')
        .map(|entry| {
            let (line, column) = entry
                .trim()
                .split_once(':')
                .with_context(|| format!("marker '{entry}' is not line:column"))?;
            let row = line
                .trim()
                .parse()
                .with_context(|| format!("marker '{entry}' has a bad line"))?;
            let col = column
                .trim()
                .parse()
                .with_context(|| format!("marker '{entry}' has a bad column"))?;
            Ok((row, col))
        })
        .collect()
}
