//! `%s` slot substitution and jump-marker extraction.

/// Counts the `%s` slots in `template`; `%%` is an escaped percent sign.
pub(super) fn count_slots(template: &str) -> usize {
    let mut count = 0;
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.next() {
                Some('s') => count += 1,
                Some(_) | None => {}
            }
        }
    }
    count
}

/// A rendered line with its marker offsets removed from the text.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Expanded {
    pub(super) text: String,
    pub(super) markers: Vec<usize>,
}

/// Expands one template line.
///
/// With `values` set, `%s` slots are filled positionally and `%%` becomes
/// `%`; surplus values are ignored and missing ones leave the slot empty.
/// Literal lines (`values == None`) keep percent signs untouched. In both
/// modes every occurrence of `marker` is removed and its character offset in
/// the resulting text recorded.
pub(super) fn expand(template: &str, values: Option<&[&str]>, marker: &str) -> Expanded {
    let mut text = String::with_capacity(template.len());
    let mut markers = Vec::new();
    let mut next_value = 0;
    let mut rest = template;
    while let Some(c) = rest.chars().next() {
        if !marker.is_empty() && rest.starts_with(marker) {
            markers.push(text.chars().count());
            rest = rest.get(marker.len()..).unwrap_or_default();
            continue;
        }
        rest = rest.get(c.len_utf8()..).unwrap_or_default();
        let Some(values) = values.filter(|_| c == '%') else {
            text.push(c);
            continue;
        };
        if let Some(stripped) = rest.strip_prefix('s') {
            if let Some(value) = values.get(next_value) {
                text.push_str(value);
            }
            next_value += 1;
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('%') {
            text.push('%');
            rest = stripped;
        } else {
            text.push('%');
        }
    }
    Expanded { text, markers }
}
