//! Terminal highlighting of the matched term within a line.

use colored::Colorize;

/// Splits `content` around the first case-insensitive occurrence of `term`.
///
/// Returns `(before, matched, after)` with the original casing of the line
/// preserved, or `None` when the term does not occur (or is empty).
pub fn split_first_match<'a>(content: &'a str, term: &str) -> Option<(&'a str, &'a str, &'a str)> {
    if term.is_empty() {
        return None;
    }
    let idx = content.to_lowercase().find(&term.to_lowercase())?;
    // The lowercased copy can differ in byte length from the original, so
    // only use the index when it lands on a valid boundary of the original.
    if !content.is_char_boundary(idx) || content.len() < idx + term.len() {
        return None;
    }
    let (before, rest) = content.split_at(idx);
    if !rest.is_char_boundary(term.len()) {
        return None;
    }
    let (matched, after) = rest.split_at(term.len());
    Some((before, matched, after))
}

/// Wraps the first case-insensitive occurrence of `term` in terminal
/// emphasis. Lines without an occurrence pass through unchanged.
pub fn highlight_term(content: &str, term: &str) -> String {
    match split_first_match(content, term) {
        Some((before, matched, after)) => {
            format!("{}{}{}", before, matched.red().bold(), after)
        }
        None => content.to_string(),
    }
}
