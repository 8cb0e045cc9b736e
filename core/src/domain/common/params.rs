//! Boundary validation for untrusted query-string input.
//!
//! Every parser degrades malformed input to a safe default instead of
//! erroring; nothing downstream re-validates.

use crate::domain::common::MAX_PAGE_SIZE;

/// Maximum accepted length (in characters) of a free-text search term.
pub const MAX_SEARCH_LENGTH: usize = 100;

/// Hard upper bound on the page number a caller may request. Any real page
/// at this bound is already far past the data, so clamping keeps the
/// empty-page behavior while bounding the offset arithmetic downstream.
pub const MAX_PAGE: u64 = 100_000;

/// Parses a free-text search term: trimmed, truncated to
/// [`MAX_SEARCH_LENGTH`] characters. Absent or blank input yields the empty
/// string, meaning "no filter".
pub fn parse_search_param(value: Option<&str>) -> String {
    match value {
        Some(raw) => raw.trim().chars().take(MAX_SEARCH_LENGTH).collect(),
        None => String::new(),
    }
}

/// Parses a positive integer, falling back to `default` on absent, malformed
/// or non-positive input.
pub fn parse_int_param(value: Option<&str>, default: u64) -> u64 {
    value
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|parsed| *parsed > 0)
        .unwrap_or(default)
}

/// Parses a page number, clamped into `[1, MAX_PAGE]`. Anything invalid
/// becomes page 1.
pub fn parse_page_param(value: Option<&str>) -> u64 {
    parse_int_param(value, 1).min(MAX_PAGE)
}

/// Parses a page size, clamped into `[1, max_allowed]`.
pub fn parse_page_size_param(value: Option<&str>, default: u64, max_allowed: u64) -> u64 {
    let max_allowed = max_allowed.min(MAX_PAGE_SIZE);
    parse_int_param(value, default).clamp(1, max_allowed)
}

/// Parses an optional positive id (e.g. `teamId`). Absent, malformed or
/// non-positive input yields `None`, meaning "no filter" (never zero).
pub fn parse_optional_id_param(value: Option<&str>) -> Option<i32> {
    value
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .filter(|parsed| *parsed > 0)
}
