//! Title normalization for equality comparison across sources.

use std::sync::LazyLock;

use regex::Regex;

static NON_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]+").expect("valid regex"));
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Canonicalize free text for equality comparison.
///
/// Lowercases, drops every character that is not a lowercase ASCII letter,
/// digit, or whitespace, collapses whitespace runs to single spaces, and
/// trims. Titles differing only in punctuation, casing, or whitespace runs
/// normalize identically, and the function is idempotent. Empty input
/// normalizes to the empty string.
#[must_use]
pub fn normalize_title(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = NON_KEY.replace_all(&lowered, "");
    SPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}
