//! Whitespace and punctuation-spacing canonicalization.
//!
//! Runs after citation stripping, which leaves orphaned double spaces and
//! dangling punctuation behind.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Runs of two or more whitespace characters.
static WS_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Whitespace immediately before terminal punctuation.
static BEFORE_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,;:!?])").unwrap());

/// Punctuation followed directly by a non-whitespace character.
static AFTER_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.,;:!?])(\S)").unwrap());

/// Canonicalize whitespace and punctuation spacing.
///
/// Collapses whitespace runs to a single space, removes whitespace before
/// `. , ; : ! ?`, ensures exactly one space after each of those marks when a
/// non-whitespace character follows, and trims the ends.
///
/// Block text only. URLs and inline code must not pass through here, since
/// `https://` and `log()` would gain spaces. The markup translator protects
/// those spans separately.
pub fn normalize_text(text: &str) -> String {
    let collapsed = WS_RUN_RE.replace_all(text, " ");
    let tightened = BEFORE_PUNCT_RE.replace_all(&collapsed, "$1");
    let spaced = AFTER_PUNCT_RE.replace_all(&tightened, "$1 $2");
    spaced.trim().to_string()
}
