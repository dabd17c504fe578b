//! Cached regex patterns for mrkdwn translation.
//!
//! Uses LazyLock to compile patterns once on first use. The translation
//! rules are order-dependent; the ordering lives in [`super::translate`],
//! the patterns live here.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Markdown heading line: leading `#` markers followed by horizontal
/// whitespace. Horizontal only, so an empty heading can't swallow the next
/// line.
pub static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+(.*)$").unwrap());

/// Markdown bold (`**text**`), bridged to mrkdwn single-marker bold.
pub static DOUBLE_EMPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// Markdown link `[label](url)`.
pub static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap());

/// Whitespace before terminal punctuation.
pub static BEFORE_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,;:!?])").unwrap());

/// Terminal punctuation glued to a following letter.
pub static AFTER_PUNCT_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.,;:!?])([A-Za-z])").unwrap());

/// Fenced code block with optional language tag.
pub static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[A-Za-z0-9_+.-]*\n(.*?)```").unwrap());

/// Inline code span.
pub static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`\n]+`").unwrap());

/// Already-converted mrkdwn link `<url|label>`.
pub static MRKDWN_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>|\s]+\|[^<>]*>").unwrap());

/// Bare URL run, as appears in a verbatim citation section.
pub static BARE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Bulleted list line at any nesting depth (`-`, `*`, `+` markers).
/// Horizontal whitespace only; `\s` would swallow the blank line before
/// the list.
pub static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").unwrap());

/// Numbered list line at any nesting depth.
pub static NUM_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+").unwrap());

/// Bold marker that ended up inside trailing punctuation (`*word.*`).
pub static BOLD_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\*\w+)([.,;:!?])\*").unwrap());

/// Italic marker that ended up inside trailing punctuation (`_word._`).
pub static ITALIC_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(_\w+)([.,;:!?])_").unwrap());

/// Three or more consecutive newlines.
pub static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
