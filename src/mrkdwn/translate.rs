//! Structured text → Slack mrkdwn.
//!
//! An ordered pipeline of pure string transforms. Order matters: later rules
//! must never re-match text produced by earlier rules, which is what makes
//! the whole stage idempotent on already-translated input.
//!
//! Fenced code blocks are split out first and re-emitted untouched (bare
//! fence, language tag dropped); every other rule runs on prose segments
//! only. Inline code spans, converted links, and bare URLs are masked while
//! the punctuation and emphasis rules run; `https://example.com` must not
//! gain a space after its colon.

use regex_lite::Captures;

use crate::mrkdwn::patterns::{
    AFTER_PUNCT_LETTER_RE, BARE_URL_RE, BEFORE_PUNCT_RE, BLANK_RUN_RE, BOLD_PUNCT_RE,
    BULLET_RE, DOUBLE_EMPH_RE, FENCE_RE, HEADING_RE, INLINE_CODE_RE, ITALIC_PUNCT_RE,
    LINK_RE, MRKDWN_LINK_RE, NUM_BULLET_RE,
};

/// Sentinel delimiting masked spans while punctuation rules run. An object
/// replacement character never appears in chat text.
const MASK: char = '\u{FFFC}';

enum Segment {
    Prose(String),
    Fence(String),
}

/// Translate text to Slack's mrkdwn dialect.
///
/// Total: any input produces some output. Applying it to already-translated
/// text is a no-op for emphasis markers, links, and bullets.
pub fn translate(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    for segment in split_fences(text) {
        match segment {
            Segment::Fence(body) => {
                out.push_str("```\n");
                let body = body.strip_suffix('\n').unwrap_or(&body);
                out.push_str(body);
                out.push_str("\n```");
            }
            Segment::Prose(prose) => out.push_str(&translate_prose(&prose)),
        }
    }

    let bounded = BLANK_RUN_RE.replace_all(&out, "\n\n");
    bounded.trim().to_string()
}

/// Split input on fenced code blocks, keeping fence interiors opaque.
fn split_fences(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in FENCE_RE.captures_iter(text) {
        let whole = caps.get(0).expect("match has group 0");
        if whole.start() > last {
            segments.push(Segment::Prose(text[last..whole.start()].to_string()));
        }
        segments.push(Segment::Fence(caps[1].to_string()));
        last = whole.end();
    }

    if last < text.len() {
        segments.push(Segment::Prose(text[last..].to_string()));
    }

    segments
}

fn translate_prose(text: &str) -> String {
    // 1. Heading markers become bold lines.
    let step = HEADING_RE.replace_all(text, "*$1*").into_owned();

    // 2. Double-marker bold becomes single-marker bold.
    let step = DOUBLE_EMPH_RE.replace_all(&step, "*$1*").into_owned();

    // 3. Markdown links become mrkdwn links.
    let step = LINK_RE.replace_all(&step, "<$2|$1>").into_owned();

    // 4. Mask code spans, converted links, and bare URLs so the remaining
    //    rules never touch their interior punctuation or underscores.
    let mut masked_spans = Vec::new();
    let step = mask(&INLINE_CODE_RE, &step, &mut masked_spans);
    let step = mask(&MRKDWN_LINK_RE, &step, &mut masked_spans);
    let step = mask(&BARE_URL_RE, &step, &mut masked_spans);

    // 5. Punctuation spacing.
    let step = BEFORE_PUNCT_RE.replace_all(&step, "$1").into_owned();
    let step = AFTER_PUNCT_LETTER_RE
        .replace_all(&step, "$1 $2")
        .into_owned();

    // 6. List lines become bullets, flattened to a single marker.
    let step = BULLET_RE.replace_all(&step, "\u{2022} ").into_owned();
    let step = NUM_BULLET_RE.replace_all(&step, "\u{2022} ").into_owned();

    // 7. Emphasis markers that trapped punctuation get reordered.
    let step = BOLD_PUNCT_RE.replace_all(&step, "$1*$2").into_owned();
    let step = ITALIC_PUNCT_RE.replace_all(&step, "${1}_$2").into_owned();

    unmask(&step, &masked_spans)
}

fn mask(re: &regex_lite::Regex, text: &str, store: &mut Vec<String>) -> String {
    re.replace_all(text, |caps: &Captures| {
        store.push(caps[0].to_string());
        format!("{MASK}{}{MASK}", store.len() - 1)
    })
    .into_owned()
}

fn unmask(text: &str, store: &[String]) -> String {
    let mut out = text.to_string();
    for (i, span) in store.iter().enumerate() {
        out = out.replace(&format!("{MASK}{i}{MASK}"), span);
    }
    out
}
