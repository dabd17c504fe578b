//! Inline formatting runs inside a block element.
//!
//! Walks a block's descendants collecting the bold, italic, code, and
//! non-citation link runs in document order, each paired with its mrkdwn
//! form. The extractor splices these into the block's normalized text, so
//! the plain side of each run goes through the same citation stripping and
//! normalization as the block text it must match.

use markup5ever_rcdom::{Handle, NodeData};

use crate::dom;
use crate::extract::citations::strip_citations;
use crate::extract::normalize::normalize_text;

/// Whether an element is citation UI rather than content: citation-classed
/// nodes, `data-citation` markers, and `#cite` anchors.
pub fn is_citation_node(handle: &Handle) -> bool {
    if dom::has_class(handle, "citation") || dom::get_attribute(handle, "data-citation").is_some()
    {
        return true;
    }

    if dom::element_name(handle) == Some("a") {
        if let Some(href) = dom::get_attribute(handle, "href") {
            return href.starts_with("#cite");
        }
    }

    false
}

/// One formatted run under a block element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRun {
    /// The run's text as it appears in the block's normalized text.
    pub plain: String,
    /// The run in mrkdwn form.
    pub marked: String,
}

/// Collect the inline formatting runs under a block element, in document
/// order.
///
/// `strong`/`b` become `*bold*`, `em`/`i` become `_italic_`, `code` keeps
/// backticks around its verbatim content, and non-citation links become
/// `<href|label>`. Citation nodes and `#` anchors contribute nothing.
/// Formatting elements are flattened to their text; other containers are
/// recursed into.
pub fn inline_runs(handle: &Handle) -> Vec<InlineRun> {
    let mut runs = Vec::new();
    collect_runs(handle, &mut runs);
    runs
}

fn collect_runs(handle: &Handle, runs: &mut Vec<InlineRun>) {
    for child in handle.children.borrow().iter() {
        if !matches!(child.data, NodeData::Element { .. }) || is_citation_node(child) {
            continue;
        }

        match dom::element_name(child) {
            Some("strong") | Some("b") => push_emphasis(child, '*', runs),
            Some("em") | Some("i") => push_emphasis(child, '_', runs),
            Some("code") => {
                let raw = dom::text_content(child);
                let plain = normalize_text(&strip_citations(&raw));
                if !plain.is_empty() {
                    let marked = format!("`{}`", raw.trim());
                    runs.push(InlineRun { plain, marked });
                }
            }
            Some("a") => {
                let Some(href) = dom::get_attribute(child, "href") else {
                    continue;
                };
                if href.starts_with('#') {
                    continue;
                }
                let label = normalize_text(&strip_citations(&dom::text_content(child)));
                if label.is_empty() {
                    continue;
                }
                let marked = format!("<{href}|{label}>");
                runs.push(InlineRun {
                    plain: label,
                    marked,
                });
            }
            _ => collect_runs(child, runs),
        }
    }
}

fn push_emphasis(handle: &Handle, marker: char, runs: &mut Vec<InlineRun>) {
    let run = normalize_text(&strip_citations(&dom::text_content(handle)));
    if run.is_empty() {
        return;
    }
    let marked = format!("{marker}{run}{marker}");
    runs.push(InlineRun { plain: run, marked });
}
