//! Content extraction: DOM walk, citation-node removal, dedup.
//!
//! The walk mirrors how the answer pages are actually structured rather than
//! arbitrary HTML: a response wrapper contains a prose body whose block
//! elements carry the content, with citation UI interleaved and list content
//! frequently restated as narrative paragraphs right after the list.

use markup5ever_rcdom::Handle;
use tracing::debug;

use crate::dom::{self, element_role, NodeRole};
use crate::extract::citations::strip_citations;
use crate::extract::document::{BlockRole, SeenSet, StructuredDocument};
use crate::extract::inline::{inline_runs, is_citation_node};
use crate::extract::normalize::normalize_text;

/// Paragraphs shorter than this after normalization are treated as noise.
const MIN_SIGNIFICANT_LEN: usize = 5;

/// Label opening the trailing metadata section some answers carry.
const CITATIONS_LABEL: &str = "Citations:";

/// Class names marking citation sections and markers.
const CITATION_CLASSES: &[&str] = &["citation", "citation-list", "references", "footnotes"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Heading,
    PseudoHeading,
    Paragraph,
    List,
    Blockquote,
    Code,
}

struct CollectedBlock {
    handle: Handle,
    kind: BlockKind,
}

/// Extract a [`StructuredDocument`] from an HTML snapshot.
///
/// Locates the content root, removes citation UI from the owned parse tree,
/// collects block elements in document order, and assembles deduplicated
/// blocks, lists first so restated paragraphs are caught. Falls back to the
/// root's flat text as a single block when no block structure exists.
pub fn extract_blocks(html: &str) -> StructuredDocument {
    let dom = dom::parse_snapshot(html);
    let root = dom::body(&dom).unwrap_or_else(|| dom.document.clone());
    let root = locate_content_root(&root);

    dom::remove_matching(&root, &is_citation_ui);

    let collected = collect_blocks(&root);
    if collected.is_empty() {
        debug!("no block elements found, falling back to flat text");
        return flat_fallback(&root);
    }

    let mut doc = StructuredDocument::default();
    let mut seen = SeenSet::new();
    let mut citations_section: Option<String> = None;

    // List items enter the seen set before anything else so the later
    // paragraph pass can suppress restatements.
    for block in collected.iter().filter(|b| b.kind == BlockKind::List) {
        for item in dom::find_elements(&block.handle, &["li"]) {
            let text = normalize_text(&strip_citations(&dom::text_content(&item)));
            if text.is_empty() || seen.contains(&text) {
                continue;
            }
            let formatted = wrap_inline_runs(&item, &text);
            doc.push(BlockRole::ListItem, formatted);
            seen.insert(&text);
        }
    }

    for block in collected.iter().filter(|b| b.kind != BlockKind::List) {
        let raw = dom::text_content(&block.handle);
        let raw_trimmed = raw.trim();

        if block.kind != BlockKind::Code && raw_trimmed.starts_with(CITATIONS_LABEL) {
            // Explanatory metadata, not inline noise: kept verbatim at the end.
            citations_section = Some(raw_trimmed.to_string());
            continue;
        }

        match block.kind {
            BlockKind::Code => {
                if raw_trimmed.is_empty() {
                    continue;
                }
                let fingerprint = normalize_text(&raw);
                if seen.contains(&fingerprint) {
                    continue;
                }
                doc.push(BlockRole::CodeBlock, raw_trimmed.to_string());
                seen.insert(&fingerprint);
            }
            BlockKind::Heading => {
                let text = normalize_text(&strip_citations(&raw));
                if text.is_empty() || seen.contains(&text) {
                    continue;
                }
                doc.push(BlockRole::Heading, text.clone());
                seen.insert(&text);
            }
            BlockKind::Blockquote => {
                let text = normalize_text(&strip_citations(&raw));
                if text.is_empty() || seen.contains(&text) {
                    continue;
                }
                doc.push(BlockRole::Blockquote, text.clone());
                seen.insert(&text);
            }
            BlockKind::Paragraph | BlockKind::PseudoHeading => {
                let text = normalize_text(&strip_citations(&raw));
                if text.chars().count() < MIN_SIGNIFICANT_LEN {
                    continue;
                }
                if seen.overlaps(&text) {
                    continue;
                }
                if block.kind == BlockKind::PseudoHeading {
                    doc.push(BlockRole::Heading, text.clone());
                } else {
                    let formatted = wrap_inline_runs(&block.handle, &text);
                    doc.push(BlockRole::Paragraph, formatted);
                }
                seen.insert(&text);
            }
            BlockKind::List => unreachable!("lists are processed in the first pass"),
        }
    }

    if let Some(section) = citations_section {
        if !seen.contains(&section) {
            doc.push(BlockRole::Citations, section);
        }
    }

    if doc.is_empty() {
        debug!("no blocks survived dedup, falling back to flat text");
        return flat_fallback(&root);
    }

    doc
}

/// Probe the prioritized content-root selectors; first match wins, the
/// element itself is the fallback.
fn locate_content_root(root: &Handle) -> Handle {
    let probes: [(&str, fn(&Handle) -> bool); 5] = [
        ("prose", |h| dom::has_class(h, "prose")),
        ("answer-body", |h| {
            dom::get_attribute(h, "data-testid").as_deref() == Some("answer-body")
        }),
        ("article-role", |h| {
            dom::get_attribute(h, "role").as_deref() == Some("article")
        }),
        ("markdown-content", |h| {
            dom::get_attribute(h, "id").as_deref() == Some("markdown-content-0")
        }),
        ("perplexity-response", |h| {
            dom::has_class(h, "perplexity-response")
        }),
    ];

    for (name, probe) in probes {
        if let Some(found) = dom::find_first(root, &probe) {
            debug!(probe = name, "content root located");
            return found;
        }
    }

    root.clone()
}

/// Citation UI elements removed from the tree before text extraction.
fn is_citation_ui(handle: &Handle) -> bool {
    CITATION_CLASSES
        .iter()
        .any(|class| dom::has_class(handle, class))
        || dom::get_attribute(handle, "data-citation-list").is_some()
        || is_citation_node(handle)
}

/// Collect block-level elements in document order. Standalone bold elements
/// directly inside a generic container are treated as pseudo-headings.
fn collect_blocks(root: &Handle) -> Vec<CollectedBlock> {
    let mut out = Vec::new();
    for child in root.children.borrow().iter() {
        collect_recursive(child, dom::element_name(root), &mut out);
    }
    out
}

fn collect_recursive(handle: &Handle, parent: Option<&str>, out: &mut Vec<CollectedBlock>) {
    let Some(name) = dom::element_name(handle) else {
        return;
    };

    let kind = match element_role(name) {
        NodeRole::Heading(_) => Some(BlockKind::Heading),
        NodeRole::Paragraph => Some(BlockKind::Paragraph),
        NodeRole::ListContainer => Some(BlockKind::List),
        NodeRole::Blockquote => Some(BlockKind::Blockquote),
        NodeRole::CodeBlock => Some(BlockKind::Code),
        NodeRole::InlineBold if parent == Some("div") => Some(BlockKind::PseudoHeading),
        _ => None,
    };

    if let Some(kind) = kind {
        out.push(CollectedBlock {
            handle: handle.clone(),
            kind,
        });
        // Preformatted content is opaque; everything else may nest blocks
        // (a list restated inside a blockquote, a sublist inside an item).
        if kind == BlockKind::Code || kind == BlockKind::PseudoHeading {
            return;
        }
    }

    let name = dom::element_name(handle);
    for child in handle.children.borrow().iter() {
        collect_recursive(child, name, out);
    }
}

/// Splice the block's inline formatting runs into its already-normalized
/// text. All occurrences of a run, not just the first; runs whose marked
/// form is already present are left alone.
fn wrap_inline_runs(handle: &Handle, text: &str) -> String {
    let mut out = text.to_string();

    for run in inline_runs(handle) {
        if out.contains(&run.marked) {
            continue;
        }
        out = out.replace(&run.plain, &run.marked);
    }

    out
}

fn flat_fallback(root: &Handle) -> StructuredDocument {
    let mut doc = StructuredDocument::default();
    let text = normalize_text(&strip_citations(&dom::text_content(root)));
    if !text.is_empty() {
        doc.push(BlockRole::Paragraph, text);
    }
    doc
}
