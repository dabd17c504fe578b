//! Content extraction tests against realistic answer-page HTML.
//!
//! Snapshots mimic the structure of the pages the pipeline targets: a
//! response wrapper with surrounding chrome, a prose body, citation UI
//! interleaved with content, and list items restated as paragraphs.

use std::collections::HashSet;

use answerclip::{extract_blocks, BlockRole};

use proptest::prelude::*;

const ANSWER_SNAPSHOT: &str = r#"
<div class="response-container">
  <nav><p>Home / Search / Question thread history</p></nav>
  <div class="prose">
    <h2>Popular sports cars</h2>
    <p>Several models stand out among enthusiasts [1][2].</p>
    <ul>
      <li><strong>Porsche 911</strong>: rear-engine icon</li>
      <li><strong>BMW M3</strong>: performance sedan [3]</li>
    </ul>
    <p>Porsche 911: rear-engine icon</p>
    <blockquote>Driving pleasure is subjective.</blockquote>
    <pre>let hp = 473;</pre>
    <div class="citation-list"><p>[1] carweekly.example</p></div>
  </div>
</div>
"#;

// ============================================================================
// Block collection and ordering
// ============================================================================

#[test]
fn test_list_items_emitted_before_other_blocks() {
    let doc = extract_blocks(ANSWER_SNAPSHOT);
    let roles: Vec<BlockRole> = doc.blocks.iter().map(|b| b.role).collect();

    let first_non_item = roles
        .iter()
        .position(|r| *r != BlockRole::ListItem)
        .unwrap();
    assert!(
        roles[first_non_item..].iter().all(|r| *r != BlockRole::ListItem),
        "list items must all precede other blocks: {roles:?}"
    );
}

#[test]
fn test_non_list_blocks_preserve_document_order() {
    let doc = extract_blocks(ANSWER_SNAPSHOT);
    let non_items: Vec<&str> = doc
        .blocks
        .iter()
        .filter(|b| b.role != BlockRole::ListItem)
        .map(|b| b.text.as_str())
        .collect();

    assert_eq!(
        non_items,
        vec![
            "Popular sports cars",
            "Several models stand out among enthusiasts.",
            "Driving pleasure is subjective.",
            "let hp = 473;",
        ]
    );
}

#[test]
fn test_bold_runs_wrapped_in_list_items() {
    let doc = extract_blocks(ANSWER_SNAPSHOT);
    let items: Vec<&str> = doc
        .blocks
        .iter()
        .filter(|b| b.role == BlockRole::ListItem)
        .map(|b| b.text.as_str())
        .collect();

    assert_eq!(
        items,
        vec![
            "*Porsche 911*: rear-engine icon",
            "*BMW M3*: performance sedan",
        ]
    );
}

// ============================================================================
// Deduplication
// ============================================================================

#[test]
fn test_restated_list_item_paragraph_suppressed() {
    // "Porsche 911: rear-engine icon" appears both as a list item and as a
    // paragraph; only the list item survives.
    let doc = extract_blocks(ANSWER_SNAPSHOT);
    let paragraphs: Vec<&str> = doc
        .blocks
        .iter()
        .filter(|b| b.role == BlockRole::Paragraph)
        .map(|b| b.text.as_str())
        .collect();
    assert_eq!(paragraphs, vec!["Several models stand out among enthusiasts."]);
}

#[test]
fn test_no_two_blocks_share_a_fingerprint() {
    let doc = extract_blocks(ANSWER_SNAPSHOT);
    let mut fingerprints: Vec<String> = doc
        .blocks
        .iter()
        .map(|b| b.text.trim().to_lowercase())
        .collect();
    let total = fingerprints.len();
    fingerprints.sort();
    fingerprints.dedup();
    assert_eq!(fingerprints.len(), total, "duplicate fingerprints in document");
}

#[test]
fn test_superset_paragraph_suppressed() {
    let doc = extract_blocks(
        "<div><ul><li>Porsche 911: sports car</li></ul>\
         <p>Porsche 911: sports car, widely loved.</p></div>",
    );
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].role, BlockRole::ListItem);
}

#[test]
fn test_subset_paragraph_suppressed() {
    let doc = extract_blocks(
        "<div><p>The Porsche 911 remains the benchmark sports car.</p>\
         <p>benchmark sports car</p></div>",
    );
    assert_eq!(doc.blocks.len(), 1);
}

#[test]
fn test_repeated_heading_suppressed() {
    let doc = extract_blocks("<div><h2>Summary</h2><h2>Summary</h2></div>");
    assert_eq!(doc.blocks.len(), 1);
}

// ============================================================================
// Citation handling
// ============================================================================

#[test]
fn test_inline_citations_stripped_from_blocks() {
    let doc = extract_blocks(ANSWER_SNAPSHOT);
    for block in &doc.blocks {
        assert!(
            !block.text.contains("[1]") && !block.text.contains("[2]"),
            "citation residue in {:?}",
            block.text
        );
    }
}

#[test]
fn test_citation_list_section_removed() {
    let doc = extract_blocks(ANSWER_SNAPSHOT);
    assert!(doc.blocks.iter().all(|b| !b.text.contains("carweekly")));
}

#[test]
fn test_cite_anchors_removed() {
    let doc = extract_blocks(
        r##"<div><p>The claim holds<a href="#cite-4">4</a> under test.</p></div>"##,
    );
    assert_eq!(doc.blocks[0].text, "The claim holds under test.");
}

#[test]
fn test_citations_label_block_kept_verbatim_and_last() {
    let doc = extract_blocks(
        "<div><p>Citations: [1] https://a.example [2] https://b.example</p>\
         <p>Body paragraph comes first.</p></div>",
    );
    let last = doc.blocks.last().unwrap();
    assert_eq!(last.role, BlockRole::Citations);
    assert_eq!(last.text, "Citations: [1] https://a.example [2] https://b.example");
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_short_noise_paragraphs_dropped() {
    let doc = extract_blocks("<div><p>Ok</p><p>1.</p><p>This one is long enough.</p></div>");
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].text, "This one is long enough.");
}

#[test]
fn test_no_structure_falls_back_to_flat_text() {
    let doc = extract_blocks("<span>Loose inline answer text [1] with no blocks.</span>");
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].role, BlockRole::Paragraph);
    assert_eq!(doc.blocks[0].text, "Loose inline answer text with no blocks.");
}

#[test]
fn test_every_block_nonempty_after_trim() {
    let doc = extract_blocks(ANSWER_SNAPSHOT);
    assert!(!doc.blocks.is_empty());
    for block in &doc.blocks {
        assert!(!block.text.trim().is_empty());
    }
}

#[test]
fn test_code_block_content_is_verbatim() {
    let doc = extract_blocks("<div><pre>fn main() {\n    let refs = [1, 2];\n}</pre></div>");
    let code = doc
        .blocks
        .iter()
        .find(|b| b.role == BlockRole::CodeBlock)
        .unwrap();
    // No citation stripping, no whitespace normalization inside pre.
    assert_eq!(code.text, "fn main() {\n    let refs = [1, 2];\n}");
}

#[test]
fn test_links_preserved_in_paragraphs() {
    let doc = extract_blocks(
        r#"<div><p>Read the <a href="https://doc.example/guide">full guide</a> online.</p></div>"#,
    );
    assert_eq!(
        doc.blocks[0].text,
        "Read the <https://doc.example/guide|full guide> online."
    );
}

#[test]
fn test_italic_and_code_preserved_in_paragraphs() {
    let doc = extract_blocks(
        "<div><p>Use <code>cargo build</code> with <em>release</em> mode enabled.</p></div>",
    );
    assert_eq!(
        doc.blocks[0].text,
        "Use `cargo build` with _release_ mode enabled."
    );
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_no_duplicate_blocks_from_repeated_paragraphs(
        sentences in proptest::collection::vec("[a-z]{3,8}( [a-z]{3,8}){2,5}", 1..5)
    ) {
        let mut html = String::from("<div class=\"prose\">");
        for sentence in &sentences {
            // Every sentence appears twice; the restatement must be dropped.
            html.push_str(&format!("<p>{sentence}.</p><p>{sentence}.</p>"));
        }
        html.push_str("</div>");

        let doc = extract_blocks(&html);
        prop_assert!(!doc.blocks.is_empty());

        let mut seen = HashSet::new();
        for block in &doc.blocks {
            prop_assert!(
                seen.insert(block.text.trim().to_lowercase()),
                "duplicate block: {}",
                block.text
            );
            prop_assert!(sentences.contains(&block.text.trim_end_matches('.').to_string()));
        }
    }
}
