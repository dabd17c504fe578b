//! Structured-text document assembled during extraction.

use std::collections::HashSet;

/// Role tag on a rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRole {
    Heading,
    Paragraph,
    ListItem,
    CodeBlock,
    Blockquote,
    /// Trailing "Citations:" metadata section, preserved verbatim.
    Citations,
}

/// One citation-stripped, whitespace-normalized text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub role: BlockRole,
    pub text: String,
}

/// Ordered sequence of accepted blocks.
///
/// Invariants maintained by the extractor: blocks preserve source order
/// (except that list items are emitted first), no two blocks share a
/// case-insensitive fingerprint, and every block is non-empty after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredDocument {
    pub blocks: Vec<Block>,
}

impl StructuredDocument {
    pub fn push(&mut self, role: BlockRole, text: impl Into<String>) {
        self.blocks.push(Block {
            role,
            text: text.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Render blocks to the intermediate text handed to the markup
    /// translator.
    ///
    /// Consecutive list items stay on adjacent lines with a blank line after
    /// the run; every other block is followed by a blank line. Code blocks
    /// keep their content verbatim inside a bare fence.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for (i, block) in self.blocks.iter().enumerate() {
            let next_is_item = self
                .blocks
                .get(i + 1)
                .map(|b| b.role == BlockRole::ListItem)
                .unwrap_or(false);

            match block.role {
                BlockRole::ListItem => {
                    out.push_str("• ");
                    out.push_str(&block.text);
                    out.push('\n');
                    if !next_is_item {
                        out.push('\n');
                    }
                }
                BlockRole::Heading => {
                    out.push('*');
                    out.push_str(&block.text);
                    out.push_str("*\n\n");
                }
                BlockRole::CodeBlock => {
                    out.push_str("```\n");
                    out.push_str(&block.text);
                    if !block.text.ends_with('\n') {
                        out.push('\n');
                    }
                    out.push_str("```\n\n");
                }
                BlockRole::Blockquote => {
                    out.push_str("> ");
                    out.push_str(&block.text);
                    out.push_str("\n\n");
                }
                BlockRole::Paragraph | BlockRole::Citations => {
                    out.push_str(&block.text);
                    out.push_str("\n\n");
                }
            }
        }

        out.trim_end().to_string()
    }
}

/// Lower-cased text fingerprints for one extraction call.
///
/// Backs the dedup invariant: a paragraph restating an earlier list item or
/// heading is suppressed. The substring check is best-effort: coincidental
/// textual overlap produces a false positive.
#[derive(Debug, Default)]
pub struct SeenSet {
    index: HashSet<String>,
    fingerprints: Vec<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn fingerprint(text: &str) -> String {
        text.trim().to_lowercase()
    }

    pub fn insert(&mut self, text: &str) {
        let fp = Self::fingerprint(text);
        if self.index.insert(fp.clone()) {
            self.fingerprints.push(fp);
        }
    }

    /// Exact fingerprint membership.
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(&Self::fingerprint(text))
    }

    /// Whether `text` contains, or is contained by, any prior fingerprint.
    /// Catches partial restatements in either direction.
    pub fn overlaps(&self, text: &str) -> bool {
        let fp = Self::fingerprint(text);
        self.fingerprints
            .iter()
            .any(|seen| seen.contains(&fp) || fp.contains(seen.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list_run_then_paragraph() {
        let mut doc = StructuredDocument::default();
        doc.push(BlockRole::ListItem, "one");
        doc.push(BlockRole::ListItem, "two");
        doc.push(BlockRole::Paragraph, "after");
        assert_eq!(doc.render(), "• one\n• two\n\nafter");
    }

    #[test]
    fn test_render_heading_and_quote() {
        let mut doc = StructuredDocument::default();
        doc.push(BlockRole::Heading, "Title");
        doc.push(BlockRole::Blockquote, "quoted");
        assert_eq!(doc.render(), "*Title*\n\n> quoted");
    }

    #[test]
    fn test_render_code_block_verbatim() {
        let mut doc = StructuredDocument::default();
        doc.push(BlockRole::CodeBlock, "let x = [1];");
        assert_eq!(doc.render(), "```\nlet x = [1];\n```");
    }

    #[test]
    fn test_seen_set_exact() {
        let mut seen = SeenSet::new();
        seen.insert("Hello World");
        assert!(seen.contains("hello world"));
        assert!(seen.contains("  HELLO WORLD  "));
        assert!(!seen.contains("hello"));
    }

    #[test]
    fn test_seen_set_overlaps_both_directions() {
        let mut seen = SeenSet::new();
        seen.insert("Porsche 911: sports car");
        assert!(seen.overlaps("Porsche 911: sports car, widely loved."));
        assert!(seen.overlaps("911: sports car"));
        assert!(!seen.overlaps("BMW M3: performance sedan"));
    }
}
