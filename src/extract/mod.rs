//! DOM → structured plain text.
//!
//! The extraction stage turns an HTML snapshot of an answer into an ordered
//! [`StructuredDocument`]: citation artifacts removed, whitespace
//! canonicalized, and duplicated content collapsed. Leaf-first:
//!
//! - [`citations`]: pattern-based citation artifact removal from strings
//! - [`normalize`]: whitespace/punctuation-spacing canonicalization
//! - [`document`]: the structured-text document and dedup fingerprint set
//! - [`inline`]: inline formatting runs and citation-node detection
//! - [`extractor`]: the DOM walk that assembles everything

pub mod citations;
pub mod document;
pub mod extractor;
pub mod inline;
pub mod normalize;

pub use citations::{strip_citations, strip_citations_with, TrailingNumbers};
pub use document::{Block, BlockRole, SeenSet, StructuredDocument};
pub use extractor::extract_blocks;
pub use inline::{inline_runs, is_citation_node, InlineRun};
pub use normalize::normalize_text;
