//! # answerclip
//!
//! Extracts AI-assistant answer content from a rendered-DOM HTML snapshot,
//! strips citation markup, collapses duplicated content, and reformats the
//! result into Slack's mrkdwn dialect.
//!
//! ## Pipeline
//!
//! Two stages compose: **extraction** (DOM snapshot → structured plain text,
//! citations removed, duplicates collapsed) feeds **translation** (structured
//! text → mrkdwn). Raw text selections skip extraction and run through the
//! translator alone.
//!
//! ```
//! use answerclip::{convert_answer_html, format_selection};
//!
//! let html = r#"<div class="prose">
//!   <h2>Results</h2>
//!   <p>The approach works well [1][2].</p>
//! </div>"#;
//! assert_eq!(convert_answer_html(html), "*Results*\n\nThe approach works well.");
//!
//! let selection = "See the [docs](https://example.com) for **details**.";
//! assert_eq!(
//!     format_selection(selection),
//!     "See the <https://example.com|docs> for *details*."
//! );
//! ```
//!
//! ## Invocation model
//!
//! Every call parses its own snapshot, builds its own dedup state, and
//! produces a fresh output string. Nothing is shared across calls, so
//! overlapping invocations (e.g. triggered by a page-mutation observer) are
//! safe without coordination. Clipboard writes, button injection, and DOM
//! observation belong to the embedder, reachable through
//! [`pipeline::ClipboardWriter`] and the [`message`] contract.

pub mod dom;
pub mod error;
pub mod extract;
pub mod message;
pub mod mrkdwn;
pub mod pipeline;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use extract::{
    extract_blocks, inline_runs, normalize_text, strip_citations, strip_citations_with,
    Block, BlockRole, InlineRun, StructuredDocument, TrailingNumbers,
};
pub use message::{Request, Response};
pub use mrkdwn::translate;
pub use pipeline::{
    convert_answer_html, copy_with_fallback, format_selection, handle_request, ClipboardWriter,
};
