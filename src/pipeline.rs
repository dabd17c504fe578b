//! Pipeline driver: extract → translate → hand off.
//!
//! Idempotent and safe to re-invoke at any time: every call parses its own
//! snapshot, builds a fresh seen-set, and produces a fresh output string, so
//! overlapping invocations cannot corrupt shared state. Nothing here retries
//! or times out; the clipboard collaborator owns that contract.

use tracing::{debug, warn};

use crate::dom;
use crate::error::{Error, Result};
use crate::extract::{extract_blocks, normalize_text, strip_citations};
use crate::message::{Request, Response};
use crate::mrkdwn::translate;

/// Convert an answer's HTML snapshot to mrkdwn.
///
/// Extraction misses degrade to the snapshot's flat text (citation-stripped
/// and normalized), so a user action never yields nothing when the input has
/// any text at all.
pub fn convert_answer_html(html: &str) -> String {
    let doc = extract_blocks(html);
    let rendered = doc.render();

    if rendered.trim().is_empty() {
        warn!("extraction produced no blocks, degrading to flat text");
        let dom = dom::parse_snapshot(html);
        let flat = normalize_text(&strip_citations(&dom::text_content(&dom.document)));
        return translate(&flat);
    }

    debug!(blocks = doc.blocks.len(), "extracted structured document");
    translate(&rendered)
}

/// Format raw selected text for Slack. Selections carry no HTML structure,
/// so this skips extraction entirely.
pub fn format_selection(text: &str) -> String {
    translate(text)
}

/// Single-shot clipboard handoff implemented by the embedder.
///
/// `Ok(true)` means the text landed on the clipboard, `Ok(false)` means the
/// mechanism declined without erroring (as `execCommand` does), `Err` means
/// it failed outright.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<bool>;
}

/// Try each clipboard mechanism in order until one succeeds.
///
/// Clipboard write methods vary by execution context, so every fallback is
/// attempted before failure is reported. An error is returned only when no
/// writer succeeded and at least one errored.
pub fn copy_with_fallback(
    writers: &mut [&mut dyn ClipboardWriter],
    text: &str,
) -> Result<bool> {
    let mut last_error: Option<Error> = None;

    for writer in writers.iter_mut() {
        match writer.write(text) {
            Ok(true) => return Ok(true),
            Ok(false) => debug!("clipboard writer declined, trying fallback"),
            Err(e) => {
                warn!(error = %e, "clipboard writer failed, trying fallback");
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(e),
        None => Ok(false),
    }
}

/// Handle one host-process request against the given clipboard mechanisms.
pub fn handle_request(
    request: Request,
    clipboard: &mut [&mut dyn ClipboardWriter],
) -> Response {
    match request {
        Request::CopySelection { text } => {
            let formatted = format_selection(&text);
            match copy_with_fallback(clipboard, &formatted) {
                Ok(true) => Response::ok(),
                Ok(false) => Response::failure("clipboard write was declined"),
                Err(e) => Response::failure(e.to_string()),
            }
        }
        // Re-invocation is the embedder's side of the contract; the core
        // just acknowledges.
        Request::ToggleButtons => Response::ok(),
    }
}
