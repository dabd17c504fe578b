//! WASM bindings for the extraction and formatting pipeline.
//!
//! This module exposes the two pipeline entry points to JavaScript via
//! wasm-bindgen. Clipboard writes, DOM observation, and the runtime message
//! channel stay on the JS side; the content script serializes the answer
//! subtree and hands the string over.

use wasm_bindgen::prelude::*;

use crate::pipeline::{convert_answer_html, format_selection};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Extract an answer from its HTML snapshot and return it as mrkdwn.
#[wasm_bindgen]
pub fn answer_html_to_mrkdwn(html: &str) -> String {
    convert_answer_html(html)
}

/// Format raw selected text as mrkdwn (no DOM walk).
#[wasm_bindgen]
pub fn selection_to_mrkdwn(text: &str) -> String {
    format_selection(text)
}
