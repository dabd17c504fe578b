//! Error types for answerclip operations.

use thiserror::Error;

/// Errors that can occur at the pipeline's external seams.
///
/// The extraction and translation stages themselves are total (any input
/// string produces some output string), so errors only arise at the clipboard
/// handoff and when decoding host-process messages.
#[derive(Error, Debug)]
pub enum Error {
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("invalid message: {0}")]
    Message(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
