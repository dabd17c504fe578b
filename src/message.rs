//! Message contract between the core and the host process.
//!
//! One request shape per user action, JSON-tagged on `action`, matching what
//! the browser-side collaborators send over the runtime messaging channel.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A request from the host process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    /// Format the user's text selection and copy it to the clipboard.
    CopySelection { text: String },
    /// Re-run UI injection; carries no payload.
    ToggleButtons,
}

/// The response relayed back to the host process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// Decode a JSON request from the host process.
pub fn decode_request(json: &str) -> Result<Request> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a response for the host process.
pub fn encode_response(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| {
        // Response only holds a bool and an optional string; serialization
        // cannot fail in practice.
        r#"{"success":false,"error":"response encoding failed"}"#.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_copy_selection() {
        let req = decode_request(r#"{"action":"copySelection","text":"hello"}"#).unwrap();
        assert_eq!(
            req,
            Request::CopySelection {
                text: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_decode_toggle_buttons() {
        let req = decode_request(r#"{"action":"toggleButtons"}"#).unwrap();
        assert_eq!(req, Request::ToggleButtons);
    }

    #[test]
    fn test_decode_unknown_action_fails() {
        assert!(decode_request(r#"{"action":"launchMissiles"}"#).is_err());
    }

    #[test]
    fn test_encode_success_omits_error() {
        assert_eq!(encode_response(&Response::ok()), r#"{"success":true}"#);
    }

    #[test]
    fn test_encode_failure_carries_error() {
        assert_eq!(
            encode_response(&Response::failure("nope")),
            r#"{"success":false,"error":"nope"}"#
        );
    }
}
