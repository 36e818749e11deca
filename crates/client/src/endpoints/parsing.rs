//! Response body parsing shared by endpoint modules.
//!
//! Responsibilities:
//! - Pull a human-readable message out of a Splunk error body.
//! - Decode success bodies into typed models with a labelled error.
//!
//! Does NOT handle:
//! - Status checking (see [`super::request`]).

use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Extract the first message text from a Splunk error envelope.
///
/// Accepts `{"messages": [{"text": "...", ...}, ...], ...}`. Other keys are
/// ignored. Returns [`ClientError::MalformedErrorBody`] when the body is not
/// JSON, `messages` is missing or empty, or the first `text` is blank.
pub fn extract_error_message(body: &[u8]) -> Result<String> {
    let envelope: SplunkMessages =
        serde_json::from_slice(body).map_err(|_| ClientError::MalformedErrorBody)?;
    envelope
        .messages
        .into_iter()
        .next()
        .map(|m| m.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(ClientError::MalformedErrorBody)
}

/// Decode a success body, labelling failures with `context`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8], context: &'static str) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| ClientError::Decode { context, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobCreated;

    #[test]
    fn test_first_message_text_is_returned() {
        let body = br#"{"messages":[{"text":"bad query"}], "other":1}"#;
        assert_eq!(extract_error_message(body).unwrap(), "bad query");
    }

    #[test]
    fn test_single_key_envelope_is_accepted() {
        let body = br#"{"messages":[{"type":"ERROR","text":"Unauthorized"},{"type":"WARN","text":"second"}]}"#;
        assert_eq!(extract_error_message(body).unwrap(), "Unauthorized");
    }

    #[test]
    fn test_malformed_bodies() {
        let cases: [&[u8]; 6] = [
            b"<html>502 Bad Gateway</html>",
            b"",
            br#"{"messages": []}"#,
            br#"{"messages": "oops"}"#,
            br#"{"error": "nope"}"#,
            br#"{"messages": [{"text": "  "}]}"#,
        ];
        for body in cases {
            assert!(
                matches!(extract_error_message(body), Err(ClientError::MalformedErrorBody)),
                "expected malformed for {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_decode_json_labels_errors() {
        let err = decode_json::<JobCreated>(b"not json", "job creation response").unwrap_err();
        match err {
            ClientError::Decode { context, .. } => assert_eq!(context, "job creation response"),
            other => panic!("Expected Decode, got {:?}", other),
        }
    }
}
