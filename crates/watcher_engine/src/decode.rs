use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload is not valid base64: {0}")]
    InvalidBase64(String),
    #[error("decoded payload is not valid utf-8: {0}")]
    InvalidUtf8(String),
}

/// Decode the `raw_base64` field of a finished status response into text.
///
/// A failure here is fatal to the caller, never rendered: the legacy page
/// threw an uncaught decode error in the same situation.
pub fn decode_payload(raw_base64: &str) -> Result<String, DecodeError> {
    let bytes = STANDARD
        .decode(raw_base64)
        .map_err(|err| DecodeError::InvalidBase64(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| DecodeError::InvalidUtf8(err.to_string()))
}
