use std::fmt;

use serde::Deserialize;

/// Wire shape of one `status` poll.
///
/// Not-ready polls usually carry only `ready`, so everything defaults;
/// unknown server fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    pub ready: bool,
    pub result: String,
    pub raw_base64: String,
}

/// Wire shape of the `upload` receipt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct UploadReceipt {
    pub file_id: Option<String>,
    pub error: Option<String>,
}

/// Wire shape of the `process/<file_id>` receipt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ProcessReceipt {
    pub task_id: Option<String>,
}

/// Events the engine reports back to the update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    StatusArrived(StatusResponse),
    StatusFailed { message: String },
    TimerElapsed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Network,
    BadPayload,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::BadPayload => write!(f, "malformed status payload"),
        }
    }
}
