//! Watcher engine: HTTP clients, payload decoding, and the poll engine.
mod client;
mod decode;
mod engine;
mod submit;
mod types;

pub use client::{ReqwestStatusClient, StatusClient};
pub use decode::{decode_payload, DecodeError};
pub use engine::EngineHandle;
pub use submit::{SubmitClient, SubmitError};
pub use types::{
    ClientError, EngineEvent, FailureKind, ProcessReceipt, StatusResponse, UploadReceipt,
};
