use std::path::Path;

use reqwest::multipart::{Form, Part};
use thiserror::Error;
use url::Url;

use crate::types::{ProcessReceipt, UploadReceipt};

/// Prefix the API sticks on uploaded file ids; it has to come off before
/// asking for processing.
const UPLOAD_PREFIX: &str = "upload/";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid page url: {0}")]
    InvalidUrl(String),
    #[error("could not read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    BadPayload(String),
    #[error("upload rejected: {0}")]
    UploadRejected(String),
    #[error("processing did not return a task id")]
    NoTaskId,
}

/// Client for the upload-and-process flow that creates a watchable task.
///
/// Unlike the poller, this path fails fast: a rejected upload is an error,
/// not a stall.
pub struct SubmitClient {
    page: Url,
    client: reqwest::Client,
}

impl SubmitClient {
    pub fn new(page_url: &str) -> Result<Self, SubmitError> {
        let page = Url::parse(page_url).map_err(|err| SubmitError::InvalidUrl(err.to_string()))?;
        Ok(Self {
            page,
            client: reqwest::Client::new(),
        })
    }

    /// Uploads `path` and starts processing it. Returns the task id to watch.
    pub async fn submit_file(&self, path: &Path) -> Result<String, SubmitError> {
        let bytes = std::fs::read(path).map_err(|source| SubmitError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.txt".to_string());

        let upload_url = self.join("upload")?;
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let receipt: UploadReceipt = self
            .request_json(self.client.post(upload_url).multipart(form))
            .await?;

        let file_id = receipt.file_id.filter(|id| !id.is_empty()).ok_or_else(|| {
            SubmitError::UploadRejected(
                receipt.error.unwrap_or_else(|| "missing file_id".to_string()),
            )
        })?;
        let file_id = file_id.strip_prefix(UPLOAD_PREFIX).unwrap_or(&file_id);
        log::info!("uploaded as {file_id}, starting processing");

        let process_url = self.join(&format!("process/{file_id}"))?;
        let receipt: ProcessReceipt = self.request_json(self.client.get(process_url)).await?;
        receipt
            .task_id
            .filter(|id| !id.is_empty())
            .ok_or(SubmitError::NoTaskId)
    }

    fn join(&self, relative: &str) -> Result<Url, SubmitError> {
        self.page
            .join(relative)
            .map_err(|err| SubmitError::InvalidUrl(err.to_string()))
    }

    async fn request_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, SubmitError> {
        let response = request
            .send()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::HttpStatus(status.as_u16()));
        }
        let body = response
            .text()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| SubmitError::BadPayload(err.to_string()))
    }
}
