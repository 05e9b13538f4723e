use url::Url;

use crate::{ClientError, FailureKind, StatusResponse};

#[async_trait::async_trait]
pub trait StatusClient: Send + Sync {
    async fn poll(&self, task_id: &str) -> Result<StatusResponse, ClientError>;
}

/// Status client over reqwest.
///
/// The endpoint is `status` resolved relative to the page URL, the same way
/// the browser resolved it. No request timeout is configured: only the
/// inter-poll delay bounds time.
#[derive(Debug, Clone)]
pub struct ReqwestStatusClient {
    status_url: Url,
    client: reqwest::Client,
}

impl ReqwestStatusClient {
    pub fn new(page_url: &str) -> Result<Self, ClientError> {
        let page = Url::parse(page_url)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let status_url = page
            .join("status")
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))?;
        Ok(Self {
            status_url,
            client: reqwest::Client::new(),
        })
    }
}

#[async_trait::async_trait]
impl StatusClient for ReqwestStatusClient {
    async fn poll(&self, task_id: &str) -> Result<StatusResponse, ClientError> {
        let mut url = self.status_url.clone();
        // The id goes out exactly as it appeared in the page query string,
        // without re-encoding.
        url.set_query(Some(&format!("task_id={task_id}")));
        log::debug!("polling {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;
        serde_json::from_str(&body)
            .map_err(|err| ClientError::new(FailureKind::BadPayload, err.to_string()))
    }
}
