//! Organization API Client
//!
//! Thin wrappers over the REST endpoints, organized by resource.

mod department;
mod employee;

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Handle to the organization API; cheap to clone
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Arc<str>,
    http: reqwest::Client,
    read_retries: u32,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: Arc::from(config.base_url.trim_end_matches('/')),
            http: reqwest::Client::new(),
            read_retries: config.read_retries,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn read_retries(&self) -> u32 {
        self.read_retries
    }
}

// ========================
// Response Handling
// ========================

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Error for a non-success response; the body's `message` is kept when the
/// server sent one
pub(crate) fn server_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message);
    ApiError::Server { status, message }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(server_error(status.as_u16(), &body))
}

/// Send a request and decode its JSON body
pub(crate) async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let response = check(request.send().await?).await?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request whose body is ignored
pub(crate) async fn send_empty(request: reqwest::RequestBuilder) -> Result<(), ApiError> {
    check(request.send().await?).await?;
    Ok(())
}

/// Run `op` until it succeeds, at most `retries + 1` times
pub async fn with_retry<T, F, Fut>(retries: u32, mut op: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < retries => {
                attempt += 1;
                log::debug!("[API] read failed ({}), retry {}/{}", err, attempt, retries);
            }
            Err(err) => return Err(err),
        }
    }
}
