use std::path::PathBuf;
use std::time::Duration;

use console_logging::{console_debug, console_info, console_warn};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;

use crate::types::{CommandRequest, ReportListReply};
use crate::{CommandReply, FailureKind, RequestError};

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// `None` leaves the overall request time to the transport.
    pub request_timeout: Option<Duration>,
    pub max_download_bytes: u64,
    pub download_dir: PathBuf,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9600".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_download_bytes: 32 * 1024 * 1024,
            download_dir: PathBuf::from("reports"),
        }
    }
}

#[async_trait::async_trait]
pub trait EngineClient: Send + Sync {
    /// Sends the whole script as one request; the engine splits it.
    async fn submit_commands(&self, raw_text: &str) -> Result<CommandReply, RequestError>;

    async fn list_reports(&self) -> Result<Vec<String>, RequestError>;

    async fn fetch_report(&self, filename: &str) -> Result<Vec<u8>, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestEngineClient {
    client: reqwest::Client,
    base: reqwest::Url,
    max_download_bytes: u64,
}

impl ReqwestEngineClient {
    pub fn new(settings: &EngineSettings) -> Result<Self, RequestError> {
        let base = reqwest::Url::parse(&settings.base_url)
            .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(RequestError::new(
                FailureKind::InvalidUrl,
                format!("{} cannot be used as a base url", settings.base_url),
            ));
        }

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| RequestError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            base,
            max_download_bytes: settings.max_download_bytes,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), path)
    }

    async fn get_ok(&self, url: &str) -> Result<reqwest::Response, RequestError> {
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        ensure_success(response)
    }
}

#[async_trait::async_trait]
impl EngineClient for ReqwestEngineClient {
    async fn submit_commands(&self, raw_text: &str) -> Result<CommandReply, RequestError> {
        let url = self.endpoint("/commands");
        let body = serde_json::to_vec(&CommandRequest { comandos: raw_text })
            .map_err(|err| RequestError::new(FailureKind::MalformedBody, err.to_string()))?;
        console_info!("POST {} ({} bytes)", url, body.len());
        console_debug!("Batch text: {:?}", raw_text);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response)?;
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        parse_object::<CommandReply>(&bytes).inspect_err(|err| {
            console_warn!("Unusable reply from {}: {}", url, err);
        })
    }

    async fn list_reports(&self) -> Result<Vec<String>, RequestError> {
        let url = self.endpoint("/reportes/list");
        console_info!("GET {}", url);

        let response = self.get_ok(&url).await?;
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let reply = parse_object::<ReportListReply>(&bytes)?;
        if reply.error {
            let message = reply
                .message
                .unwrap_or_else(|| "report listing failed".to_string());
            console_warn!("Engine refused report listing: {}", message);
            return Err(RequestError::new(FailureKind::EngineReported, message));
        }
        Ok(reply.data)
    }

    async fn fetch_report(&self, filename: &str) -> Result<Vec<u8>, RequestError> {
        let url = self.endpoint(&format!("/rep/{filename}"));
        console_info!("GET {}", url);

        let response = self.get_ok(&url).await?;
        let max_bytes = self.max_download_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, RequestError> {
    let status = response.status();
    if !status.is_success() {
        console_warn!("{} answered {}", response.url(), status);
        return Err(RequestError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }
    Ok(response)
}

/// Parses a JSON object body; arrays, scalars and invalid JSON are malformed.
fn parse_object<T: serde::de::DeserializeOwned>(bytes: &bytes::Bytes) -> Result<T, RequestError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|err| RequestError::new(FailureKind::MalformedBody, err.to_string()))?;
    if !value.is_object() {
        return Err(RequestError::new(
            FailureKind::MalformedBody,
            "expected a JSON object",
        ));
    }
    serde_json::from_value(value)
        .map_err(|err| RequestError::new(FailureKind::MalformedBody, err.to_string()))
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> RequestError {
    RequestError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_timeout() {
        return RequestError::new(FailureKind::Timeout, err.to_string());
    }
    RequestError::new(FailureKind::Network, err.to_string())
}
