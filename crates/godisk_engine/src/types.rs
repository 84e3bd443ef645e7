use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::PersistError;

pub type SubmissionId = u64;
pub type RequestId = u64;

/// Body of `POST /commands`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CommandRequest<'a> {
    #[serde(rename = "Comandos")]
    pub comandos: &'a str,
}

/// Reply of `POST /commands`. A `null` or missing `data` means no output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CommandReply {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<String>,
    #[serde(default)]
    pub error: bool,
}

/// Reply of `GET /reportes/list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ReportListReply {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<String>,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    BatchCompleted {
        submission_id: SubmissionId,
        result: Result<CommandReply, RequestError>,
    },
    ReportsListed {
        request_id: RequestId,
        result: Result<Vec<String>, RequestError>,
    },
    ReportDownloaded {
        filename: String,
        result: Result<PathBuf, DownloadError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct RequestError {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// True when the request completed but its body could not be interpreted.
    pub fn is_malformed(&self) -> bool {
        self.kind == FailureKind::MalformedBody
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedBody,
    EngineReported,
    TooLarge { max_bytes: u64, actual: Option<u64> },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedBody => write!(f, "malformed response"),
            FailureKind::EngineReported => write!(f, "engine reported an error"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    #[error("report name {0:?} has no file name component")]
    InvalidName(String),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("could not save report: {0}")]
    Persist(String),
}

impl From<PersistError> for DownloadError {
    fn from(err: PersistError) -> Self {
        DownloadError::Persist(err.to_string())
    }
}
