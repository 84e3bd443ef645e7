use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use console_logging::{console_info, console_warn};

use crate::client::{EngineClient, EngineSettings, ReqwestEngineClient};
use crate::persist::AtomicFileWriter;
use crate::{DownloadError, EngineEvent, RequestError, RequestId, SubmissionId};

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        raw_text: String,
    },
    ListReports {
        request_id: RequestId,
    },
    Download {
        filename: String,
    },
}

/// Runs engine requests on a background tokio runtime.
///
/// Every command is spawned independently, so completions arrive in the order
/// the remote engine answers them, not the order they were issued.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Result<Self, RequestError> {
        let client = ReqwestEngineClient::new(&settings)?;
        Self::with_client(Arc::new(client), settings.download_dir)
    }

    /// Uses a caller-supplied client, e.g. a test double.
    pub fn with_client(
        client: Arc<dyn EngineClient>,
        download_dir: PathBuf,
    ) -> Result<Self, RequestError> {
        let runtime = tokio::runtime::Runtime::new().map_err(|err| {
            RequestError::new(crate::FailureKind::Network, format!("tokio runtime: {err}"))
        })?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let download_dir = Arc::new(download_dir);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                let download_dir = download_dir.clone();
                runtime.spawn(async move {
                    let event = handle_command(client.as_ref(), &download_dir, command).await;
                    let _ = event_tx.send(event);
                });
            }
            console_info!("Engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn submit(&self, submission_id: SubmissionId, raw_text: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            submission_id,
            raw_text: raw_text.into(),
        });
    }

    pub fn list_reports(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::ListReports { request_id });
    }

    pub fn download(&self, filename: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Download {
            filename: filename.into(),
        });
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn EngineClient,
    download_dir: &Path,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::Submit {
            submission_id,
            raw_text,
        } => {
            let result = client.submit_commands(&raw_text).await;
            if let Err(err) = &result {
                console_warn!("Submission {} failed: {}", submission_id, err);
            }
            EngineEvent::BatchCompleted {
                submission_id,
                result,
            }
        }
        EngineCommand::ListReports { request_id } => {
            let result = client.list_reports().await;
            if let Err(err) = &result {
                console_warn!("Report list {} failed: {}", request_id, err);
            }
            EngineEvent::ReportsListed { request_id, result }
        }
        EngineCommand::Download { filename } => {
            let result = download(client, download_dir, &filename).await;
            if let Err(err) = &result {
                console_warn!("Download of {} failed: {}", filename, err);
            }
            EngineEvent::ReportDownloaded { filename, result }
        }
    }
}

async fn download(
    client: &dyn EngineClient,
    download_dir: &Path,
    filename: &str,
) -> Result<PathBuf, DownloadError> {
    // Only the last component names the local file; the request uses the name verbatim.
    let local_name = Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| DownloadError::InvalidName(filename.to_string()))?
        .to_string();
    let bytes = client.fetch_report(filename).await?;
    let writer = AtomicFileWriter::new(download_dir.to_path_buf());
    let path = writer.write(&local_name, &bytes)?;
    console_info!("Saved {} ({} bytes) to {:?}", filename, bytes.len(), path);
    Ok(path)
}
