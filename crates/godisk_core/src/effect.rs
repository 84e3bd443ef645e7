use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the whole text to the command endpoint as one request.
    SubmitBatch {
        submission_id: crate::SubmissionId,
        raw_text: String,
    },
    LoadScript { path: PathBuf },
    RefreshReports { request_id: crate::RequestId },
    OpenReport { filename: String },
    DownloadReport { filename: String },
}
