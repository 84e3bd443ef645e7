use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Operator replaced the multi-line command input.
    InputChanged(String),
    /// Operator emptied the command input.
    InputCleared,
    /// Operator picked a script file to load into the input.
    ScriptFileChosen(PathBuf),
    /// Script file was read; its text replaces the input.
    ScriptLoaded { name: String, text: String },
    /// Script file was refused (wrong extension or unreadable).
    ScriptRejected { reason: String },
    /// Operator executed the multi-line input.
    ExecuteClicked,
    /// Operator executed a single command line, bypassing the input buffer.
    SingleCommandSubmitted(String),
    /// Engine settled a batch submission.
    BatchSettled {
        submission_id: crate::SubmissionId,
        outcome: crate::BatchOutcome,
    },
    /// Operator cleared the transcript.
    ClearTranscriptClicked,
    /// Operator opened the report browser.
    ReportsOpened,
    /// Operator asked for a fresh report list.
    ReportsRefreshClicked,
    /// Operator closed the report browser.
    ReportsClosed,
    /// Engine finished a report list fetch.
    ReportListLoaded {
        request_id: crate::RequestId,
        result: Result<Vec<String>, String>,
    },
    /// Operator wants to view a report.
    ReportViewRequested { filename: String },
    /// A report name was resolved to its retrieval URL.
    ReportLinkResolved { filename: String, url: String },
    /// Operator wants to save a report locally.
    ReportDownloadRequested { filename: String },
    /// Engine finished a report download (saved path or failure reason).
    ReportDownloadFinished {
        filename: String,
        result: Result<String, String>,
    },
}
