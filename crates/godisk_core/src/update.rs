use console_logging::{console_debug, console_warn};

use crate::{classify, AppState, CommandBatch, Effect, Msg, Severity};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::InputCleared => {
            state.set_input(String::new());
            Vec::new()
        }
        Msg::ScriptFileChosen(path) => vec![Effect::LoadScript { path }],
        Msg::ScriptLoaded { name, text } => {
            // Loading replaces the input; it never appends.
            state.set_input(text);
            state.post_notice(Severity::Info, format!("Loaded script {name}"));
            Vec::new()
        }
        Msg::ScriptRejected { reason } => {
            state.post_notice(Severity::Error, reason);
            Vec::new()
        }
        Msg::ExecuteClicked => {
            let raw = state.input().to_string();
            submit(&mut state, &raw)
        }
        Msg::SingleCommandSubmitted(line) => submit(&mut state, &line),
        Msg::BatchSettled {
            submission_id,
            outcome,
        } => {
            match state.finish_submission(submission_id) {
                Some(batch) => {
                    let (severity, content) = classify(&outcome, state.empty_output_text());
                    let entry_id = state.record_entry(severity, content);
                    console_debug!(
                        "Submission {} ({} commands) settled as entry {} {:?}",
                        submission_id,
                        batch.command_count(),
                        entry_id,
                        severity
                    );
                }
                None => {
                    console_warn!(
                        "Ignoring settlement for unknown submission {}",
                        submission_id
                    );
                }
            }
            Vec::new()
        }
        Msg::ClearTranscriptClicked => {
            state.clear_transcript();
            Vec::new()
        }
        Msg::ReportsOpened => {
            state.set_reports_open(true);
            let request_id = state.begin_catalog_refresh();
            vec![Effect::RefreshReports { request_id }]
        }
        Msg::ReportsRefreshClicked => {
            let request_id = state.begin_catalog_refresh();
            vec![Effect::RefreshReports { request_id }]
        }
        Msg::ReportsClosed => {
            state.set_reports_open(false);
            Vec::new()
        }
        Msg::ReportListLoaded { request_id, result } => {
            let failure = result.as_ref().err().cloned();
            if !state.settle_catalog(request_id, result) {
                console_debug!("Dropping stale report list for request {}", request_id);
            } else if let Some(reason) = failure {
                state.post_notice(
                    Severity::Error,
                    format!("Could not load the report list: {reason}"),
                );
            }
            Vec::new()
        }
        Msg::ReportViewRequested { filename } => vec![Effect::OpenReport { filename }],
        Msg::ReportLinkResolved { filename, url } => {
            state.post_notice(Severity::Info, format!("{filename}: {url}"));
            Vec::new()
        }
        Msg::ReportDownloadRequested { filename } => vec![Effect::DownloadReport { filename }],
        Msg::ReportDownloadFinished { filename, result } => {
            match result {
                Ok(path) => {
                    state.post_notice(Severity::Success, format!("Saved {filename} to {path}"))
                }
                Err(reason) => state.post_notice(
                    Severity::Error,
                    format!("Could not download {filename}: {reason}"),
                ),
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn submit(state: &mut AppState, raw: &str) -> Vec<Effect> {
    let Some(batch) = CommandBatch::from_raw(raw) else {
        return Vec::new();
    };
    let raw_text = batch.raw_text().to_string();
    let submission_id = state.begin_submission(batch);
    vec![Effect::SubmitBatch {
        submission_id,
        raw_text,
    }]
}
