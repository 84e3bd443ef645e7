use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, CatalogView};
use crate::{
    CommandBatch, EntryId, ReportCatalog, RequestId, Severity, SubmissionId, Transcript,
    DEFAULT_EMPTY_OUTPUT,
};

/// Latest operator-facing message outside the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    transcript: Transcript,
    catalog: ReportCatalog,
    reports_open: bool,
    pending: BTreeMap<SubmissionId, CommandBatch>,
    next_submission: SubmissionId,
    notice: Option<Notice>,
    notice_seq: u64,
    empty_output_text: String,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            transcript: Transcript::new(),
            catalog: ReportCatalog::new(),
            reports_open: false,
            pending: BTreeMap::new(),
            next_submission: 1,
            notice: None,
            notice_seq: 0,
            empty_output_text: DEFAULT_EMPTY_OUTPUT.to_string(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `text` instead of [`DEFAULT_EMPTY_OUTPUT`] for replies without output.
    pub fn with_empty_output_text(text: impl Into<String>) -> Self {
        Self {
            empty_output_text: text.into(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.input.clone(),
            can_execute: !self.input.trim().is_empty(),
            transcript: self.transcript.snapshot().to_vec(),
            message_count: self.transcript.len(),
            pending_submissions: self.pending.len(),
            reports_open: self.reports_open,
            catalog: CatalogView {
                request_id: self.catalog.last_request(),
                status: self.catalog.status().clone(),
            },
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn catalog(&self) -> &ReportCatalog {
        &self.catalog
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn pending_submissions(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_submission(&mut self, batch: CommandBatch) -> SubmissionId {
        let id = self.next_submission;
        self.next_submission += 1;
        self.pending.insert(id, batch);
        self.mark_dirty();
        id
    }

    /// Removes the pending batch; `None` when the id was never issued or already settled.
    pub(crate) fn finish_submission(&mut self, id: SubmissionId) -> Option<CommandBatch> {
        self.pending.remove(&id)
    }

    pub(crate) fn record_entry(&mut self, severity: Severity, content: String) -> EntryId {
        self.mark_dirty();
        self.transcript.append(severity, content)
    }

    pub(crate) fn clear_transcript(&mut self) {
        if !self.transcript.is_empty() {
            self.mark_dirty();
        }
        self.transcript.clear();
    }

    pub(crate) fn empty_output_text(&self) -> &str {
        &self.empty_output_text
    }

    pub(crate) fn set_reports_open(&mut self, open: bool) {
        if self.reports_open != open {
            self.reports_open = open;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_catalog_refresh(&mut self) -> RequestId {
        self.mark_dirty();
        self.catalog.begin_refresh()
    }

    pub(crate) fn settle_catalog(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<String>, String>,
    ) -> bool {
        let applied = self.catalog.settle(request_id, result);
        if applied {
            self.mark_dirty();
        }
        applied
    }

    pub(crate) fn post_notice(&mut self, severity: Severity, text: impl Into<String>) {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            seq: self.notice_seq,
            severity,
            text: text.into(),
        });
        self.mark_dirty();
    }
}
