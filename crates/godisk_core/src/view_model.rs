use crate::{CatalogStatus, Notice, RequestId, TranscriptEntry};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub can_execute: bool,
    pub transcript: Vec<TranscriptEntry>,
    pub message_count: usize,
    pub pending_submissions: usize,
    pub reports_open: bool,
    pub catalog: CatalogView,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogView {
    /// Latest refresh issued; lets a renderer notice a refresh with an identical result.
    pub request_id: RequestId,
    pub status: CatalogStatus,
}
