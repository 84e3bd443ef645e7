//! GoDisk core: pure console state machine and view-model helpers.
mod batch;
mod catalog;
mod classify;
mod effect;
mod msg;
mod state;
mod transcript;
mod update;
mod view_model;

pub use batch::{CommandBatch, SubmissionId};
pub use catalog::{CatalogStatus, ReportCatalog, RequestId};
pub use classify::{classify, BatchOutcome, DEFAULT_EMPTY_OUTPUT};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Notice};
pub use transcript::{EntryId, Severity, Transcript, TranscriptEntry};
pub use update::update;
pub use view_model::{AppViewModel, CatalogView};
