//! GoDisk engine: HTTP access to the remote disk engine and effect execution.
mod client;
mod engine;
mod locator;
mod persist;
mod script;
mod types;

pub use client::{EngineClient, EngineSettings, ReqwestEngineClient};
pub use engine::EngineHandle;
pub use locator::ReportLocator;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use script::{load_script, LoadedScript, ScriptError, SCRIPT_EXTENSION};
pub use types::{
    CommandReply, DownloadError, EngineEvent, FailureKind, RequestError, RequestId, SubmissionId,
};
