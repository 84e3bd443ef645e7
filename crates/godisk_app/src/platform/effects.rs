use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use console_logging::{console_info, console_warn};
use godisk_core::{BatchOutcome, Effect, Msg};
use godisk_engine::{
    load_script, CommandReply, EngineEvent, EngineHandle, EngineSettings, ReportLocator,
    RequestError,
};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
    locator: ReportLocator,
}

impl EffectRunner {
    pub fn new(settings: EngineSettings, events: mpsc::Sender<AppEvent>) -> anyhow::Result<Self> {
        let locator = ReportLocator::new(&settings.base_url);
        let engine = EngineHandle::new(settings)?;
        spawn_event_loop(engine.clone(), events);
        Ok(Self { engine, locator })
    }

    /// Starts engine work for `effects` and returns the messages that are
    /// answered on the spot.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut immediate = Vec::new();
        for effect in effects {
            match effect {
                Effect::SubmitBatch {
                    submission_id,
                    raw_text,
                } => {
                    console_info!(
                        "SubmitBatch submission_id={} text_len={}",
                        submission_id,
                        raw_text.len()
                    );
                    self.engine.submit(submission_id, raw_text);
                }
                Effect::LoadScript { path } => {
                    let msg = match load_script(&path) {
                        Ok(script) => Msg::ScriptLoaded {
                            name: script.name,
                            text: script.text,
                        },
                        Err(err) => {
                            console_warn!("Script {:?} rejected: {}", path, err);
                            Msg::ScriptRejected {
                                reason: err.to_string(),
                            }
                        }
                    };
                    immediate.push(msg);
                }
                Effect::RefreshReports { request_id } => {
                    self.engine.list_reports(request_id);
                }
                Effect::OpenReport { filename } => {
                    let url = self.locator.resolve(&filename);
                    immediate.push(Msg::ReportLinkResolved { filename, url });
                }
                Effect::DownloadReport { filename } => {
                    self.engine.download(filename);
                }
            }
        }
        immediate
    }
}

fn spawn_event_loop(engine: EngineHandle, events: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        if let Some(event) = engine.recv_timeout(Duration::from_millis(100)) {
            if events.send(AppEvent::Core(map_event(event))).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::BatchCompleted {
            submission_id,
            result,
        } => Msg::BatchSettled {
            submission_id,
            outcome: map_batch_result(result),
        },
        EngineEvent::ReportsListed { request_id, result } => Msg::ReportListLoaded {
            request_id,
            result: result.map_err(|err| err.to_string()),
        },
        EngineEvent::ReportDownloaded { filename, result } => Msg::ReportDownloadFinished {
            filename,
            result: result
                .map(|path| path.display().to_string())
                .map_err(|err| err.to_string()),
        },
    }
}

fn map_batch_result(result: Result<CommandReply, RequestError>) -> BatchOutcome {
    match result {
        Ok(reply) => BatchOutcome::Replied {
            lines: reply.data,
            engine_error: reply.error,
        },
        Err(err) if err.is_malformed() => BatchOutcome::Malformed {
            reason: err.message,
        },
        Err(err) => BatchOutcome::Unreachable {
            reason: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use godisk_core::BatchOutcome;
    use godisk_engine::{CommandReply, FailureKind, RequestError};

    use super::map_batch_result;

    fn request_error(kind: FailureKind, message: &str) -> RequestError {
        RequestError {
            kind,
            message: message.to_string(),
        }
    }

    #[test]
    fn reply_keeps_engine_flag_and_lines() {
        let outcome = map_batch_result(Ok(CommandReply {
            data: vec!["Partición no encontrada".to_string()],
            error: true,
        }));
        assert_eq!(
            outcome,
            BatchOutcome::Replied {
                lines: vec!["Partición no encontrada".to_string()],
                engine_error: true,
            }
        );
    }

    #[test]
    fn malformed_body_is_not_a_connection_failure() {
        let outcome = map_batch_result(Err(request_error(
            FailureKind::MalformedBody,
            "expected value at line 1 column 1",
        )));
        assert_eq!(
            outcome,
            BatchOutcome::Malformed {
                reason: "expected value at line 1 column 1".to_string()
            }
        );
    }

    #[test]
    fn status_failure_is_unreachable() {
        let outcome = map_batch_result(Err(request_error(
            FailureKind::HttpStatus(500),
            "500 Internal Server Error",
        )));
        match outcome {
            BatchOutcome::Unreachable { reason } => assert!(reason.contains("500")),
            other => panic!("unexpected outcome {other:?}"),
        }
    }
}
