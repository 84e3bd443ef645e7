use crate::Severity;

pub const DEFAULT_EMPTY_OUTPUT: &str = "Command executed with no output.";

/// How a batch submission settled, as seen by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Well-formed reply from the engine.
    Replied { lines: Vec<String>, engine_error: bool },
    /// Request never completed or returned a non-success status.
    Unreachable { reason: String },
    /// Reply body could not be interpreted.
    Malformed { reason: String },
}

/// Maps a settled batch to the severity and text of its transcript entry.
///
/// Transport and parse failures are always errors; for a well-formed reply the
/// engine's flag decides. `empty_output` replaces an empty line sequence.
pub fn classify(outcome: &BatchOutcome, empty_output: &str) -> (Severity, String) {
    match outcome {
        BatchOutcome::Replied {
            lines,
            engine_error,
        } => {
            let severity = if *engine_error {
                Severity::Error
            } else {
                Severity::Success
            };
            let content = if lines.is_empty() {
                empty_output.to_string()
            } else {
                lines.join("\n")
            };
            (severity, content)
        }
        BatchOutcome::Unreachable { reason } => (
            Severity::Error,
            format!("Error connecting to the engine: {reason}"),
        ),
        BatchOutcome::Malformed { reason } => (
            Severity::Error,
            format!("Error parsing the engine response: {reason}"),
        ),
    }
}
