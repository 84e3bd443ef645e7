use std::path::PathBuf;

use godisk_core::{AppViewModel, CatalogStatus, Msg};

use super::constants::*;

/// What one operator line asks the console to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleAction {
    Dispatch(Msg),
    ShowInput,
    Help,
    Quit,
    Usage(String),
    Unknown(String),
    Nothing,
}

/// Parses an operator line against the current view.
///
/// `view` supplies the input buffer for `:add` and the catalog for numeric
/// report references.
pub fn parse_line(line: &str, view: &AppViewModel) -> ConsoleAction {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ConsoleAction::Nothing;
    }
    let Some(command) = trimmed.strip_prefix(COMMAND_PREFIX) else {
        return ConsoleAction::Dispatch(Msg::SingleCommandSubmitted(line.to_string()));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        CMD_ADD => {
            let text = if view.input.is_empty() {
                arg.to_string()
            } else {
                format!("{}\n{}", view.input.trim_end_matches('\n'), arg)
            };
            ConsoleAction::Dispatch(Msg::InputChanged(text))
        }
        CMD_RUN => ConsoleAction::Dispatch(Msg::ExecuteClicked),
        CMD_LOAD if arg.is_empty() => usage(CMD_LOAD, "<file.mia>"),
        CMD_LOAD => ConsoleAction::Dispatch(Msg::ScriptFileChosen(PathBuf::from(arg))),
        CMD_INPUT => ConsoleAction::ShowInput,
        CMD_RESET => ConsoleAction::Dispatch(Msg::InputCleared),
        CMD_CLEAR => ConsoleAction::Dispatch(Msg::ClearTranscriptClicked),
        CMD_REPORTS => ConsoleAction::Dispatch(Msg::ReportsOpened),
        CMD_REFRESH => ConsoleAction::Dispatch(Msg::ReportsRefreshClicked),
        CMD_CLOSE => ConsoleAction::Dispatch(Msg::ReportsClosed),
        CMD_VIEW | CMD_DOWNLOAD if arg.is_empty() => usage(name, "<name|#>"),
        CMD_VIEW => ConsoleAction::Dispatch(Msg::ReportViewRequested {
            filename: report_name(arg, view),
        }),
        CMD_DOWNLOAD => ConsoleAction::Dispatch(Msg::ReportDownloadRequested {
            filename: report_name(arg, view),
        }),
        CMD_HELP => ConsoleAction::Help,
        CMD_QUIT => ConsoleAction::Quit,
        other => ConsoleAction::Unknown(other.to_string()),
    }
}

fn usage(name: &str, args: &str) -> ConsoleAction {
    ConsoleAction::Usage(format!("usage: {COMMAND_PREFIX}{name} {args}"))
}

/// `#n` (or plain `n`) picks the n-th listed report; anything else is a filename.
fn report_name(arg: &str, view: &AppViewModel) -> String {
    if let CatalogStatus::Ready(entries) = &view.catalog.status {
        let index = arg.strip_prefix('#').unwrap_or(arg).parse::<usize>().ok();
        if let Some(name) = index.and_then(|i| i.checked_sub(1)).and_then(|i| entries.get(i)) {
            return name.clone();
        }
    }
    arg.to_string()
}
