use godisk_core::{AppViewModel, CatalogStatus, Severity, TranscriptEntry};

/// Lines to print for the change from `previous` to `view`.
///
/// `stamp` prefixes newly settled transcript entries.
pub fn render(previous: &AppViewModel, view: &AppViewModel, stamp: &str) -> Vec<String> {
    let mut lines = Vec::new();

    if view.transcript.is_empty() && !previous.transcript.is_empty() {
        lines.push("-- transcript cleared --".to_string());
    }
    let last_seen = previous.transcript.last().map_or(0, TranscriptEntry::id);
    for entry in view.transcript.iter().filter(|e| e.id() > last_seen) {
        lines.extend(render_entry(entry, stamp));
    }

    if view.pending_submissions > previous.pending_submissions {
        lines.push(format!(
            "... submitted ({} in flight)",
            view.pending_submissions
        ));
    }

    if view.input != previous.input {
        let count = view.input.lines().filter(|l| !l.trim().is_empty()).count();
        lines.push(if view.input.is_empty() {
            "Script input cleared.".to_string()
        } else {
            format!("Script input: {count} command line(s); :run to execute.")
        });
    }

    if let Some(notice) = &view.notice {
        if previous.notice.as_ref() != Some(notice) {
            lines.push(format!("{} {}", marker(notice.severity), notice.text));
        }
    }

    if view.reports_open {
        if !previous.reports_open || view.catalog != previous.catalog {
            lines.extend(render_catalog(&view.catalog.status));
        }
    } else if previous.reports_open {
        lines.push("Report browser closed.".to_string());
    }

    lines
}

/// Full-buffer listing for `:input`.
pub fn render_input(view: &AppViewModel) -> Vec<String> {
    if view.input.is_empty() {
        return vec!["(script input is empty)".to_string()];
    }
    view.input
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{:>4} | {line}", i + 1))
        .collect()
}

fn render_entry(entry: &TranscriptEntry, stamp: &str) -> Vec<String> {
    let prefix = format!("[{stamp}] {}", marker(entry.severity()));
    let indent = " ".repeat(prefix.chars().count());
    entry
        .content()
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{prefix} {line}")
            } else {
                format!("{indent} {line}")
            }
        })
        .collect()
}

fn render_catalog(status: &CatalogStatus) -> Vec<String> {
    match status {
        CatalogStatus::Idle => Vec::new(),
        CatalogStatus::Loading => vec!["Reports: loading...".to_string()],
        CatalogStatus::Ready(entries) if entries.is_empty() => {
            vec!["Reports: none generated yet.".to_string()]
        }
        CatalogStatus::Ready(entries) => {
            let mut lines = vec![format!("Reports ({}):", entries.len())];
            lines.extend(
                entries
                    .iter()
                    .enumerate()
                    .map(|(i, name)| format!("  #{} {name}", i + 1)),
            );
            lines
        }
        CatalogStatus::Failed(_) => {
            vec!["Reports: unavailable (:refresh to try again).".to_string()]
        }
    }
}

fn marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "[ok]",
        Severity::Error => "[error]",
        Severity::Info => "[info]",
        Severity::Comment => "[#]",
    }
}
