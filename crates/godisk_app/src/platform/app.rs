use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use console_logging::{console_info, console_warn};
use godisk_core::{AppState, Msg};

use super::config::{load_config, ConsoleConfig};
use super::effects::EffectRunner;
use super::logging;
use super::session::Session;
use super::ui::layout;

/// Everything the main loop reacts to, funnelled through one channel so state
/// is only touched on this thread.
#[derive(Debug)]
pub enum AppEvent {
    Operator(String),
    Core(Msg),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_error) = match load_config(Path::new(".")) {
        Ok(config) => (config, None),
        Err(err) => (ConsoleConfig::default(), Some(err)),
    };
    logging::initialize(config.log_destination);
    if let Some(err) = config_error {
        console_warn!("Using default configuration: {}", err);
    }
    console_info!("Starting console against {}", config.engine_url);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(config.engine_settings(), event_tx.clone())?;
    thread::spawn(move || read_operator_lines(io::stdin().lock(), &event_tx));

    let state = match &config.empty_output_text {
        Some(text) => AppState::with_empty_output_text(text.clone()),
        None => AppState::new(),
    };
    let mut session = Session::new(state);
    print_lines(layout::banner_lines(&config.engine_url));

    'events: while let Ok(event) = event_rx.recv() {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            let stamp = chrono::Local::now().format("%H:%M:%S").to_string();
            let step = session.handle(event, &stamp);
            print_lines(step.lines);
            // Script loads and link lookups answer immediately and must apply
            // before the next operator line.
            queue.extend(runner.run(step.effects).into_iter().map(AppEvent::Core));
            if step.exit {
                break 'events;
            }
        }
    }

    if session.pending_submissions() > 0 {
        console_warn!(
            "Exiting with {} submission(s) still in flight",
            session.pending_submissions()
        );
    }
    console_info!("Console closed");
    Ok(())
}

/// Forwards operator lines until end of input or a read error.
///
/// Lines are decoded lossily so one badly encoded line cannot end the session.
pub fn read_operator_lines<R: BufRead>(mut reader: R, events: &mpsc::Sender<AppEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                console_warn!("Stopped reading operator input: {}", err);
                break;
            }
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        if std::str::from_utf8(&buf).is_err() {
            console_warn!("Operator line was not valid UTF-8; decoded lossily");
        }
        if events.send(AppEvent::Operator(line)).is_err() {
            return;
        }
    }
    let _ = events.send(AppEvent::InputClosed);
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
