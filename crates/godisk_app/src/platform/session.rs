use godisk_core::{update, AppState, AppViewModel, Effect, Msg};

use super::app::AppEvent;
use super::ui::input::{parse_line, ConsoleAction};
use super::ui::{layout, render};

/// Result of handling one event: lines to print, effects to run, and whether
/// the console is done.
#[derive(Debug, Default)]
pub struct Step {
    pub lines: Vec<String>,
    pub effects: Vec<Effect>,
    pub exit: bool,
}

/// Owns the core state and the last rendered view.
///
/// After operator input closes, the session keeps applying engine messages
/// until every submission has settled. Only `:quit` abandons in-flight work.
pub struct Session {
    state: AppState,
    previous: AppViewModel,
    input_closed: bool,
}

impl Session {
    pub fn new(state: AppState) -> Self {
        let previous = state.view();
        Self {
            state,
            previous,
            input_closed: false,
        }
    }

    pub fn pending_submissions(&self) -> usize {
        self.state.pending_submissions()
    }

    pub fn handle(&mut self, event: AppEvent, stamp: &str) -> Step {
        match event {
            AppEvent::Core(msg) => self.apply(msg, stamp),
            AppEvent::InputClosed => {
                self.input_closed = true;
                let pending = self.state.pending_submissions();
                let mut step = Step {
                    exit: pending == 0,
                    ..Step::default()
                };
                if pending > 0 {
                    step.lines.push(format!(
                        "Input closed; waiting for {pending} submission(s) to settle."
                    ));
                }
                step
            }
            AppEvent::Operator(line) => self.operator_line(&line, stamp),
        }
    }

    fn operator_line(&mut self, line: &str, stamp: &str) -> Step {
        let lines = match parse_line(line, &self.previous) {
            ConsoleAction::Dispatch(msg) => return self.apply(msg, stamp),
            ConsoleAction::Quit => {
                return Step {
                    exit: true,
                    ..Step::default()
                }
            }
            ConsoleAction::ShowInput => render::render_input(&self.previous),
            ConsoleAction::Help => layout::help_lines(),
            ConsoleAction::Usage(text) => vec![text],
            ConsoleAction::Unknown(name) => {
                vec![format!("Unknown console command :{name} (try :help)")]
            }
            ConsoleAction::Nothing => Vec::new(),
        };
        Step {
            lines,
            ..Step::default()
        }
    }

    fn apply(&mut self, msg: Msg, stamp: &str) -> Step {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = update(state, msg);
        self.state = next;

        let mut lines = Vec::new();
        if self.state.consume_dirty() {
            let view = self.state.view();
            lines = render::render(&self.previous, &view, stamp);
            self.previous = view;
        }
        Step {
            lines,
            effects,
            exit: self.input_closed && self.state.pending_submissions() == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use godisk_core::{AppState, BatchOutcome, Effect, Msg};

    use super::{Session, Step};
    use crate::platform::app::AppEvent;

    fn submitted_id(step: &Step) -> u64 {
        match step.effects.as_slice() {
            [Effect::SubmitBatch { submission_id, .. }] => *submission_id,
            other => panic!("expected a single submission, got {other:?}"),
        }
    }

    fn settle(submission_id: u64) -> AppEvent {
        AppEvent::Core(Msg::BatchSettled {
            submission_id,
            outcome: BatchOutcome::Unreachable {
                reason: "network error: connection refused".into(),
            },
        })
    }

    #[test]
    fn closed_input_waits_for_in_flight_submissions() {
        let mut session = Session::new(AppState::new());
        let step = session.handle(AppEvent::Operator("mkdisk -size=10".into()), "12:00:00");
        let submission_id = submitted_id(&step);
        assert!(!step.exit);

        let step = session.handle(AppEvent::InputClosed, "12:00:00");
        assert!(!step.exit);
        assert_eq!(
            step.lines,
            vec!["Input closed; waiting for 1 submission(s) to settle.".to_string()]
        );

        let step = session.handle(settle(submission_id), "12:00:01");
        assert!(step.exit);
        assert_eq!(step.lines.len(), 1);
        assert!(step.lines[0].starts_with("[12:00:01] [error] Error connecting to the engine"));
        assert_eq!(session.pending_submissions(), 0);
    }

    #[test]
    fn closed_input_keeps_going_until_the_last_settlement() {
        let mut session = Session::new(AppState::new());
        let first = submitted_id(&session.handle(AppEvent::Operator("mkdisk".into()), "t"));
        let second = submitted_id(&session.handle(AppEvent::Operator("fdisk".into()), "t"));

        assert!(!session.handle(AppEvent::InputClosed, "t").exit);
        assert!(!session.handle(settle(second), "t").exit);
        assert!(session.handle(settle(first), "t").exit);
    }

    #[test]
    fn closed_input_with_nothing_pending_exits() {
        let mut session = Session::new(AppState::new());
        let step = session.handle(AppEvent::InputClosed, "t");
        assert!(step.exit);
        assert!(step.lines.is_empty());
    }

    #[test]
    fn quit_abandons_in_flight_work() {
        let mut session = Session::new(AppState::new());
        session.handle(AppEvent::Operator("mkdisk".into()), "t");
        let step = session.handle(AppEvent::Operator(":quit".into()), "t");
        assert!(step.exit);
        assert_eq!(session.pending_submissions(), 1);
    }

    #[test]
    fn console_commands_print_without_touching_state() {
        let mut session = Session::new(AppState::new());
        let step = session.handle(AppEvent::Operator(":nope".into()), "t");
        assert_eq!(
            step.lines,
            vec!["Unknown console command :nope (try :help)".to_string()]
        );
        assert!(step.effects.is_empty());
        assert!(!step.exit);
    }
}
