use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::AppState,
};
use crate::domain::terminal::Dispatch;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ActivateTerminal => {
            if state.overlay.activate() {
                state.input.set_text("");
            }
            UpdateResult::Handled(None)
        }
        Action::DeactivateTerminal => {
            if !state.overlay.is_busy() {
                state.overlay.deactivate();
            }
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) => {
            if state.overlay.is_active() && !state.overlay.is_busy() {
                state.input.input(*key);
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitInput => {
            if state.overlay.is_busy() {
                return UpdateResult::Handled(None);
            }
            let line = state.input.take_text();
            let command = match state.overlay.submit(&line) {
                Dispatch::AnimationStarted { id, delay } => Some(Command::ScheduleFrame { id, delay }),
                Dispatch::Ignored | Dispatch::Busy | Dispatch::Completed | Dispatch::Exited => None,
            };
            UpdateResult::Handled(command)
        }
        Action::RecallPrevious => {
            if !state.overlay.is_busy() {
                if let Some(entry) = state.overlay.recall_previous() {
                    state.input.set_text(&entry);
                }
            }
            UpdateResult::Handled(None)
        }
        Action::RecallNext => {
            if !state.overlay.is_busy() {
                let entry = state.overlay.recall_next();
                state.input.set_text(&entry);
            }
            UpdateResult::Handled(None)
        }
        Action::AnimationTick(id) => {
            let command = state
                .overlay
                .advance_animation(*id)
                .map(|delay| Command::ScheduleFrame { id: *id, delay });
            UpdateResult::Handled(command)
        }
        Action::AnimationFailed { id, message } => {
            if !state.overlay.report_failure(*id, message) {
                log::debug!("Ignoring failure of finished animation {id:?}");
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
