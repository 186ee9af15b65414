use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            return None;
        }
        // Only wakes the loop for a redraw
        Action::Tick => return None,
        _ => {}
    }

    if let UpdateResult::Handled(command) = features::terminal::update(state, &action) {
        return command;
    }
    if let UpdateResult::Handled(command) = features::page::update(state, &action) {
        return command;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_and_tick() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::Tick), None);
        assert!(!state.should_quit);

        assert_eq!(update(&mut state, Action::Quit), None);
        assert!(state.should_quit);
    }

    #[test]
    fn test_routes_to_features() {
        let mut state = AppState::default();
        assert_eq!(
            update(&mut state, Action::PollNowPlaying),
            Some(Command::FetchNowPlaying)
        );
        update(&mut state, Action::ScrollDown(2));
        assert_eq!(state.page_scroll, 2);
        update(&mut state, Action::ActivateTerminal);
        assert!(state.overlay.is_active());
    }
}
