use crate::app::{
    action::Action,
    state::{AppMode, AppState},
};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

pub fn map_event_to_action(event: Event, app_state: &AppState<'_>) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
    }

    match app_state.mode() {
        AppMode::Terminal => match event {
            Event::Key(key) => match key.code {
                KeyCode::Enter => Some(Action::SubmitInput),
                KeyCode::Up => Some(Action::RecallPrevious),
                KeyCode::Down => Some(Action::RecallNext),
                KeyCode::Esc => Some(Action::DeactivateTerminal),
                // Single-line input: no newlines, no tab characters
                KeyCode::Tab | KeyCode::BackTab => None,
                KeyCode::Char('\n' | '\r') => None,
                // tui-textarea inserts a line break on these
                KeyCode::Char('m' | 'j') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
                _ => Some(Action::TextAreaInput(key)),
            },
            _ => None,
        },
        AppMode::Page => match event {
            Event::Key(key) => app_state.keymap.get_action(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(Action::ScrollDown(3)),
                MouseEventKind::ScrollUp => Some(Action::ScrollUp(3)),
                _ => None,
            },
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_page_bindings() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('t')), &state),
            Some(Action::ActivateTerminal)
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('q')), &state),
            Some(Action::Quit)
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Down), &state),
            Some(Action::ScrollDown(1))
        );
    }

    #[test]
    fn test_terminal_bindings() {
        let mut state = AppState::default();
        state.overlay.activate();

        // The activation key is plain text once the overlay is up
        assert!(matches!(
            map_event_to_action(press(KeyCode::Char('t')), &state),
            Some(Action::TextAreaInput(_))
        ));
        assert!(matches!(
            map_event_to_action(press(KeyCode::Char('q')), &state),
            Some(Action::TextAreaInput(_))
        ));
        assert_eq!(
            map_event_to_action(press(KeyCode::Enter), &state),
            Some(Action::SubmitInput)
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Up), &state),
            Some(Action::RecallPrevious)
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Down), &state),
            Some(Action::RecallNext)
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Esc), &state),
            Some(Action::DeactivateTerminal)
        );
    }

    #[test]
    fn test_line_breaks_never_reach_the_input() {
        let mut state = AppState::default();
        state.overlay.activate();

        let ctrl = |c| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
        assert_eq!(map_event_to_action(ctrl('m'), &state), None);
        assert_eq!(map_event_to_action(ctrl('j'), &state), None);
        assert_eq!(map_event_to_action(press(KeyCode::Char('\n')), &state), None);
        assert_eq!(map_event_to_action(press(KeyCode::Char('\r')), &state), None);
        assert_eq!(map_event_to_action(press(KeyCode::Tab), &state), None);

        // Other control chords still edit the line
        assert!(matches!(
            map_event_to_action(ctrl('a'), &state),
            Some(Action::TextAreaInput(_))
        ));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = AppState::default();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event_to_action(ctrl_c.clone(), &state), Some(Action::Quit));
        state.overlay.activate();
        assert_eq!(map_event_to_action(ctrl_c, &state), Some(Action::Quit));
    }

    #[test]
    fn test_release_events_are_dropped() {
        let state = AppState::default();
        let mut key = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(key), &state), None);
    }
}
