use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    /// Opens the terminal overlay from the page.
    pub activation: char,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self { activation: 't' }
    }
}

/// Page-mode bindings. The overlay reads raw keys instead, see `input.rs`.
#[derive(Debug)]
pub struct KeyMap {
    pub activation: char,
    pub page: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut page = HashMap::new();

        page.insert(key(KeyCode::Char('q')), Action::Quit);
        page.insert(key(KeyCode::Char('j')), Action::ScrollDown(1));
        page.insert(key(KeyCode::Down), Action::ScrollDown(1));
        page.insert(key(KeyCode::Char('k')), Action::ScrollUp(1));
        page.insert(key(KeyCode::Up), Action::ScrollUp(1));
        page.insert(key(KeyCode::PageDown), Action::ScrollDown(10));
        page.insert(key(KeyCode::PageUp), Action::ScrollUp(10));
        page.insert(key(KeyCode::Char('g')), Action::ScrollTop);
        page.insert(key(KeyCode::Home), Action::ScrollTop);
        // Inserted last so a custom activation key wins over the defaults
        page.insert(key(KeyCode::Char(config.activation)), Action::ActivateTerminal);

        Self {
            activation: config.activation,
            page,
        }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        // Drop kind/state so key repeats hit the same binding
        let normalized = KeyEvent::new(event.code, event.modifiers);
        self.page.get(&normalized).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_activation_key() {
        let keymap = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(
            keymap.get_action(key(KeyCode::Char('t'))),
            Some(Action::ActivateTerminal)
        );
        assert_eq!(keymap.get_action(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_custom_activation_key_overrides_binding() {
        let keymap = KeyMap::from_config(&KeyConfig { activation: 'g' });
        assert_eq!(
            keymap.get_action(key(KeyCode::Char('g'))),
            Some(Action::ActivateTerminal)
        );
        assert_eq!(keymap.get_action(key(KeyCode::Char('t'))), None);
    }

    #[test]
    fn test_state_fields_are_ignored() {
        let keymap = KeyMap::from_config(&KeyConfig::default());
        let mut event = key(KeyCode::Char('q'));
        event.kind = crossterm::event::KeyEventKind::Repeat;
        assert_eq!(keymap.get_action(event), Some(Action::Quit));
    }
}
