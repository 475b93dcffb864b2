use super::action::Action;
use super::state::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    // Maps Mode -> (Key -> Action). Search mode is not table-driven:
    // everything not intercepted there flows into the text area.
    pub results: HashMap<KeyEvent, Action>,
    pub detail: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn standard() -> Self {
        let mut results = HashMap::new();
        let mut detail = HashMap::new();

        // --- Results Mode ---
        results.insert(key(KeyCode::Char('q')), Action::Quit);
        results.insert(ctrl('c'), Action::Quit);
        results.insert(key(KeyCode::Char('j')), Action::SelectNextRow);
        results.insert(key(KeyCode::Down), Action::SelectNextRow);
        results.insert(key(KeyCode::Char('k')), Action::SelectPrevRow);
        results.insert(key(KeyCode::Up), Action::SelectPrevRow);
        results.insert(key(KeyCode::Char('h')), Action::SelectPrevSwatch);
        results.insert(key(KeyCode::Left), Action::SelectPrevSwatch);
        results.insert(key(KeyCode::Char('l')), Action::SelectNextSwatch);
        results.insert(key(KeyCode::Right), Action::SelectNextSwatch);
        results.insert(key(KeyCode::Enter), Action::OpenDetail);
        results.insert(key(KeyCode::Char('/')), Action::FocusSearch);
        results.insert(key(KeyCode::Char('i')), Action::FocusSearch);
        results.insert(key(KeyCode::Tab), Action::FocusSearch);
        results.insert(key(KeyCode::Char('?')), Action::ToggleHelp);
        results.insert(key(KeyCode::Esc), Action::CancelMode);

        // --- Detail Mode ---
        detail.insert(key(KeyCode::Esc), Action::CloseDetail);
        detail.insert(key(KeyCode::Char('q')), Action::CloseDetail);
        detail.insert(key(KeyCode::Enter), Action::CloseDetail);
        detail.insert(ctrl('c'), Action::Quit);

        Self { results, detail }
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        match mode {
            AppMode::Results => self.results.get(&event).cloned(),
            AppMode::Detail => self.detail.get(&event).cloned(),
            _ => None,
        }
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
