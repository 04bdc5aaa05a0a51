//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    NewItem,
    EditItem,
    DeleteItem,
    OpenSearch,
    OpenHelp,
    Refresh,
    GeneratePlan,
    SavePlan,
    DiscardPlan,
    EditPlan,
    OpenProfile,
    Logout,
}

/// Normal-mode keymap. Text-entry screens consume raw key events instead.
pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('n') => Some(Action::NewItem),
        KeyCode::Char('e') => Some(Action::EditItem),
        KeyCode::Char('d') => Some(Action::DeleteItem),
        KeyCode::Char('g') => Some(Action::GeneratePlan),
        KeyCode::Char('s') => Some(Action::SavePlan),
        KeyCode::Char('u') => Some(Action::DiscardPlan),
        KeyCode::Char('i') => Some(Action::EditPlan),
        KeyCode::Char('p') => Some(Action::OpenProfile),
        KeyCode::Char('L') => Some(Action::Logout),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        _ => None,
    }
}
