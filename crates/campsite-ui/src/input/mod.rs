//! Input handling
//!
//! Key events are mapped to actions here; [`crate::app::AppState`] applies them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action on the detail screen while the form is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ShowHelp,
    OpenForm,
    ScrollDown,
    ScrollUp,
    /// Follow the breadcrumb's parent link
    FollowDirectoryLink,
    Reload,
    None,
}

/// Action inside the comment form modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Cancel,
    NextField,
    PrevField,
    Input(char),
    Backspace,
    RatingUp,
    RatingDown,
    Submit,
    None,
}

/// Map a key while the form is closed
pub fn normal_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::ShowHelp,
        KeyCode::Char('c') | KeyCode::Enter => Action::OpenForm,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Char('d') | KeyCode::Backspace => Action::FollowDirectoryLink,
        KeyCode::Char('r') => Action::Reload,
        _ => Action::None,
    }
}

/// Map a key while the form is open
pub fn form_action(key: KeyEvent) -> FormAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => FormAction::Cancel,
        KeyCode::Esc => FormAction::Cancel,
        KeyCode::Tab => FormAction::NextField,
        KeyCode::BackTab => FormAction::PrevField,
        KeyCode::Enter => FormAction::Submit,
        KeyCode::Backspace => FormAction::Backspace,
        KeyCode::Right | KeyCode::Up => FormAction::RatingUp,
        KeyCode::Left | KeyCode::Down => FormAction::RatingDown,
        KeyCode::Char(c) => FormAction::Input(c),
        _ => FormAction::None,
    }
}
