//! Application state and key handling

use campsite_core::campsite::Directory;
use campsite_core::comment::{Comment, CommentForm, Field, SubmitOutcome};
use campsite_core::store::DirectoryStorage;
use campsite_core::types::{CampsiteId, Rating};
use campsite_core::view::{DetailProps, DetailState, DetailView};
use crossterm::event::KeyEvent;
use tracing::debug;

use super::sink::DirectorySink;
use crate::input::{form_action, normal_action, Action, FormAction};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Browsing the detail screen (the comment modal may be open on top)
    #[default]
    Normal,
    /// Help overlay
    Help,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Status message
    pub message: Option<String>,
    /// Should quit
    pub should_quit: bool,
    /// Link followed on exit, if any
    pub navigate_to: Option<String>,
    /// Directory load in flight
    pub is_loading: bool,
    /// Load failure shown instead of content
    pub error_message: Option<String>,
    /// Loaded data
    pub directory: Option<Directory>,
    /// Campsite being shown
    pub campsite_id: CampsiteId,
    /// Comment form bound to the campsite
    pub form: CommentForm,
    /// Focused form field
    pub focus: Field,
    /// Number of comments revealed so far
    pub revealed: usize,
    /// Reveal comments one per tick
    pub animate: bool,
    /// Scroll offset of the comment list
    pub scroll: u16,
    /// Ticks since start, drives the loading spinner
    pub ticks: u64,
    view: DetailView,
}

impl AppState {
    /// Create state for one campsite; starts out loading
    pub fn new(view: DetailView, campsite_id: CampsiteId, animate: bool) -> Self {
        Self {
            mode: AppMode::Normal,
            message: None,
            should_quit: false,
            navigate_to: None,
            is_loading: true,
            error_message: None,
            directory: None,
            campsite_id,
            form: view.comment_form(campsite_id),
            focus: Field::Rating,
            revealed: 0,
            animate,
            scroll: 0,
            ticks: 0,
            view,
        }
    }

    pub fn view(&self) -> &DetailView {
        &self.view
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Enter the loading state
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Apply the result of a directory load
    pub fn on_loaded(&mut self, result: Result<Directory, String>) {
        self.is_loading = false;
        match result {
            Ok(directory) => {
                if directory.campsite(self.campsite_id).is_none() {
                    self.set_message(format!("No campsite with ID {}", self.campsite_id));
                }
                self.directory = Some(directory);
                self.error_message = None;
                self.revealed = if self.animate { 0 } else { usize::MAX };
            }
            Err(message) => {
                self.directory = None;
                self.error_message = Some(message);
            }
        }
    }

    /// Advance animations
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        if !self.is_loading {
            self.revealed = self.revealed.saturating_add(1);
        }
    }

    /// Comments of the shown campsite, if data is loaded
    pub fn comments(&self) -> Option<Vec<Comment>> {
        self.directory
            .as_ref()
            .map(|dir| dir.comments_for(self.campsite_id))
    }

    /// Select the detail view state from the current inputs
    pub fn detail_state(&self) -> DetailState {
        let comments = self.comments();
        let props = DetailProps {
            is_loading: self.is_loading,
            error_message: self.error_message.as_deref(),
            campsite: self
                .directory
                .as_ref()
                .and_then(|dir| dir.campsite(self.campsite_id)),
            comments: comments.as_deref(),
        };
        self.view.select(&props)
    }

    /// Handle a key; returns the screen action applied, if any
    pub fn handle_key(&mut self, key: KeyEvent, storage: &dyn DirectoryStorage) -> Action {
        if self.mode == AppMode::Help {
            self.mode = AppMode::Normal;
            return Action::None;
        }

        if self.form.is_open() {
            self.handle_form_action(form_action(key), storage);
            return Action::None;
        }

        let action = normal_action(key);
        self.handle_action(action);
        action
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ShowHelp => self.mode = AppMode::Help,
            Action::OpenForm => {
                if matches!(self.detail_state(), DetailState::Content(_)) {
                    self.clear_message();
                    self.focus = Field::Rating;
                    self.form.open();
                } else {
                    self.set_message("Nothing to comment on yet");
                }
            }
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::FollowDirectoryLink => {
                debug!("Following {}", self.view.directory_link());
                self.navigate_to = Some(self.view.directory_link().to_string());
                self.should_quit = true;
            }
            Action::Reload => self.begin_loading(),
            Action::None => {}
        }
    }

    fn handle_form_action(&mut self, action: FormAction, storage: &dyn DirectoryStorage) {
        match action {
            FormAction::Cancel => {
                self.form.close();
                self.set_message("Comment discarded");
            }
            FormAction::NextField => {
                self.form.touch_field(self.focus);
                self.focus = self.focus.next();
            }
            FormAction::PrevField => {
                self.form.touch_field(self.focus);
                self.focus = self.focus.prev();
            }
            FormAction::Input(c) => match self.focus {
                Field::Rating => {
                    if c.is_ascii_digit() {
                        self.form.update_field(Field::Rating, c.to_string());
                    }
                }
                field => self.form.push_char(field, c),
            },
            FormAction::Backspace => match self.focus {
                Field::Rating => self.form.select_rating(Rating::UNSELECTED),
                field => self.form.pop_char(field),
            },
            FormAction::RatingUp if self.focus == Field::Rating => {
                let next = self.form.draft().rating.0.saturating_add(1).min(Rating::MAX);
                self.form.select_rating(Rating(next));
            }
            FormAction::RatingDown if self.focus == Field::Rating => {
                let next = self.form.draft().rating.0.saturating_sub(1);
                self.form.select_rating(Rating(next));
            }
            FormAction::Submit => self.submit_form(storage),
            FormAction::RatingUp | FormAction::RatingDown | FormAction::None => {}
        }
    }

    fn submit_form(&mut self, storage: &dyn DirectoryStorage) {
        let Some(directory) = self.directory.as_mut() else {
            return;
        };

        let mut sink = DirectorySink::new(directory, storage);
        match self.form.submit(&mut sink) {
            SubmitOutcome::Submitted => {
                self.focus = Field::Rating;
                self.message = Some(match sink.result {
                    Some(Ok(id)) => format!("Comment #{} added", id),
                    Some(Err(e)) => format!("Comment not saved: {}", e),
                    None => "Comment submitted".to_string(),
                });
            }
            SubmitOutcome::Rejected(_) => {
                self.message = Some("Please fix the highlighted fields".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campsite_core::store::memory::MemoryStorage;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(state: &mut AppState, storage: &dyn DirectoryStorage, s: &str) {
        for c in s.chars() {
            state.handle_key(key(KeyCode::Char(c)), storage);
        }
    }

    fn loaded_state(campsite: u32) -> AppState {
        let mut state = AppState::new(DetailView::default(), CampsiteId(campsite), false);
        state.on_loaded(Ok(Directory::sample()));
        state
    }

    #[test]
    fn test_app_mode_default() {
        assert_eq!(AppMode::default(), AppMode::Normal);
    }

    #[test]
    fn test_starts_loading() {
        let state = AppState::new(DetailView::default(), CampsiteId(0), true);
        assert!(state.is_loading);
        assert_eq!(state.detail_state(), DetailState::Loading);
    }

    #[test]
    fn test_app_state_message() {
        let mut state = loaded_state(0);
        assert!(state.message.is_none());
        state.set_message("Test");
        assert_eq!(state.message, Some("Test".to_string()));
        state.clear_message();
        assert!(state.message.is_none());
    }

    #[test]
    fn test_load_error_becomes_error_state() {
        let mut state = AppState::new(DetailView::default(), CampsiteId(0), false);
        state.on_loaded(Err("Data file not found".to_string()));
        assert_eq!(
            state.detail_state(),
            DetailState::Error("Data file not found".to_string())
        );
    }

    #[test]
    fn test_unknown_campsite_is_empty() {
        let state = loaded_state(42);
        assert_eq!(state.detail_state(), DetailState::Empty);
        assert!(state.message.as_deref().unwrap().contains("42"));
    }

    #[test]
    fn test_open_form_requires_content() {
        let storage = MemoryStorage::new();
        let mut state = AppState::new(DetailView::default(), CampsiteId(0), false);
        state.handle_key(key(KeyCode::Char('c')), &storage);
        assert!(!state.form.is_open());

        state.on_loaded(Ok(Directory::sample()));
        state.handle_key(key(KeyCode::Char('c')), &storage);
        assert!(state.form.is_open());
    }

    #[test]
    fn test_full_submission_flow() {
        let storage = MemoryStorage::new();
        let mut state = loaded_state(1);
        assert!(state.comments().unwrap().is_empty());

        state.handle_key(key(KeyCode::Char('c')), &storage);
        state.handle_key(key(KeyCode::Char('4')), &storage);
        state.handle_key(key(KeyCode::Tab), &storage);
        type_str(&mut state, &storage, "Alice");
        state.handle_key(key(KeyCode::Tab), &storage);
        type_str(&mut state, &storage, "Great river");
        state.handle_key(key(KeyCode::Enter), &storage);

        assert!(!state.form.is_open());
        assert!(state.form.draft().is_empty());
        let comments = state.comments().unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].author, "Alice");
        assert_eq!(comments[0].rating, Rating(4));
        assert_eq!(comments[0].text, "Great river");
        assert_eq!(storage.load().unwrap().comment_count(CampsiteId(1)), 1);
        assert_eq!(state.message.as_deref(), Some("Comment #2 added"));
    }

    #[test]
    fn test_invalid_submission_stays_open() {
        let storage = MemoryStorage::new();
        let mut state = loaded_state(0);

        state.handle_key(key(KeyCode::Char('c')), &storage);
        state.handle_key(key(KeyCode::Tab), &storage);
        type_str(&mut state, &storage, "Al");
        state.handle_key(key(KeyCode::Enter), &storage);
        state.handle_key(key(KeyCode::Enter), &storage);

        assert!(state.form.is_open());
        assert_eq!(state.comments().unwrap().len(), 2);
        assert!(!storage.exists());
        assert_eq!(state.form.visible_errors(Field::Rating), vec!["Please select a rating"]);
    }

    #[test]
    fn test_tab_touches_field() {
        let storage = MemoryStorage::new();
        let mut state = loaded_state(0);
        state.handle_key(key(KeyCode::Char('c')), &storage);
        state.handle_key(key(KeyCode::Tab), &storage);
        assert!(state.form.is_touched(Field::Rating));
        assert!(!state.form.is_touched(Field::Author));
        assert_eq!(state.focus, Field::Author);
    }

    #[test]
    fn test_rating_arrows_clamp() {
        let storage = MemoryStorage::new();
        let mut state = loaded_state(0);
        state.handle_key(key(KeyCode::Char('c')), &storage);
        for _ in 0..7 {
            state.handle_key(key(KeyCode::Right), &storage);
        }
        assert_eq!(state.form.draft().rating, Rating(5));
        state.handle_key(key(KeyCode::Left), &storage);
        assert_eq!(state.form.draft().rating, Rating(4));
        state.handle_key(key(KeyCode::Backspace), &storage);
        assert_eq!(state.form.draft().rating, Rating::UNSELECTED);
    }

    #[test]
    fn test_escape_discards_draft() {
        let storage = MemoryStorage::new();
        let mut state = loaded_state(0);
        state.handle_key(key(KeyCode::Char('c')), &storage);
        state.handle_key(key(KeyCode::Char('3')), &storage);
        state.handle_key(key(KeyCode::Tab), &storage);
        type_str(&mut state, &storage, "Al");
        state.handle_key(key(KeyCode::Esc), &storage);
        assert!(!state.form.is_open());

        state.handle_key(key(KeyCode::Char('c')), &storage);
        assert!(state.form.draft().is_empty());
        assert_eq!(state.focus, Field::Rating);
    }

    #[test]
    fn test_q_types_into_form_instead_of_quitting() {
        let storage = MemoryStorage::new();
        let mut state = loaded_state(0);
        state.handle_key(key(KeyCode::Char('c')), &storage);
        state.handle_key(key(KeyCode::Tab), &storage);
        state.handle_key(key(KeyCode::Char('q')), &storage);
        assert!(!state.should_quit);
        assert_eq!(state.form.draft().author, "q");
    }

    #[test]
    fn test_ctrl_c_cancels_form() {
        let storage = MemoryStorage::new();
        let mut state = loaded_state(0);
        state.handle_key(key(KeyCode::Char('c')), &storage);
        state.handle_key(key(KeyCode::Tab), &storage);
        type_str(&mut state, &storage, "Al");
        state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &storage);
        assert!(!state.form.is_open());
        assert!(!state.should_quit);
        assert!(state.form.draft().is_empty());
    }

    #[test]
    fn test_follow_directory_link() {
        let storage = MemoryStorage::new();
        let mut state = loaded_state(0);
        state.handle_key(key(KeyCode::Char('d')), &storage);
        assert!(state.should_quit);
        assert_eq!(state.navigate_to.as_deref(), Some("/directory"));
    }

    #[test]
    fn test_reload_returns_action() {
        let storage = MemoryStorage::new();
        let mut state = loaded_state(0);
        let action = state.handle_key(key(KeyCode::Char('r')), &storage);
        assert_eq!(action, Action::Reload);
        assert!(state.is_loading);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let storage = MemoryStorage::new();
        let mut state = loaded_state(0);
        state.handle_key(key(KeyCode::Char('?')), &storage);
        assert_eq!(state.mode, AppMode::Help);
        state.handle_key(key(KeyCode::Char('x')), &storage);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_staggered_reveal() {
        let mut state = AppState::new(DetailView::default(), CampsiteId(0), true);
        state.tick();
        assert_eq!(state.revealed, 0);
        state.on_loaded(Ok(Directory::sample()));
        assert_eq!(state.revealed, 0);
        state.tick();
        state.tick();
        assert_eq!(state.revealed, 2);
    }
}
