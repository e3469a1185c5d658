//! Application state and main app structure

mod sink;
mod state;

pub use sink::DirectorySink;
pub use state::{AppMode, AppState};

use anyhow::Result;
use campsite_core::store::DirectoryStorage;
use campsite_core::types::CampsiteId;
use campsite_core::view::DetailView;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::components;
use crate::events::{spawn_loader, Event};
use crate::input::Action;
use crate::theme::Theme;

/// Detail screen application
pub struct App {
    /// Application state
    pub state: AppState,
    storage: Arc<dyn DirectoryStorage>,
    tx: Sender<Event>,
    rx: Receiver<Event>,
    tick_rate: Duration,
    theme: Theme,
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create the app for one campsite and start loading the directory
    pub fn new(
        view: DetailView,
        campsite_id: CampsiteId,
        storage: Arc<dyn DirectoryStorage>,
        animate: bool,
        tick_rate: Duration,
    ) -> Result<Self> {
        // Install panic hook to restore terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let (tx, rx) = mpsc::channel();
        let mut app = Self {
            state: AppState::new(view, campsite_id, animate),
            storage,
            tx,
            rx,
            tick_rate,
            theme: Theme::default(),
            terminal,
        };
        app.load();
        Ok(app)
    }

    /// Run the main loop; returns the link followed on exit, if any
    pub fn run(&mut self) -> Result<Option<String>> {
        let mut last_tick = Instant::now();

        loop {
            self.draw()?;

            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    event::Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                        self.handle_event(Event::Input(key));
                    }
                    event::Event::Resize(w, h) => self.handle_event(Event::Resize(w, h)),
                    _ => {}
                }
            }

            while let Ok(event) = self.rx.try_recv() {
                self.handle_event(event);
            }

            if last_tick.elapsed() >= self.tick_rate {
                self.handle_event(Event::Tick);
                last_tick = Instant::now();
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(self.state.navigate_to.clone())
    }

    fn load(&mut self) {
        self.state.begin_loading();
        let storage = Arc::clone(&self.storage);
        spawn_loader(self.tx.clone(), move || storage.load());
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Input(key) => {
                if self.state.handle_key(key, self.storage.as_ref()) == Action::Reload {
                    self.load();
                }
            }
            Event::DataLoaded(result) => self.state.on_loaded(result),
            Event::Tick => self.state.tick(),
            Event::Resize(..) => {}
        }
    }

    fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        let theme = &self.theme;
        self.terminal
            .draw(|frame| components::render(frame, state, theme))?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
