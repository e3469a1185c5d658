//! Event handling

use campsite_core::campsite::Directory;
use crossterm::event::KeyEvent;
use std::sync::mpsc::Sender;
use std::thread;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Input(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick
    Tick,
    /// Background load finished
    DataLoaded(Result<Directory, String>),
}

/// Run a directory load off the UI thread and report back as [`Event::DataLoaded`]
pub fn spawn_loader<F>(tx: Sender<Event>, load: F) -> thread::JoinHandle<()>
where
    F: FnOnce() -> campsite_core::Result<Directory> + Send + 'static,
{
    thread::spawn(move || {
        let result = load().map_err(|e| e.to_string());
        if let Err(e) = &result {
            tracing::warn!("Directory load failed: {}", e);
        }
        // receiver gone means the app already quit
        let _ = tx.send(Event::DataLoaded(result));
    })
}
