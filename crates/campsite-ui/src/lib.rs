//! campsite-ui - TUI library for campsite-info
//!
//! This crate provides the terminal detail view for a single campsite.
//!
//! # Overview
//!
//! The TUI provides:
//! - Breadcrumb, heading, image card and description
//! - Comment list revealed one entry per tick
//! - Comment form modal with per-field validation
//! - Status bar and help overlay
//!
//! # Example
//!
//! ```ignore
//! use campsite_ui::App;
//!
//! let mut app = App::new(view, campsite_id, storage, true, tick_rate)?;
//! let navigate_to = app.run()?;
//! ```

pub mod app;
pub mod components;
pub mod events;
pub mod input;
pub mod layout;
pub mod theme;

pub use app::{App, AppMode, AppState};
