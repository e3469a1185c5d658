//! campsite-info - Campsite details in the terminal
//!
//! Shows one campsite with its comments and lets you add a comment through a
//! validated form.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write sample data and a default config
//! campsite-info init
//!
//! # See what is there
//! campsite-info list
//!
//! # Open the detail screen
//! campsite-info show 0
//!
//! # Comment without the TUI
//! campsite-info comment 0 --rating 5 --author Alice --text "Great views"
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
