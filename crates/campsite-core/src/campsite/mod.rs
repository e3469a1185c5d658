//! Campsite directory module

mod directory;
mod model;

pub use directory::Directory;
pub use model::Campsite;
