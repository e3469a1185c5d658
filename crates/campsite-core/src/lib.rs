//! campsite-core - Core library for campsite-info
//!
//! This crate provides the logic behind the campsite detail screen: the data
//! model, the detail view's state selection, the comment form state machine
//! with its validator table, and the host-side directory that stores
//! submitted comments.

pub mod error;
pub mod types;
pub mod config;
pub mod campsite;
pub mod comment;
pub mod store;
pub mod view;

pub use error::{CampsiteError, Result};
pub use types::*;
