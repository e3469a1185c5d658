//! campsite-storage - Storage library for campsite-info
//!
//! This crate provides storage implementations for the campsite directory.

mod directory_store;

pub use directory_store::{FileSystemStorage, DATA_FILE_NAME};
