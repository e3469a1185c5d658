//! Host-side submission sink

use campsite_core::campsite::Directory;
use campsite_core::comment::{CommentSink, CommentSubmission};
use campsite_core::store::DirectoryStorage;
use campsite_core::types::CommentId;
use tracing::{info, warn};

/// Stores submitted comments in the loaded directory and persists it
pub struct DirectorySink<'a> {
    directory: &'a mut Directory,
    storage: &'a dyn DirectoryStorage,
    /// Outcome of the last submission, if any
    pub result: Option<Result<CommentId, String>>,
}

impl<'a> DirectorySink<'a> {
    pub fn new(directory: &'a mut Directory, storage: &'a dyn DirectoryStorage) -> Self {
        Self {
            directory,
            storage,
            result: None,
        }
    }
}

impl CommentSink for DirectorySink<'_> {
    fn submit_comment(&mut self, submission: CommentSubmission) {
        // Only a saved directory replaces the loaded one
        let mut updated = self.directory.clone();
        let result = match updated.add_comment(submission) {
            Ok(comment) => {
                let id = comment.id;
                self.storage.save(&updated).map(|_| id)
            }
            Err(e) => Err(e),
        };
        if result.is_ok() {
            *self.directory = updated;
        }

        match &result {
            Ok(id) => info!(%id, "Comment saved"),
            Err(e) => warn!("Failed to save comment: {}", e),
        }
        self.result = Some(result.map_err(|e| e.to_string()));
    }
}
