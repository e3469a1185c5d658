//! Host-side campsite directory
//!
//! The directory owns the authoritative comment list. It is the usual
//! [`CommentSink`](crate::comment::CommentSink) target: it assigns the id and
//! timestamp of each submitted comment and appends it.

use super::model::Campsite;
use crate::comment::date;
use crate::comment::{Comment, CommentSubmission};
use crate::error::{CampsiteError, Result};
use crate::types::{CampsiteId, CommentId, Rating};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Campsites and their comments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Directory {
    pub campsites: Vec<Campsite>,
    pub comments: Vec<Comment>,
}

impl Directory {
    pub fn new(campsites: Vec<Campsite>, comments: Vec<Comment>) -> Self {
        Self { campsites, comments }
    }

    /// Seed data written by `campsite-info init`
    pub fn sample() -> Self {
        Directory::new(
            vec![
                Campsite {
                    id: CampsiteId(0),
                    name: "React Lake Campground".to_string(),
                    image: "images/react-lake.jpg".to_string(),
                    elevation: Some(1233),
                    featured: false,
                    description: "Nestled in the foothills of the Chrome Mountains.".to_string(),
                },
                Campsite {
                    id: CampsiteId(1),
                    name: "Chrome River".to_string(),
                    image: "images/chrome-river.jpg".to_string(),
                    elevation: Some(877),
                    featured: false,
                    description: "Spend a few sunny days and starry nights beneath a canopy.".to_string(),
                },
            ],
            vec![
                Comment {
                    id: CommentId(0),
                    campsite_id: CampsiteId(0),
                    rating: Rating(5),
                    text: "What a magnificent view!".to_string(),
                    author: "Tinus Lorvaldes".to_string(),
                    date: "2018-10-25T16:30Z".to_string(),
                },
                Comment {
                    id: CommentId(1),
                    campsite_id: CampsiteId(0),
                    rating: Rating(4),
                    text: "This place should be a national park!".to_string(),
                    author: "Brennan Eich".to_string(),
                    date: "2019-11-25T16:30Z".to_string(),
                },
            ],
        )
    }

    /// Look up a campsite
    pub fn campsite(&self, id: CampsiteId) -> Option<&Campsite> {
        self.campsites.iter().find(|c| c.id == id)
    }

    /// Comments for a campsite, in stored order
    pub fn comments_for(&self, id: CampsiteId) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.campsite_id == id)
            .cloned()
            .collect()
    }

    /// Number of comments on a campsite
    pub fn comment_count(&self, id: CampsiteId) -> usize {
        self.comments.iter().filter(|c| c.campsite_id == id).count()
    }

    /// Id for the next stored comment
    ///
    /// Follows the list length, bumped past the highest existing id so ids
    /// stay unique after hand edits. `None` once the id space is used up.
    pub fn next_comment_id(&self) -> Option<CommentId> {
        let by_len = u32::try_from(self.comments.len()).ok()?;
        let past_max = match self.comments.iter().map(|c| c.id.0).max() {
            Some(max) => max.checked_add(1)?,
            None => 0,
        };
        Some(CommentId(by_len.max(past_max)))
    }

    /// Store a submission, stamping it with the current time
    pub fn add_comment(&mut self, submission: CommentSubmission) -> Result<&Comment> {
        self.add_comment_at(submission, Utc::now())
    }

    /// Store a submission with an explicit timestamp
    pub fn add_comment_at(
        &mut self,
        submission: CommentSubmission,
        now: DateTime<Utc>,
    ) -> Result<&Comment> {
        if self.campsite(submission.campsite_id).is_none() {
            return Err(CampsiteError::CampsiteNotFound(
                submission.campsite_id.to_string(),
            ));
        }
        if !submission.rating.is_selected() {
            return Err(CampsiteError::Validation(format!(
                "Rating must be between 1 and 5, got {}",
                submission.rating
            )));
        }

        let id = self.next_comment_id().ok_or_else(|| {
            CampsiteError::Validation("No comment ids left in this directory".to_string())
        })?;

        let comment = Comment {
            id,
            campsite_id: submission.campsite_id,
            rating: submission.rating,
            text: submission.text,
            author: submission.author,
            date: date::timestamp(now),
        };
        info!(id = %comment.id, campsite = %comment.campsite_id, "Comment stored");

        let index = self.comments.len();
        self.comments.push(comment);
        Ok(&self.comments[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn submission(campsite: u32, rating: u8) -> CommentSubmission {
        CommentSubmission {
            campsite_id: CampsiteId(campsite),
            rating: Rating(rating),
            author: "Alice".to_string(),
            text: "Lovely".to_string(),
        }
    }

    #[test]
    fn test_lookup() {
        let dir = Directory::sample();
        assert_eq!(dir.campsite(CampsiteId(1)).unwrap().name, "Chrome River");
        assert!(dir.campsite(CampsiteId(9)).is_none());
        assert_eq!(dir.comments_for(CampsiteId(0)).len(), 2);
        assert!(dir.comments_for(CampsiteId(1)).is_empty());
        assert_eq!(dir.comment_count(CampsiteId(0)), 2);
    }

    #[test]
    fn test_add_comment_assigns_id_and_date() {
        let mut dir = Directory::sample();
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();

        let stored = dir.add_comment_at(submission(1, 5), now).unwrap().clone();

        assert_eq!(stored.id, CommentId(2));
        assert_eq!(stored.date, "2026-10-16T09:00:00.000Z");
        assert_eq!(stored.author, "Alice");
        assert_eq!(dir.comments_for(CampsiteId(1)), vec![stored]);
    }

    #[test]
    fn test_add_comment_appends_in_order() {
        let mut dir = Directory::sample();
        dir.add_comment(submission(0, 3)).unwrap();
        let ids: Vec<_> = dir.comments_for(CampsiteId(0)).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CommentId(0), CommentId(1), CommentId(2)]);
    }

    #[test]
    fn test_next_id_skips_existing() {
        let mut dir = Directory::sample();
        dir.comments[0].id = CommentId(10);
        assert_eq!(dir.next_comment_id(), Some(CommentId(11)));
    }

    #[test]
    fn test_next_id_exhausted_at_max() {
        let mut dir = Directory::sample();
        dir.comments[1].id = CommentId(u32::MAX);
        assert_eq!(dir.next_comment_id(), None);

        let err = dir.add_comment(submission(0, 4)).unwrap_err();
        assert!(matches!(err, CampsiteError::Validation(_)));
        assert_eq!(dir.comments.len(), 2);
    }

    #[test]
    fn test_add_comment_unknown_campsite() {
        let mut dir = Directory::sample();
        let err = dir.add_comment(submission(42, 3)).unwrap_err();
        assert!(matches!(err, CampsiteError::CampsiteNotFound(_)));
        assert_eq!(dir.comments.len(), 2);
    }

    #[test]
    fn test_add_comment_rejects_unselected_rating() {
        let mut dir = Directory::sample();
        assert!(dir.add_comment(submission(0, 0)).is_err());
    }

    #[test]
    fn test_directory_serialization() {
        let dir = Directory::sample();
        let json = serde_json::to_string_pretty(&dir).unwrap();
        assert!(json.contains("\"campsiteId\""));
        let back: Directory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dir);
    }
}
