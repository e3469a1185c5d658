//! Comment data models

use crate::types::{CampsiteId, CommentId, Rating};
use serde::{Deserialize, Serialize};

/// A visitor comment on a campsite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Campsite this comment belongs to
    pub campsite_id: CampsiteId,
    /// Star rating, 1 through 5
    pub rating: Rating,
    /// Comment body
    pub text: String,
    /// Display name of the author
    pub author: String,
    /// Creation timestamp as stored (see [`super::date`])
    pub date: String,
}

impl Comment {
    /// Formatted attribution line, e.g. `-- Ann Oct 25, 2018`
    pub fn byline(&self) -> String {
        format!("-- {} {}", self.author, super::date::format_comment_date(&self.date))
    }
}

/// Values handed from the comment form to its host on a valid submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSubmission {
    /// Campsite the form was opened for
    pub campsite_id: CampsiteId,
    /// Selected rating
    pub rating: Rating,
    /// Author name as entered
    pub author: String,
    /// Comment body as entered
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_comment() -> Comment {
        Comment {
            id: CommentId(0),
            campsite_id: CampsiteId(0),
            rating: Rating(5),
            text: "What a magnificent view!".to_string(),
            author: "Tinus Lorvaldes".to_string(),
            date: "2018-10-25T16:30Z".to_string(),
        }
    }

    #[test]
    fn test_byline() {
        let comment = create_test_comment();
        assert_eq!(comment.byline(), "-- Tinus Lorvaldes Oct 25, 2018");
    }

    #[test]
    fn test_comment_json_uses_camel_case() {
        let comment = create_test_comment();
        let json = serde_json::to_string(&comment).unwrap();
        assert!(json.contains("\"campsiteId\":0"));
        assert!(json.contains("\"rating\":5"));

        let back: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, comment);
    }
}
