//! Core type definitions for campsite-info

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a campsite in the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampsiteId(pub u32);

impl CampsiteId {
    /// Parse from a command-line or route segment
    pub fn parse(s: &str) -> crate::Result<Self> {
        s.trim().parse::<u32>().map(CampsiteId).map_err(|_| {
            crate::CampsiteError::Validation(format!("Invalid campsite ID: {}", s))
        })
    }
}

impl fmt::Display for CampsiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a comment; assigned by the directory, never by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u32);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating attached to a comment
///
/// `0` is the "unselected" sentinel used by the form; only `1..=5` is valid
/// for a stored comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(pub u8);

impl Rating {
    /// The "Select..." sentinel
    pub const UNSELECTED: Rating = Rating(0);
    /// Lowest valid rating
    pub const MIN: u8 = 1;
    /// Highest valid rating
    pub const MAX: u8 = 5;

    /// Check whether this rating may be submitted
    pub fn is_selected(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }

    /// Parse a rating from user input; anything unparsable is the sentinel
    pub fn parse_lenient(s: &str) -> Self {
        s.trim().parse::<u8>().map(Rating).unwrap_or(Self::UNSELECTED)
    }

    /// Render as filled/empty stars
    pub fn stars(&self) -> String {
        let filled = self.0.min(Self::MAX) as usize;
        let empty = Self::MAX as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
