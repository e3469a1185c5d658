//! Campsite data model

use crate::types::CampsiteId;
use serde::{Deserialize, Serialize};

/// A campsite listed in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campsite {
    pub id: CampsiteId,
    pub name: String,
    /// Image reference relative to the asset base path
    pub image: String,
    #[serde(default)]
    pub elevation: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{"id":1,"name":"Chrome River","image":"images/chrome-river.jpg","description":"Rafting"}"#;
        let campsite: Campsite = serde_json::from_str(json).unwrap();
        assert_eq!(campsite.id, CampsiteId(1));
        assert_eq!(campsite.elevation, None);
        assert!(!campsite.featured);
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{"id":0,"name":"React Lake Campground","image":"images/react-lake.jpg","elevation":1233,"featured":false,"description":"Nestled in the foothills"}"#;
        let campsite: Campsite = serde_json::from_str(json).unwrap();
        assert_eq!(campsite.elevation, Some(1233));
    }
}
