//! Image reference resolution

use crate::config::AssetConfig;

/// Prefixes campsite image references with the host's asset base path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetResolver {
    base_url: String,
}

impl AssetResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AssetConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an image reference; absolute URLs pass through untouched
    pub fn resolve(&self, image: &str) -> String {
        if self.base_url.is_empty() || is_absolute(image) {
            return image.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            image.trim_start_matches('/')
        )
    }
}

fn is_absolute(image: &str) -> bool {
    image.starts_with("http://") || image.starts_with("https://")
}
