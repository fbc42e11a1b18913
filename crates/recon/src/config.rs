use serde::Deserialize;

use crate::error::LinkError;
use crate::layout::Category;

pub const DEFAULT_BASE_URL: &str = "https://www.dropbox.com/home";
pub const DEFAULT_BAD_MATCH_THRESHOLD: f64 = 0.85;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    #[serde(default)]
    pub name: String,
    /// URL prefix that replaces the local mount point.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Fail the batch on a malformed path instead of dropping the record.
    #[serde(default)]
    pub strict_paths: bool,
    /// Fuzzy matches scoring at or below this are flagged for review.
    #[serde(default = "default_threshold")]
    pub bad_match_threshold: f64,
    #[serde(default)]
    pub ranges: Vec<RangeConfig>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_url: default_base_url(),
            strict_paths: false,
            bad_match_threshold: default_threshold(),
            ranges: Vec::new(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_threshold() -> f64 {
    DEFAULT_BAD_MATCH_THRESHOLD
}

// ---------------------------------------------------------------------------
// Title ranges
// ---------------------------------------------------------------------------

/// Half-open range of title rows resolved against one category's links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RangeConfig {
    pub category: Category,
    pub start: usize,
    pub end: usize,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl LinkConfig {
    pub fn from_toml(input: &str) -> Result<Self, LinkError> {
        let mut config: LinkConfig =
            toml::from_str(input).map_err(|e| LinkError::ConfigParse(e.to_string()))?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LinkError> {
        if self.base_url.is_empty() {
            return Err(LinkError::ConfigValidation("base_url must not be empty".into()));
        }

        if !(0.0..=1.0).contains(&self.bad_match_threshold) {
            return Err(LinkError::ConfigValidation(format!(
                "bad_match_threshold must be within [0, 1], got {}",
                self.bad_match_threshold
            )));
        }

        for (i, range) in self.ranges.iter().enumerate() {
            if range.start > range.end {
                return Err(LinkError::ConfigValidation(format!(
                    "range #{}: start {} is after end {}",
                    i + 1,
                    range.start,
                    range.end
                )));
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
