//! Ranking configuration
//!
//! All knobs are explicit parameters of a ranking call. The position cap and
//! the recency threshold are heuristics carried over from the upstream
//! search integration and are kept configurable for that reason.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_RECENCY_YEAR_THRESHOLD: i64 = 2020;
pub const DEFAULT_POSITION_CAP: i64 = 1000;

/// Upper bound on how many results the fetch layer asks for when
/// over-fetching to survive the availability filter.
pub const MAX_FETCH_LIMIT: usize = 50;
pub const OVERFETCH_FACTOR: usize = 3;

pub const DEFAULT_DIRECT_SIGNAL_FIELDS: [&str; 4] =
    ["popularity_total", "popularity_month", "likes", "listens"];

/// Source tags of the built-in tiers. A direct signal field with one of
/// these names would share its diagnostics count with that tier.
pub const RESERVED_SOURCE_TAGS: [&str; 3] = ["position_inverted", "release_year", "fallback_rank"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankConfig {
    /// Number of results to return
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Popularity-like fields, highest priority first
    #[serde(default = "default_direct_signal_fields")]
    pub direct_signal_fields: Vec<String>,

    /// Oldest release year the recency tier accepts
    #[serde(default = "default_recency_year_threshold")]
    pub recency_year_threshold: i64,

    /// Inverted position score is `position_cap - position`
    #[serde(default = "default_position_cap")]
    pub position_cap: i64,

    /// Drop tracks that cannot be streamed and downloaded before scoring
    #[serde(default)]
    pub filter_available: bool,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_direct_signal_fields() -> Vec<String> {
    DEFAULT_DIRECT_SIGNAL_FIELDS
        .iter()
        .map(|f| f.to_string())
        .collect()
}

fn default_recency_year_threshold() -> i64 {
    DEFAULT_RECENCY_YEAR_THRESHOLD
}

fn default_position_cap() -> i64 {
    DEFAULT_POSITION_CAP
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            direct_signal_fields: default_direct_signal_fields(),
            recency_year_threshold: default_recency_year_threshold(),
            position_cap: default_position_cap(),
            filter_available: false,
        }
    }
}

impl RankConfig {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_direct_signal_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.direct_signal_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_recency_year_threshold(mut self, year: i64) -> Self {
        self.recency_year_threshold = year;
        self
    }

    pub fn with_position_cap(mut self, cap: i64) -> Self {
        self.position_cap = cap;
        self
    }

    pub fn with_filter_available(mut self, enabled: bool) -> Self {
        self.filter_available = enabled;
        self
    }

    /// Validate the configuration
    /// - `top_k` must be positive
    /// - no direct signal field may use a reserved source tag
    ///
    /// An empty `direct_signal_fields` list is accepted; the direct signal
    /// tier then never applies.
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::InvalidConfig("top_k must be positive".to_string()));
        }
        if let Some(field) = self
            .direct_signal_fields
            .iter()
            .find(|f| RESERVED_SOURCE_TAGS.contains(&f.as_str()))
        {
            return Err(Error::InvalidConfig(format!(
                "direct signal field '{}' collides with a reserved source tag",
                field
            )));
        }
        Ok(())
    }

    /// How many results the fetch layer should request so that `top_k`
    /// remain after the availability filter.
    pub fn fetch_limit(&self) -> usize {
        if self.filter_available {
            (self.top_k * OVERFETCH_FACTOR).min(MAX_FETCH_LIMIT)
        } else {
            self.top_k
        }
    }

    /// Load and validate a JSON config file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: RankConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RankConfig::default();
        assert_eq!(config.top_k, 5);
        assert_eq!(
            config.direct_signal_fields,
            vec!["popularity_total", "popularity_month", "likes", "listens"]
        );
        assert_eq!(config.recency_year_threshold, 2020);
        assert_eq!(config.position_cap, 1000);
        assert!(!config.filter_available);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let config = RankConfig::default().with_top_k(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_reserved_signal_field_rejected() {
        for tag in RESERVED_SOURCE_TAGS {
            let config = RankConfig::default().with_direct_signal_fields(["likes", tag]);
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        }

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"direct_signal_fields": ["fallback_rank"]}}"#).unwrap();
        assert!(RankConfig::from_json_file(file.path()).is_err());
    }

    #[test]
    fn test_empty_signal_fields_accepted() {
        let config = RankConfig::default().with_direct_signal_fields(Vec::<String>::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RankConfig = serde_json::from_str(r#"{"top_k": 10}"#).unwrap();
        assert_eq!(config.top_k, 10);
        assert_eq!(config.position_cap, 1000);
        assert_eq!(config.direct_signal_fields.len(), 4);
    }

    #[test]
    fn test_fetch_limit() {
        let config = RankConfig::default();
        assert_eq!(config.fetch_limit(), 5);

        let filtered = config.clone().with_filter_available(true);
        assert_eq!(filtered.fetch_limit(), 15);

        let capped = filtered.with_top_k(20);
        assert_eq!(capped.fetch_limit(), 50);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_k": 3, "recency_year_threshold": 2015}}"#).unwrap();

        let config = RankConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.top_k, 3);
        assert_eq!(config.recency_year_threshold, 2015);
    }

    #[test]
    fn test_from_json_file_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_k": 0}}"#).unwrap();

        assert!(matches!(
            RankConfig::from_json_file(file.path()),
            Err(Error::InvalidConfig(_))
        ));
    }
}
