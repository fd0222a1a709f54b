//! Score provenance tags

use serde::{Serialize, Serializer};
use std::fmt;

pub const POSITION_INVERTED: &str = "position_inverted";
pub const RELEASE_YEAR: &str = "release_year";
pub const FALLBACK_RANK: &str = "fallback_rank";

/// Which tier produced a score.
///
/// Rendered as a plain tag: the matched field name for direct signals,
/// otherwise one of `position_inverted`, `release_year`, `fallback_rank`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScoreSource {
    /// A popularity-like field read straight from the record
    DirectField(String),
    PositionInverted,
    ReleaseYear,
    Fallback,
}

impl ScoreSource {
    pub fn as_str(&self) -> &str {
        match self {
            ScoreSource::DirectField(field) => field,
            ScoreSource::PositionInverted => POSITION_INVERTED,
            ScoreSource::ReleaseYear => RELEASE_YEAR,
            ScoreSource::Fallback => FALLBACK_RANK,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ScoreSource::Fallback)
    }
}

impl fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ScoreSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Output of a single tier: an integer score and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierScore {
    pub score: i64,
    pub source: ScoreSource,
}

impl TierScore {
    pub fn new(score: i64, source: ScoreSource) -> Self {
        Self { score, source }
    }

    /// Terminal result when no tier applies.
    pub fn fallback() -> Self {
        Self::new(0, ScoreSource::Fallback)
    }
}
