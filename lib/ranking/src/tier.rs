//! Scoring tiers
//!
//! Each tier looks at one kind of evidence in a record and either produces a
//! [`TierScore`] or defers to the next tier by returning `None`. Tiers never
//! fail: missing or malformed fields just make a tier inapplicable.

use crate::extract::first_positive;
use crate::source::{ScoreSource, TierScore};
use jamrank_core::{
    Record, DEFAULT_DIRECT_SIGNAL_FIELDS, DEFAULT_POSITION_CAP, DEFAULT_RECENCY_YEAR_THRESHOLD,
};
use std::fmt::Debug;

pub const POSITION_FIELD: &str = "position";
pub const RELEASE_DATE_FIELD: &str = "releasedate";

/// One strategy in the scoring cascade.
pub trait ScoreTier: Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Try to score `record`; `None` defers to the next tier.
    fn try_score(&self, record: &Record) -> Option<TierScore>;
}

/// Uses the first positive popularity-like field, truncated to an integer.
#[derive(Debug, Clone)]
pub struct DirectSignalTier {
    fields: Vec<String>,
}

impl DirectSignalTier {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

impl Default for DirectSignalTier {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECT_SIGNAL_FIELDS.iter().map(|f| f.to_string()).collect())
    }
}

impl ScoreTier for DirectSignalTier {
    fn name(&self) -> &str {
        "direct_signal"
    }

    fn try_score(&self, record: &Record) -> Option<TierScore> {
        let hit = first_positive(record, &self.fields)?;
        Some(TierScore::new(
            hit.value.trunc() as i64,
            ScoreSource::DirectField(hit.field.to_string()),
        ))
    }
}

/// Turns the API's result position into a score: smaller position, higher
/// score, `cap - position`.
#[derive(Debug, Clone, Copy)]
pub struct InvertedPositionTier {
    cap: i64,
}

impl InvertedPositionTier {
    pub fn new(cap: i64) -> Self {
        Self { cap }
    }
}

impl Default for InvertedPositionTier {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION_CAP)
    }
}

impl ScoreTier for InvertedPositionTier {
    fn name(&self) -> &str {
        "position_inverted"
    }

    fn try_score(&self, record: &Record) -> Option<TierScore> {
        let position = record.positive_integer(POSITION_FIELD)?;
        Some(TierScore::new(
            self.cap.saturating_sub(position),
            ScoreSource::PositionInverted,
        ))
    }
}

/// Scores recent releases by their year. Older or unparseable dates do not
/// qualify.
#[derive(Debug, Clone, Copy)]
pub struct RecencyTier {
    min_year: i64,
}

impl RecencyTier {
    pub fn new(min_year: i64) -> Self {
        Self { min_year }
    }
}

impl Default for RecencyTier {
    fn default() -> Self {
        Self::new(DEFAULT_RECENCY_YEAR_THRESHOLD)
    }
}

impl ScoreTier for RecencyTier {
    fn name(&self) -> &str {
        "release_year"
    }

    fn try_score(&self, record: &Record) -> Option<TierScore> {
        record
            .parsed_year(RELEASE_DATE_FIELD)
            .filter(|year| *year >= self.min_year)
            .map(|year| TierScore::new(year, ScoreSource::ReleaseYear))
    }
}

/// Always applies: score 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackTier;

impl ScoreTier for FallbackTier {
    fn name(&self) -> &str {
        "fallback_rank"
    }

    fn try_score(&self, _record: &Record) -> Option<TierScore> {
        Some(TierScore::fallback())
    }
}
