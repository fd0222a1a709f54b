//! Ranking and top-k selection
//!
//! Scores every record through the [`Cascade`], orders the scored records
//! deterministically and keeps the first `top_k`.

use crate::cascade::Cascade;
use crate::diagnostics::Diagnostics;
use crate::source::{ScoreSource, TierScore};
use jamrank_core::{RankConfig, Record, Result};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// A record together with its computed score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    /// Zero-based position in the input sequence, used only for tie-breaks
    pub original_index: usize,
    pub score: i64,
    pub source: ScoreSource,
    pub record: Record,
}

impl ScoredRecord {
    pub fn assign(original_index: usize, record: Record, tier_score: TierScore) -> Self {
        Self {
            original_index,
            score: tier_score.score,
            source: tier_score.source,
            record,
        }
    }
}

/// Scored records in final order.
pub type RankedResult = Vec<ScoredRecord>;

/// Score descending, then original position ascending.
#[inline]
pub fn rank_order(a: &ScoredRecord, b: &ScoredRecord) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.original_index.cmp(&b.original_index))
}

/// Order scored records by [`rank_order`]. The tie-break is explicit, so the
/// result does not depend on sort stability.
pub fn rank_scored(mut scored: Vec<ScoredRecord>) -> RankedResult {
    scored.sort_unstable_by(rank_order);
    scored
}

/// First `min(k, len)` records of a ranked sequence, order unchanged.
pub fn select_top_k(mut ranked: RankedResult, k: usize) -> Vec<ScoredRecord> {
    ranked.truncate(k);
    ranked
}

/// Result of one ranking call.
#[derive(Debug, Clone, PartialEq)]
pub struct RankOutcome {
    /// Selected records, best first
    pub top: Vec<ScoredRecord>,
    /// Tier usage over every scored record
    pub diagnostics: Diagnostics,
    /// Number of records that were scored
    pub candidates: usize,
}

/// Ranks search results with a tier cascade.
#[derive(Debug)]
pub struct Ranker {
    config: RankConfig,
    cascade: Cascade,
}

impl Ranker {
    /// Create a ranker using the default cascade for `config`
    pub fn new(config: RankConfig) -> Result<Self> {
        let cascade = Cascade::from_config(&config);
        Self::with_cascade(config, cascade)
    }

    /// Create a ranker with custom tiers
    pub fn with_cascade(config: RankConfig, cascade: Cascade) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, cascade })
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Score every record; one output per input, in input order.
    pub fn score_all(&self, records: Vec<Record>) -> Vec<ScoredRecord> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let tier_score = self.cascade.evaluate(&record);
                ScoredRecord::assign(index, record, tier_score)
            })
            .collect()
    }

    /// Full ranked sequence, without top-k truncation.
    pub fn rank(&self, records: Vec<Record>) -> RankedResult {
        rank_scored(self.score_all(records))
    }

    /// Rank and keep the configured top-k, with diagnostics over all
    /// scored records.
    pub fn rank_top_k(&self, records: Vec<Record>) -> RankOutcome {
        let scored = self.score_all(records);
        let diagnostics = Diagnostics::tally(&scored);
        let candidates = scored.len();

        let top = select_top_k(rank_scored(scored), self.config.top_k);

        debug!(
            candidates,
            selected = top.len(),
            fallback = diagnostics.count_source(&ScoreSource::Fallback),
            "ranking complete"
        );
        if candidates > 0 && diagnostics.count_source(&ScoreSource::Fallback) == candidates {
            warn!(candidates, "no record carried a usable ranking signal");
        }

        RankOutcome {
            top,
            diagnostics,
            candidates,
        }
    }
}
