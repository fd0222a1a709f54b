//! Explainability for ranking results
//!
//! Provides output structures that show how each selected record was scored,
//! together with the tier distribution over the whole result set.

use crate::diagnostics::Diagnostics;
use crate::rank::{RankOutcome, ScoredRecord};
use crate::source::ScoreSource;
use jamrank_core::{Record, TrackSummary};
use serde::Serialize;

/// One selected record with its score breakdown
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    /// 1-based rank in the output
    pub rank: usize,
    pub score: i64,
    pub source: ScoreSource,
    pub original_index: usize,
    pub track: TrackSummary,
    /// Raw record, only when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,
}

impl RankedEntry {
    pub fn from_scored(rank: usize, scored: ScoredRecord, include_record: bool) -> Self {
        Self {
            rank,
            score: scored.score,
            source: scored.source,
            original_index: scored.original_index,
            track: TrackSummary::from_record(&scored.record),
            record: if include_record { Some(scored.record) } else { None },
        }
    }
}

/// Summary statistics for a ranking call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankStats {
    /// Number of records scored
    pub candidates_count: usize,
    /// Number of records returned
    pub results_count: usize,
    /// Score of the best result
    pub best_score: Option<i64>,
    /// Share of all candidates that only reached the fallback tier
    pub fallback_share: f64,
}

impl RankStats {
    pub fn compute(top: &[ScoredRecord], diagnostics: &Diagnostics, candidates_count: usize) -> Self {
        Self {
            candidates_count,
            results_count: top.len(),
            best_score: top.first().map(|s| s.score),
            fallback_share: diagnostics.fallback_share(),
        }
    }
}

/// Serialisable report of a [`RankOutcome`]
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub results: Vec<RankedEntry>,
    pub diagnostics: Diagnostics,
    pub stats: RankStats,
}

impl RankReport {
    pub fn from_outcome(outcome: RankOutcome, include_record: bool) -> Self {
        let stats = RankStats::compute(&outcome.top, &outcome.diagnostics, outcome.candidates);
        let results = outcome
            .top
            .into_iter()
            .enumerate()
            .map(|(i, scored)| RankedEntry::from_scored(i + 1, scored, include_record))
            .collect();

        Self {
            results,
            diagnostics: outcome.diagnostics,
            stats,
        }
    }
}
