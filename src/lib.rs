//! # jamrank
//!
//! Deterministic top-k ranking for music search results whose upstream API
//! exposes no single trustworthy popularity score.
//!
//! Records are scored by an ordered cascade of tiers, the first one that
//! applies wins:
//!
//! 1. **Direct signal**: first positive of `popularity_total`, `popularity_month`, `likes`, `listens`
//! 2. **Inverted position**: `1000 - position` for a positive integer `position`
//! 3. **Recency**: the release year, when it is 2020 or later
//! 4. **Fallback**: score 0
//!
//! Scored records are ordered by score descending, ties broken by input
//! position, and truncated to the configured top-k.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! jamrank --input results.json --top-k 5
//! curl -s "$SEARCH_URL" | jamrank --filter-available
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use jamrank::prelude::*;
//!
//! let records = jamrank::parse_records(
//!     r#"{"results": [{"id": 1, "position": 2}, {"id": 2, "likes": 40}, {"id": 3}]}"#,
//! )
//! .unwrap();
//!
//! let ranker = Ranker::new(RankConfig::default()).unwrap();
//! let outcome = ranker.rank_top_k(records);
//!
//! assert_eq!(outcome.top[0].score, 998);
//! assert_eq!(outcome.top[1].source.as_str(), "likes");
//! assert_eq!(outcome.diagnostics.count("fallback_rank"), 1);
//! ```
//!
//! ## Crate Structure
//!
//! - `jamrank-core` - Records, typed accessors, configuration, availability filter
//! - `jamrank-ranking` - Tiers, cascade, ranker, selector, diagnostics, reports

pub mod input;

pub use input::{filter_available, parse_records, records_from_value};

// Re-export core types
pub use jamrank_core::{
    AvailabilityFilter, Error, Filter, RankConfig, Record, Result, TrackSummary,
};

// Re-export ranking
pub use jamrank_ranking::{
    rank_batch, Cascade, Diagnostics, RankOutcome, RankReport, RankStats, RankedEntry,
    Ranker, ScoreSource, ScoreTier, ScoredRecord, TierScore,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Cascade, Diagnostics, Error, RankConfig, RankOutcome, RankReport, Ranker, Record,
        Result, ScoreSource, ScoreTier, ScoredRecord, TierScore,
    };
}

/// Individual scoring tiers for custom cascades
pub mod tiers {
    pub use jamrank_ranking::tier::{
        DirectSignalTier, FallbackTier, InvertedPositionTier, RecencyTier,
    };
}
