//! # jamrank Ranking
//!
//! Deterministic ranking for search results that carry no single trustworthy
//! popularity score.
//!
//! ## Features
//!
//! - **Tier Cascade**: Ordered scoring strategies, first applicable one wins
//! - **Deterministic Ranking**: Score descending, ties broken by input position
//! - **Top-k Selection**: Truncation to the configured result count
//! - **Diagnostics**: Tier usage counts over the whole result set
//! - **Explainability**: Serialisable per-result score provenance
//!
//! ## Example
//!
//! ```rust
//! use jamrank_ranking::{Ranker, ScoreSource};
//! use jamrank_core::{RankConfig, Record};
//! use serde_json::json;
//!
//! let ranker = Ranker::new(RankConfig::default().with_top_k(3)).unwrap();
//! let records: Vec<Record> = vec![
//!     json!({"likes": 0, "position": 3, "releasedate": "2018"}),
//!     json!({"likes": 50}),
//!     json!({"likes": 0, "position": 1, "releasedate": "2022"}),
//!     json!({"likes": 0}),
//! ]
//! .into_iter()
//! .map(Record::from)
//! .collect();
//!
//! let outcome = ranker.rank_top_k(records);
//! let order: Vec<usize> = outcome.top.iter().map(|s| s.original_index).collect();
//! assert_eq!(order, vec![2, 0, 1]);
//! assert_eq!(outcome.top[0].source, ScoreSource::PositionInverted);
//! assert_eq!(outcome.diagnostics.total(), 4);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Records   │────>│   Cascade   │────>│   Scored    │
//! │   (input)   │     │   (tiers)   │     │   Records   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                     ┌─────────────┐     ┌──────┴──────┐
//!                     │  Selector   │<────│   Ranker    │
//!                     │   (top-k)   │     │ (sort+tie)  │
//!                     └─────────────┘     └─────────────┘
//!                            │
//!                     ┌─────────────┐
//!                     │ Diagnostics │
//!                     │  + Explain  │
//!                     └─────────────┘
//! ```

pub mod batch;
pub mod cascade;
pub mod diagnostics;
pub mod explain;
pub mod extract;
pub mod rank;
pub mod source;
pub mod tier;

pub use batch::rank_batch;
pub use cascade::Cascade;
pub use diagnostics::Diagnostics;
pub use explain::{RankReport, RankStats, RankedEntry};
pub use extract::{first_positive, FieldMatch};
pub use rank::{rank_order, rank_scored, select_top_k, RankOutcome, RankedResult, Ranker, ScoredRecord};
pub use source::{ScoreSource, TierScore};
pub use tier::{DirectSignalTier, FallbackTier, InvertedPositionTier, RecencyTier, ScoreTier};
