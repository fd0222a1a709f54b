//! Tier cascade
//!
//! Evaluates tiers in order and keeps the first score produced.

use crate::source::TierScore;
use crate::tier::{DirectSignalTier, FallbackTier, InvertedPositionTier, RecencyTier, ScoreTier};
use jamrank_core::{RankConfig, Record};
use tracing::trace;

#[derive(Debug)]
pub struct Cascade {
    tiers: Vec<Box<dyn ScoreTier>>,
}

impl Cascade {
    /// Build a cascade from custom tiers, evaluated in the given order.
    pub fn new(tiers: Vec<Box<dyn ScoreTier>>) -> Self {
        Self { tiers }
    }

    /// Direct signal, inverted position, recency, fallback.
    pub fn from_config(config: &RankConfig) -> Self {
        Self::new(vec![
            Box::new(DirectSignalTier::new(config.direct_signal_fields.clone())),
            Box::new(InvertedPositionTier::new(config.position_cap)),
            Box::new(RecencyTier::new(config.recency_year_threshold)),
            Box::new(FallbackTier),
        ])
    }

    pub fn tiers(&self) -> &[Box<dyn ScoreTier>] {
        &self.tiers
    }

    /// Score one record. Always returns a score: if no tier applies the
    /// terminal fallback is used.
    pub fn evaluate(&self, record: &Record) -> TierScore {
        self.tiers
            .iter()
            .find_map(|tier| {
                let score = tier.try_score(record);
                if score.is_some() {
                    trace!(tier = tier.name(), "tier applied");
                }
                score
            })
            .unwrap_or_else(TierScore::fallback)
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Self::from_config(&RankConfig::default())
    }
}
