//! Tier usage counts over a scored result set.

use crate::rank::ScoredRecord;
use crate::source::ScoreSource;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of records each score source produced, keyed by tag.
///
/// Always computed over every scored record, not just the selected top-k,
/// so that heavy use of the fallback tier stays visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    counts: BTreeMap<String, usize>,
}

impl Diagnostics {
    pub fn tally(scored: &[ScoredRecord]) -> Self {
        let mut counts = BTreeMap::new();
        for record in scored {
            *counts.entry(record.source.to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    pub fn count_source(&self, source: &ScoreSource) -> usize {
        self.count(source.as_str())
    }

    /// Sum of all counts; equals the number of scored records.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(tag, n)| (tag.as_str(), *n))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Share of records that reached the fallback tier, 0.0 when empty.
    pub fn fallback_share(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count_source(&ScoreSource::Fallback) as f64 / total as f64
    }
}
