// Parallel ranking of independent result sets
use crate::rank::{RankOutcome, Ranker};
use jamrank_core::Record;
use rayon::prelude::*;
use tracing::debug;

/// Rank several keyword searches at once.
///
/// Each set is ranked exactly as [`Ranker::rank_top_k`] would rank it alone;
/// the output keeps the order of `batches`.
pub fn rank_batch(
    ranker: &Ranker,
    batches: Vec<(String, Vec<Record>)>,
) -> Vec<(String, RankOutcome)> {
    debug!(batches = batches.len(), "ranking batch");
    batches
        .into_par_iter()
        .map(|(keyword, records)| {
            let outcome = ranker.rank_top_k(records);
            (keyword, outcome)
        })
        .collect()
}
