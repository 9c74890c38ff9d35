use serde::Deserialize;
use suggest_common::limits::{MAX_SUGGESTIONS, MIN_SIMILARITY_SCORE};

/// Tuning for [`CandidateRanker`](crate::CandidateRanker).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankingOptions {
    /// Cap on the number of suggestions returned.
    pub max_suggestions: usize,
    /// Candidates must score strictly above this value.
    pub min_score: f64,
}

impl Default for RankingOptions {
    fn default() -> Self {
        RankingOptions {
            max_suggestions: MAX_SUGGESTIONS,
            min_score: MIN_SIMILARITY_SCORE,
        }
    }
}
