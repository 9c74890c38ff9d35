//! Did-you-mean ranking.
//!
//! - [`similarity_score`] scores one query against one candidate with a
//!   normalized Levenshtein distance.
//! - [`CandidateRanker`] filters, scores, sorts, deduplicates and caps a
//!   candidate domain into a [`SuggestionSet`].
//!
//! Both are pure: identical inputs always produce identical, identically
//! ordered output.

mod candidate;
mod options;
mod ranker;
mod scorer;

pub use candidate::{Candidate, ScoredCandidate, SimilarityScore, SuggestionSet};
pub use options::RankingOptions;
pub use ranker::CandidateRanker;
pub use scorer::{levenshtein_distance, similarity_score};
