use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use tracing::trace;

use crate::candidate::{Candidate, ScoredCandidate, SimilarityScore, SuggestionSet};
use crate::options::RankingOptions;
use crate::scorer::{similarity_score, similarity_upper_bound};

/// Turns a candidate domain into a capped, ordered [`SuggestionSet`].
///
/// Callers filter the domain with their own "valid candidate" predicate
/// first; the ranker only drops the query itself, empty names, duplicate
/// names and candidates that do not clear the score threshold.
#[derive(Debug, Clone, Default)]
pub struct CandidateRanker {
    options: RankingOptions,
}

struct Ranked {
    index: usize,
    suggestion: ScoredCandidate,
}

impl CandidateRanker {
    pub fn new(options: RankingOptions) -> Self {
        CandidateRanker { options }
    }

    pub fn options(&self) -> &RankingOptions {
        &self.options
    }

    /// Rank `domain` against `query`.
    ///
    /// Never fails: an empty domain or no qualifying candidate yields an
    /// empty set.
    pub fn rank(&self, query: &str, domain: &[Candidate]) -> SuggestionSet {
        self.rank_iter(query, domain.iter().cloned())
    }

    /// Rank plain names against `query`.
    pub fn rank_names<'a>(
        &self,
        query: &str,
        names: impl IntoIterator<Item = &'a str>,
    ) -> SuggestionSet {
        self.rank_iter(query, names.into_iter().map(Candidate::new))
    }

    fn rank_iter(
        &self,
        query: &str,
        domain: impl IntoIterator<Item = Candidate>,
    ) -> SuggestionSet {
        if query.is_empty() || self.options.max_suggestions == 0 {
            return SuggestionSet::empty();
        }

        let query_len = query.chars().count();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut ranked: Vec<Ranked> = Vec::new();

        for (index, candidate) in domain.into_iter().enumerate() {
            if candidate.name.is_empty() || candidate.name == query {
                continue;
            }
            if !seen.insert(candidate.name.clone()) {
                continue;
            }

            let candidate_len = candidate.name.chars().count();
            if similarity_upper_bound(query_len, candidate_len) <= self.options.min_score {
                continue;
            }

            let score = similarity_score(query, &candidate.name);
            if score <= self.options.min_score {
                continue;
            }
            let Some(score) = SimilarityScore::new(score) else {
                continue;
            };

            ranked.push(Ranked {
                index,
                suggestion: ScoredCandidate::new(candidate, score),
            });
        }

        ranked.sort_by(compare_ranked);
        ranked.truncate(self.options.max_suggestions);

        trace!(
            query,
            suggestions = ranked.len(),
            "ranked did-you-mean candidates"
        );

        SuggestionSet::from_ranked(ranked.into_iter().map(|r| r.suggestion).collect())
    }
}

/// Descending score, then original position, then name.
fn compare_ranked(a: &Ranked, b: &Ranked) -> Ordering {
    b.suggestion
        .score
        .value()
        .total_cmp(&a.suggestion.score.value())
        .then_with(|| a.index.cmp(&b.index))
        .then_with(|| a.suggestion.name.cmp(&b.suggestion.name))
}

#[cfg(test)]
#[path = "../tests/ranker.rs"]
mod tests;
