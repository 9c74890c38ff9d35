use serde::Serialize;

/// A name known to be valid in some context, with its type signature when
/// the oracle supplied one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        Candidate {
            name: name.into(),
            signature: None,
        }
    }

    pub fn with_signature(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Candidate {
            name: name.into(),
            signature: Some(signature.into()),
        }
    }
}

impl From<&str> for Candidate {
    fn from(name: &str) -> Self {
        Candidate::new(name)
    }
}

impl From<String> for Candidate {
    fn from(name: String) -> Self {
        Candidate::new(name)
    }
}

/// A similarity score in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    /// The highest possible score.
    pub const EXACT: SimilarityScore = SimilarityScore(1.0);

    /// Returns `None` unless `value` is finite and in `(0, 1]`.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0 && value <= 1.0).then_some(SimilarityScore(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// A candidate together with its score against the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub score: SimilarityScore,
}

impl ScoredCandidate {
    pub fn new(candidate: Candidate, score: SimilarityScore) -> Self {
        ScoredCandidate {
            name: candidate.name,
            signature: candidate.signature,
            score,
        }
    }

    pub fn named(name: impl Into<String>, score: SimilarityScore) -> Self {
        ScoredCandidate::new(Candidate::new(name), score)
    }
}

/// Ranked suggestions for one query, best first.
///
/// Produced by [`CandidateRanker`](crate::CandidateRanker), which guarantees
/// the length cap, the descending order and that no entry equals the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SuggestionSet(Vec<ScoredCandidate>);

impl SuggestionSet {
    pub fn empty() -> Self {
        SuggestionSet(Vec::new())
    }

    /// Wrap suggestions that are already ranked.
    pub fn from_ranked(suggestions: Vec<ScoredCandidate>) -> Self {
        SuggestionSet(suggestions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&ScoredCandidate> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCandidate> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|suggestion| suggestion.name.as_str())
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.0.iter().any(|suggestion| suggestion.name == name)
    }

    /// Attach signatures looked up per suggestion.
    ///
    /// Suggestions for which `lookup` returns `None` keep whatever signature
    /// they already had.
    pub fn with_signatures(
        mut self,
        mut lookup: impl FnMut(&ScoredCandidate) -> Option<String>,
    ) -> Self {
        for suggestion in &mut self.0 {
            if let Some(signature) = lookup(suggestion) {
                suggestion.signature = Some(signature);
            }
        }
        self
    }

    pub fn into_vec(self) -> Vec<ScoredCandidate> {
        self.0
    }
}

impl<'a> IntoIterator for &'a SuggestionSet {
    type Item = &'a ScoredCandidate;
    type IntoIter = std::slice::Iter<'a, ScoredCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for SuggestionSet {
    type Item = ScoredCandidate;
    type IntoIter = std::vec::IntoIter<ScoredCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
