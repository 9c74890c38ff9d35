//! Normalized edit-distance similarity.

/// Calculate Levenshtein distance between two strings, counted in chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0usize; b_len + 1];

    for i in 1..=a_len {
        curr[0] = i;
        for j in 1..=b_len {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Score `candidate` against `query`: `1 - distance / max(len)`.
///
/// Case-sensitive. Returns `0.0` when either side is empty.
pub fn similarity_score(query: &str, candidate: &str) -> f64 {
    let query_len = query.chars().count();
    let candidate_len = candidate.chars().count();
    let longest = query_len.max(candidate_len);
    if query_len == 0 || candidate_len == 0 {
        return 0.0;
    }

    let distance = levenshtein_distance(query, candidate);
    1.0 - distance as f64 / longest as f64
}

/// Upper bound of [`similarity_score`] from lengths alone.
///
/// The distance is at least the length difference, so a candidate whose
/// bound does not clear the threshold can skip the full computation.
pub(crate) fn similarity_upper_bound(query_len: usize, candidate_len: usize) -> f64 {
    let longest = query_len.max(candidate_len);
    if longest == 0 {
        return 0.0;
    }
    1.0 - query_len.abs_diff(candidate_len) as f64 / longest as f64
}

#[cfg(test)]
#[path = "../tests/scorer.rs"]
mod tests;
