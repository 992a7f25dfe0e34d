//! Fuzzy filtering of completion candidates.
//!
//! A candidate matches when the typed input is a prefix of it, a substring of
//! it, or an ordered (possibly gapped) subsequence of its characters. All
//! comparisons ignore case. An empty input matches everything.

/// How well an input matched a candidate. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum MatchRank {
    #[display("identical")]
    Identical = 0,
    #[display("prefix")]
    Prefix = 1,
    #[display("substring")]
    Substring = 2,
    #[display("subsequence")]
    Subsequence = 3,
}

/// True if `input` fuzzily matches `candidate`.
pub fn fuzzy_match(input: &str, candidate: &str) -> bool {
    fuzzy_score(input, candidate).is_some()
}

/// Rank `candidate` against `input`, or `None` when it does not match at all.
///
/// Tiers are tried in order and the first hit wins. An empty input ranks as
/// [`MatchRank::Prefix`] for every candidate.
pub fn fuzzy_score(input: &str, candidate: &str) -> Option<MatchRank> {
    if input.is_empty() {
        return Some(MatchRank::Prefix);
    }
    let input = input.to_lowercase();
    let candidate = candidate.to_lowercase();

    if candidate == input {
        Some(MatchRank::Identical)
    } else if candidate.starts_with(&input) {
        Some(MatchRank::Prefix)
    } else if candidate.contains(&input) {
        Some(MatchRank::Substring)
    } else if is_subsequence(&input, &candidate) {
        Some(MatchRank::Subsequence)
    } else {
        None
    }
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut haystack = haystack.chars();
    needle.chars().all(|n| haystack.any(|h| h == n))
}
