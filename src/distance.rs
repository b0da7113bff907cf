//! Levenshtein distance calculation for spelling suggestions.
//!
//! Distances are computed with the Wagner-Fischer dynamic-programming
//! algorithm. By default words are compared as sequences of Unicode code
//! points; grapheme-cluster comparison is available through
//! [`Segmentation::Graphemes`] and changes results for multi-scalar
//! characters (e.g. a combining accent counts as one symbol instead of two).

use std::cmp::min;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// How a word is split into the symbols compared by the distance algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Segmentation {
    /// Compare Unicode code points (`str::chars`). The default.
    #[default]
    CodePoints,
    /// Compare extended grapheme clusters.
    Graphemes,
}

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one word into another.
/// Characters are Unicode code points.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    distance_with(&s1_chars, &s2_chars, |a, b| a == b)
}

/// Rolling two-row form of the Wagner-Fischer recurrence.
///
/// Row 0 is `0..=len(b)` (inserting j symbols) and each row starts at `i`
/// (deleting i symbols); the result equals the full DP matrix with O(len(b))
/// space.
fn distance_with<A, B>(a: &[A], b: &[B], eq: impl Fn(&A, &B) -> bool) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr_row[0] = i;

        for j in 1..=b.len() {
            let cost = if eq(&a[i - 1], &b[j - 1]) { 0 } else { 1 };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Matcher for calculating distances between one query and many candidates.
///
/// The query is segmented once at construction time and reused for every
/// candidate.
pub struct DistanceMatcher {
    query: String,
    segmentation: Segmentation,
    query_chars: Vec<char>,
    query_graphemes: Vec<String>,
}

impl DistanceMatcher {
    /// Create a new matcher comparing code points.
    pub fn new(query: impl Into<String>) -> Self {
        Self::with_segmentation(query, Segmentation::CodePoints)
    }

    /// Create a new matcher with an explicit segmentation mode.
    pub fn with_segmentation(query: impl Into<String>, segmentation: Segmentation) -> Self {
        let query = query.into();

        // Only the symbol form for the active mode is materialized.
        let (query_chars, query_graphemes) = match segmentation {
            Segmentation::CodePoints => (query.chars().collect(), Vec::new()),
            Segmentation::Graphemes => (
                Vec::new(),
                query.graphemes(true).map(str::to_owned).collect(),
            ),
        };

        DistanceMatcher {
            query,
            segmentation,
            query_chars,
            query_graphemes,
        }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the segmentation mode of this matcher.
    pub fn segmentation(&self) -> Segmentation {
        self.segmentation
    }

    /// Calculate the edit distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        match self.segmentation {
            Segmentation::CodePoints => {
                let candidate_chars: Vec<char> = candidate.chars().collect();
                distance_with(&self.query_chars, &candidate_chars, |a, b| a == b)
            }
            Segmentation::Graphemes => {
                let candidate_graphemes: Vec<&str> = candidate.graphemes(true).collect();
                distance_with(&self.query_graphemes, &candidate_graphemes, |a, b| {
                    a.as_str() == *b
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("", "kitten"), 6);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_distance_identity() {
        for word in ["", "a", "hello", "suggestion", "ühlenbeck"] {
            assert_eq!(levenshtein_distance(word, word), 0);
        }
    }

    #[test]
    fn test_distance_symmetry() {
        let pairs = [
            ("kitten", "sitting"),
            ("flaw", "lawn"),
            ("", "word"),
            ("abc", "cba"),
            ("naïve", "naive"),
        ];

        for (a, b) in pairs {
            assert_eq!(
                levenshtein_distance(a, b),
                levenshtein_distance(b, a),
                "distance not symmetric for {a:?} / {b:?}"
            );
        }
    }

    #[test]
    fn test_distance_length_lower_bound() {
        let pairs = [("kitten", "sitting"), ("a", "abcdef"), ("", "xyz")];

        for (a, b) in pairs {
            let len_a = a.chars().count();
            let len_b = b.chars().count();
            assert!(levenshtein_distance(a, b) >= len_a.abs_diff(len_b));
        }
    }

    #[test]
    fn test_matcher_agrees_with_free_function() {
        let matcher = DistanceMatcher::new("search");

        for candidate in ["", "search", "serach", "sea", "researches"] {
            assert_eq!(
                matcher.distance(candidate),
                levenshtein_distance("search", candidate)
            );
        }
    }

    #[test]
    fn test_matcher_query_accessors() {
        let matcher = DistanceMatcher::new("query");
        assert_eq!(matcher.query(), "query");
        assert_eq!(matcher.segmentation(), Segmentation::CodePoints);
    }

    #[test]
    fn test_grapheme_segmentation() {
        // "e" followed by a combining acute accent is two code points but a
        // single grapheme cluster.
        let decomposed = "e\u{301}";

        let code_points = DistanceMatcher::new(decomposed);
        assert_eq!(code_points.distance("x"), 2);

        let graphemes = DistanceMatcher::with_segmentation(decomposed, Segmentation::Graphemes);
        assert_eq!(graphemes.distance("x"), 1);
        assert_eq!(graphemes.distance(decomposed), 0);
    }
}
