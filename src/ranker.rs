//! Top-K ranking of a dictionary against a query word.

use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;
use crate::distance::{DistanceMatcher, Segmentation};

/// Default maximum number of suggestions returned by a ranking.
pub const DEFAULT_LIMIT: usize = 10;

/// How many dictionary entries are scored between cancellation checks.
const CANCEL_CHECK_INTERVAL: usize = 64;

/// A candidate word paired with its edit distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the query word.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: impl Into<String>, distance: usize) -> Self {
        Suggestion {
            word: word.into(),
            distance,
        }
    }
}

/// Configuration for suggestion ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Maximum number of suggestions to return.
    pub limit: usize,
    /// Symbol segmentation used for distance computation.
    pub segmentation: Segmentation,
}

impl Default for RankConfig {
    fn default() -> Self {
        RankConfig {
            limit: DEFAULT_LIMIT,
            segmentation: Segmentation::CodePoints,
        }
    }
}

/// Scores an entire dictionary against a query word and returns the closest
/// matches, ascending by distance.
///
/// Ranking is a pure function of its inputs: identical arguments always
/// produce identical output. Entries at equal distance keep their original
/// dictionary order (stable sort).
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankConfig,
}

impl Ranker {
    /// Create a new ranker with the default configuration.
    pub fn new() -> Self {
        Ranker {
            config: RankConfig::default(),
        }
    }

    /// Create a new ranker with a custom configuration.
    pub fn with_config(config: RankConfig) -> Self {
        Ranker { config }
    }

    /// Get the ranker configuration.
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Rank every dictionary entry by edit distance from `query`.
    ///
    /// Returns at most `limit` suggestions, ascending by distance, ties broken
    /// by dictionary order. An empty dictionary or a zero limit yields an
    /// empty list.
    pub fn rank(&self, query: &str, dictionary: &Dictionary) -> Vec<Suggestion> {
        if self.config.limit == 0 {
            return Vec::new();
        }

        let matcher = DistanceMatcher::with_segmentation(query, self.config.segmentation);

        let mut suggestions: Vec<Suggestion> = dictionary
            .iter()
            .map(|word| Suggestion::new(word, matcher.distance(word)))
            .collect();

        suggestions.sort_by_key(|suggestion| suggestion.distance);
        suggestions.truncate(self.config.limit);
        suggestions
    }

    /// Rank with a cancellation predicate, checked periodically between
    /// dictionary entries.
    ///
    /// Returns `None` as soon as `cancelled` reports true; a completed run
    /// returns exactly what [`Ranker::rank`] would. No partial list is ever
    /// returned.
    pub fn rank_cancellable(
        &self,
        query: &str,
        dictionary: &Dictionary,
        cancelled: impl Fn() -> bool,
    ) -> Option<Vec<Suggestion>> {
        if cancelled() {
            return None;
        }

        if self.config.limit == 0 {
            return Some(Vec::new());
        }

        let matcher = DistanceMatcher::with_segmentation(query, self.config.segmentation);
        let mut suggestions = Vec::with_capacity(dictionary.len());

        for (index, word) in dictionary.iter().enumerate() {
            if index % CANCEL_CHECK_INTERVAL == 0 && cancelled() {
                return None;
            }

            suggestions.push(Suggestion::new(word, matcher.distance(word)));
        }

        if cancelled() {
            return None;
        }

        suggestions.sort_by_key(|suggestion| suggestion.distance);
        suggestions.truncate(self.config.limit);
        Some(suggestions)
    }
}
