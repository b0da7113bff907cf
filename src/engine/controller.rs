//! Synchronous suggestion controller.

use log::debug;

use crate::dictionary::Dictionary;
use crate::ranker::{RankConfig, Ranker, Suggestion};

/// Owns the current query word and dictionary and re-ranks on every change.
///
/// The controller is a two-state machine. It is *idle* while the query or the
/// dictionary is empty, and the exposed suggestion list is empty. Otherwise it
/// is *ranked* and the list equals `rank(query, dictionary)`. Every update to
/// either input re-evaluates immediately; the list is rebuilt, never patched.
#[derive(Debug, Default)]
pub struct SuggestController {
    ranker: Ranker,
    query: String,
    dictionary: Dictionary,
    suggestions: Vec<Suggestion>,
}

impl SuggestController {
    /// Create a new idle controller with an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new controller with a custom ranking configuration.
    pub fn with_config(config: RankConfig) -> Self {
        SuggestController {
            ranker: Ranker::with_config(config),
            ..Default::default()
        }
    }

    /// Replace the query word verbatim and re-evaluate.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.reevaluate();
    }

    /// Replace the dictionary wholesale and re-evaluate.
    pub fn set_dictionary(&mut self, dictionary: Dictionary) {
        self.dictionary = dictionary;
        self.reevaluate();
    }

    /// Get the current query word.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the current dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Snapshot of the suggestions for the current (query, dictionary) pair.
    pub fn current_suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Check whether the controller is idle (empty query or dictionary).
    pub fn is_idle(&self) -> bool {
        self.query.is_empty() || self.dictionary.is_empty()
    }

    fn reevaluate(&mut self) {
        if self.is_idle() {
            self.suggestions.clear();
            debug!("controller idle, suggestions cleared");
        } else {
            self.suggestions = self.ranker.rank(&self.query, &self.dictionary);
            debug!(
                "re-ranked {} dictionary words, kept {}",
                self.dictionary.len(),
                self.suggestions.len()
            );
        }
    }
}
