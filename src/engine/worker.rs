//! Background suggestion engine with latest-generation-wins publication.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use log::debug;
use parking_lot::{Condvar, Mutex};
use rayon::{ThreadPool, ThreadPoolBuilder};
use uuid::Uuid;

use crate::dictionary::Dictionary;
use crate::error::{Result, SibylError};
use crate::ranker::{RankConfig, Ranker, Suggestion};

/// Configuration for the background suggestion engine.
#[derive(Debug, Clone, Default)]
pub struct WorkerConfig {
    /// Number of ranking threads. Defaults to the number of CPUs.
    pub thread_pool_size: Option<usize>,
    /// Ranking configuration.
    pub rank: RankConfig,
}

/// Snapshot of the most recently completed re-evaluation.
struct Published {
    generation: u64,
    suggestions: Arc<Vec<Suggestion>>,
}

struct Shared {
    /// Monotonic update counter. A ranking task is stale as soon as this
    /// moves past the generation it was scheduled with.
    generation: AtomicU64,
    published: Mutex<Published>,
    published_cond: Condvar,
}

/// Latest state of the query and dictionary inputs.
struct Inputs {
    query: Arc<str>,
    dictionary: Arc<Dictionary>,
}

/// Cancellable worker-offload variant of the suggestion controller.
///
/// Every update to the query or dictionary bumps a generation counter and
/// schedules a ranking task on a thread pool. A task aborts early once it is
/// superseded, and a completed result is published only while its generation
/// is still the newest, so the exposed list always corresponds to the last
/// observed (query, dictionary) pair and never to a stale intermediate one.
/// Partial results are never published. Entering the idle state (empty query
/// or dictionary) clears the list synchronously.
pub struct BackgroundSuggestEngine {
    ranker: Arc<Ranker>,
    thread_pool: Arc<ThreadPool>,
    inputs: Mutex<Inputs>,
    shared: Arc<Shared>,
}

impl BackgroundSuggestEngine {
    /// Create a new engine with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(WorkerConfig::default())
    }

    /// Create a new engine with a custom configuration.
    pub fn with_config(config: WorkerConfig) -> Result<Self> {
        let thread_pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("sibyl-rank-{i}"))
            .build()
            .map_err(|e| SibylError::internal(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            ranker: Arc::new(Ranker::with_config(config.rank)),
            thread_pool: Arc::new(thread_pool),
            inputs: Mutex::new(Inputs {
                query: Arc::from(""),
                dictionary: Arc::new(Dictionary::new()),
            }),
            shared: Arc::new(Shared {
                generation: AtomicU64::new(0),
                published: Mutex::new(Published {
                    generation: 0,
                    suggestions: Arc::new(Vec::new()),
                }),
                published_cond: Condvar::new(),
            }),
        })
    }

    /// Replace the query word verbatim and schedule a re-evaluation.
    pub fn set_query(&self, query: impl Into<String>) {
        let (generation, query, dictionary) = {
            let mut inputs = self.inputs.lock();
            inputs.query = Arc::from(query.into());
            // The generation must be taken while the inputs lock is held so
            // generation order always matches input-write order.
            let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
            (
                generation,
                Arc::clone(&inputs.query),
                Arc::clone(&inputs.dictionary),
            )
        };

        self.schedule(generation, query, dictionary);
    }

    /// Replace the dictionary wholesale and schedule a re-evaluation.
    pub fn set_dictionary(&self, dictionary: Dictionary) {
        let (generation, query, dictionary) = {
            let mut inputs = self.inputs.lock();
            inputs.dictionary = Arc::new(dictionary);
            let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
            (
                generation,
                Arc::clone(&inputs.query),
                Arc::clone(&inputs.dictionary),
            )
        };

        self.schedule(generation, query, dictionary);
    }

    /// Get the current query word.
    pub fn query(&self) -> Arc<str> {
        Arc::clone(&self.inputs.lock().query)
    }

    /// Snapshot of the most recently completed re-evaluation.
    pub fn current_suggestions(&self) -> Arc<Vec<Suggestion>> {
        Arc::clone(&self.shared.published.lock().suggestions)
    }

    /// Block until the published suggestions correspond to the most recent
    /// update, or the timeout elapses. Returns whether the engine caught up.
    pub fn wait_for_current(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut published = self.shared.published.lock();

        loop {
            if published.generation == self.shared.generation.load(Ordering::SeqCst) {
                return true;
            }

            if self
                .shared
                .published_cond
                .wait_until(&mut published, deadline)
                .timed_out()
            {
                return published.generation == self.shared.generation.load(Ordering::SeqCst);
            }
        }
    }

    fn schedule(&self, generation: u64, query: Arc<str>, dictionary: Arc<Dictionary>) {
        // Idle collapses synchronously; a mid-flight ranking for an older
        // generation can no longer publish over it.
        if query.is_empty() || dictionary.is_empty() {
            let mut published = self.shared.published.lock();
            if published.generation < generation {
                published.generation = generation;
                published.suggestions = Arc::new(Vec::new());
                self.shared.published_cond.notify_all();
            }
            debug!("generation {generation}: idle, suggestions cleared");
            return;
        }

        let task_id = Uuid::new_v4();
        let ranker = Arc::clone(&self.ranker);
        let shared = Arc::clone(&self.shared);
        debug!(
            "generation {generation}: scheduling rank task {task_id} over {} words",
            dictionary.len()
        );

        self.thread_pool.spawn(move || {
            let stale = || shared.generation.load(Ordering::SeqCst) != generation;

            match ranker.rank_cancellable(&query, &dictionary, stale) {
                Some(suggestions) => {
                    let mut published = shared.published.lock();
                    // Re-check under the lock so results are never applied
                    // out of order.
                    if shared.generation.load(Ordering::SeqCst) == generation
                        && published.generation < generation
                    {
                        debug!(
                            "generation {generation}: task {task_id} published {} suggestions",
                            suggestions.len()
                        );
                        published.generation = generation;
                        published.suggestions = Arc::new(suggestions);
                        shared.published_cond.notify_all();
                    } else {
                        debug!("generation {generation}: task {task_id} superseded, discarded");
                    }
                }
                None => {
                    debug!("generation {generation}: task {task_id} cancelled");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_secs(5);

    fn engine() -> BackgroundSuggestEngine {
        BackgroundSuggestEngine::with_config(WorkerConfig {
            thread_pool_size: Some(2),
            ..Default::default()
        })
        .unwrap()
    }

    fn dictionary(words: &[&str]) -> Dictionary {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_initial_state_is_empty() {
        let engine = engine();

        assert!(engine.wait_for_current(WAIT));
        assert!(engine.current_suggestions().is_empty());
    }

    #[test]
    fn test_ranked_after_updates() {
        let engine = engine();

        engine.set_dictionary(dictionary(&["ab", "ac", "xyz"]));
        engine.set_query("ab");

        assert!(engine.wait_for_current(WAIT));
        let suggestions = engine.current_suggestions();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0], Suggestion::new("ab", 0));
        assert_eq!(suggestions[1], Suggestion::new("ac", 1));
        assert_eq!(suggestions[2], Suggestion::new("xyz", 3));
    }

    #[test]
    fn test_empty_query_clears_unconditionally() {
        let engine = engine();

        engine.set_dictionary(dictionary(&["ab", "ac"]));
        engine.set_query("ab");
        assert!(engine.wait_for_current(WAIT));
        assert!(!engine.current_suggestions().is_empty());

        engine.set_query("");
        // Idle publication is synchronous; no waiting required.
        assert!(engine.current_suggestions().is_empty());
    }

    #[test]
    fn test_latest_query_wins() {
        let engine = engine();

        engine.set_dictionary(dictionary(&["first", "second"]));
        engine.set_query("first");
        engine.set_query("second");

        assert!(engine.wait_for_current(WAIT));
        let suggestions = engine.current_suggestions();
        assert_eq!(suggestions[0], Suggestion::new("second", 0));
    }

    #[test]
    fn test_burst_of_updates_settles_on_last_pair() {
        let engine = engine();
        let words: Vec<String> = (0..1000).map(|i| format!("word{i}")).collect();

        engine.set_dictionary(Dictionary::from(words));
        for i in 0..20 {
            engine.set_query(format!("word{i}"));
        }

        assert!(engine.wait_for_current(WAIT));
        let suggestions = engine.current_suggestions();
        assert_eq!(suggestions[0], Suggestion::new("word19", 0));
        assert_eq!(suggestions.len(), 10);
    }

    #[test]
    fn test_concurrent_updates_publish_the_stored_pair() {
        let engine = Arc::new(engine());

        // Every query either thread sets is an exact dictionary match.
        let words: Vec<String> = (0..2)
            .flat_map(|t| (0..50).map(move |i| format!("t{t}q{i}")))
            .collect();
        engine.set_dictionary(Dictionary::from(words));

        let handles: Vec<_> = (0..2)
            .map(|t| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        engine.set_query(format!("t{t}q{i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(engine.wait_for_current(WAIT));

        // Whichever update was last, the published list must belong to the
        // query the engine actually stores, never to an older pair.
        let query = engine.query();
        let suggestions = engine.current_suggestions();
        assert_eq!(suggestions[0], Suggestion::new(query.as_ref(), 0));
    }

    #[test]
    fn test_dictionary_replacement_wins_over_stale_rank() {
        let engine = engine();

        engine.set_dictionary(dictionary(&["cat"]));
        engine.set_query("cat");
        engine.set_dictionary(dictionary(&["dog"]));

        assert!(engine.wait_for_current(WAIT));
        let suggestions = engine.current_suggestions();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].word, "dog");
    }
}
