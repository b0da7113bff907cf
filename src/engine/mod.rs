//! Reactive recomputation engines.
//!
//! Both engines own the current query word and dictionary and keep the
//! exposed suggestion list consistent with the latest values of both:
//!
//! - [`SuggestController`] re-ranks synchronously on every mutation.
//! - [`BackgroundSuggestEngine`] offloads ranking to a thread pool and
//!   guarantees that a stale computation never overwrites a newer result.

pub mod controller;
pub mod worker;

pub use controller::SuggestController;
pub use worker::{BackgroundSuggestEngine, WorkerConfig};
