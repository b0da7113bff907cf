//! # Sibyl
//!
//! A reactive spelling suggestion engine for Rust.
//!
//! ## Features
//!
//! - Exact Levenshtein (Wagner-Fischer) edit distance
//! - Top-K ranking of a dictionary against a query word
//! - Synchronous and background (latest-wins) recomputation
//! - Line-oriented dictionary loading

pub mod dictionary;
pub mod distance;
pub mod engine;
pub mod error;
pub mod ranker;

pub mod cli;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
