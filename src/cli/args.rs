//! Command line argument parsing for the Sibyl CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sibyl - a spelling suggestion engine
#[derive(Parser, Debug, Clone)]
#[command(name = "sibyl")]
#[command(about = "Suggest the closest dictionary words for a misspelled word")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SibylArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SibylArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank a dictionary against a word once
    Suggest(SuggestArgs),

    /// Re-rank interactively for every line read from stdin
    Repl(ReplArgs),

    /// Show statistics for a dictionary file
    Stats(StatsArgs),
}

/// Arguments for one-shot suggestion
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Path to the dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// The word to find suggestions for
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of suggestions to return
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Compare grapheme clusters instead of Unicode code points
    #[arg(long)]
    pub graphemes: bool,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Path to the dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Maximum number of suggestions to return
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Compare grapheme clusters instead of Unicode code points
    #[arg(long)]
    pub graphemes: bool,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}
