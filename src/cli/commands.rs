//! Command implementations for the Sibyl CLI.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::Dictionary;
use crate::distance::Segmentation;
use crate::engine::{BackgroundSuggestEngine, SuggestController, WorkerConfig};
use crate::error::{Result, SibylError};
use crate::ranker::RankConfig;

/// How long the REPL waits for a background ranking before giving up.
const REPL_RANK_TIMEOUT: Duration = Duration::from_secs(30);

/// Execute a CLI command.
pub fn execute_command(args: SibylArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), &args),
        Command::Repl(repl_args) => run_repl(repl_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

fn rank_config(limit: usize, graphemes: bool) -> RankConfig {
    RankConfig {
        limit,
        segmentation: if graphemes {
            Segmentation::Graphemes
        } else {
            Segmentation::CodePoints
        },
    }
}

/// Rank a dictionary against a single word.
fn suggest_word(args: SuggestArgs, cli_args: &SibylArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", args.dictionary.display());
    }

    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    let dictionary_words = dictionary.len();

    let mut controller = SuggestController::with_config(rank_config(args.limit, args.graphemes));

    let start = Instant::now();
    controller.set_dictionary(dictionary);
    controller.set_query(args.word.clone());
    let duration_ms = start.elapsed().as_millis() as u64;

    output_result(
        "Ranking complete",
        &SuggestResults {
            query: args.word,
            suggestions: controller.current_suggestions().to_vec(),
            dictionary_words,
            duration_ms,
        },
        cli_args,
    )
}

/// Re-rank interactively for every line read from stdin.
fn run_repl(args: ReplArgs, cli_args: &SibylArgs) -> Result<()> {
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    let dictionary_words = dictionary.len();

    let engine = BackgroundSuggestEngine::with_config(WorkerConfig {
        thread_pool_size: None,
        rank: rank_config(args.limit, args.graphemes),
    })?;
    engine.set_dictionary(dictionary);

    if cli_args.verbosity() > 0 {
        println!("Loaded {dictionary_words} words. Type a word and press enter; Ctrl-D exits.");
    }

    let stdin = io::stdin();
    print_prompt(cli_args)?;

    for line in stdin.lock().lines() {
        let line = line?;

        let start = Instant::now();
        engine.set_query(line.clone());
        if !engine.wait_for_current(REPL_RANK_TIMEOUT) {
            return Err(SibylError::other("ranking timed out"));
        }
        let duration_ms = start.elapsed().as_millis() as u64;

        output_result(
            "Ranking complete",
            &SuggestResults {
                query: line,
                suggestions: engine.current_suggestions().as_ref().clone(),
                dictionary_words,
                duration_ms,
            },
            cli_args,
        )?;

        print_prompt(cli_args)?;
    }

    Ok(())
}

fn print_prompt(cli_args: &SibylArgs) -> Result<()> {
    if cli_args.output_format == OutputFormat::Human {
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

/// Show statistics for a dictionary file.
fn show_stats(args: StatsArgs, cli_args: &SibylArgs) -> Result<()> {
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;

    output_result(
        "Dictionary statistics",
        &DictionaryStats {
            path: args.dictionary.to_string_lossy().to_string(),
            total_words: dictionary.len(),
            empty_words: dictionary.empty_word_count(),
            unique_words: dictionary.unique_word_count(),
            longest_word_len: dictionary.longest_word_len(),
        },
        cli_args,
    )
}
