//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SibylArgs};
use crate::error::Result;
use crate::ranker::Suggestion;

/// Result structure for suggestion commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResults {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    pub dictionary_words: usize,
    pub duration_ms: u64,
}

/// Statistics for a loaded dictionary.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub total_words: usize,
    pub empty_words: usize,
    pub unique_words: usize,
    pub longest_word_len: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SibylArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SibylArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("SuggestResults") => {
            output_suggestions_human(&value, args)
        }
        _ => output_generic_human(&value, args),
    }
}

/// Output suggestions in human format. The first entry is the best match.
fn output_suggestions_human(value: &serde_json::Value, args: &SibylArgs) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    let query = obj.get("query").and_then(|q| q.as_str()).unwrap_or("");
    println!("Suggestions for {query:?}:");
    println!("─────────────────");

    if let Some(suggestions) = obj.get("suggestions").and_then(|s| s.as_array()) {
        if suggestions.is_empty() {
            println!("(none)");
        }

        for (i, suggestion) in suggestions.iter().enumerate() {
            let word = suggestion.get("word").and_then(|w| w.as_str()).unwrap_or("");
            let distance = suggestion
                .get("distance")
                .and_then(|d| d.as_u64())
                .unwrap_or(0);
            let marker = if i == 0 { "*" } else { " " };
            println!("{marker} {}. {word} (distance: {distance})", i + 1);
        }
    }

    if args.verbosity() > 0 {
        println!();

        if let Some(words) = obj.get("dictionary_words").and_then(|w| w.as_u64()) {
            println!("Dictionary words: {words}");
        }

        if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
            println!("Ranking time: {duration}ms");
        }
    }

    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &SibylArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SibylArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
