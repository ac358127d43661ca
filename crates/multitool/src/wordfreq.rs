use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use multitool_core::wordfreq::{count_words, WordCount};
use std::io::IsTerminal;
use std::path::PathBuf;

const USAGE: &str = "Usage: multitool wordfreq <filename>";

#[derive(Debug, clap::Args, serde::Serialize)]
pub struct App {
    /// Text file to analyze
    pub filename: Option<PathBuf>,

    /// Only print the N most frequent words
    #[arg(short, long, env = "WORDFREQ_LIMIT")]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        crate::print_options(&app)?;
    }

    let Some(filename) = app.filename else {
        println!("{USAGE}");
        return Ok(());
    };

    let bytes = crate::input::read_file(&filename)?;
    let text = String::from_utf8_lossy(&bytes);

    let mut counts = count_words(&text);

    if global.verbose {
        eprintln!(
            "{} distinct words in {}",
            counts.len(),
            filename.display()
        );
    }

    if let Some(limit) = app.limit {
        counts.truncate(limit);
    }

    if app.json {
        println!("{}", format_counts_json(&counts)?);
    } else {
        output_formatted(&counts);
    }

    Ok(())
}

/// One `word: count` line per entry
fn format_counts_text(counts: &[WordCount]) -> Vec<String> {
    counts
        .iter()
        .map(|entry| format!("{}: {}", entry.word, entry.count))
        .collect()
}

fn format_counts_json(counts: &[WordCount]) -> Result<String> {
    serde_json::to_string_pretty(counts).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn output_formatted(counts: &[WordCount]) {
    if std::io::stdout().is_terminal() {
        for entry in counts {
            println!(
                "{}: {}",
                entry.word.bright_white().bold(),
                entry.count.to_string().bright_yellow()
            );
        }
    } else {
        for line in format_counts_text(counts) {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<WordCount> {
        vec![
            WordCount {
                word: "the".to_string(),
                count: 3,
            },
            WordCount {
                word: "cat".to_string(),
                count: 1,
            },
        ]
    }

    #[test]
    fn test_format_counts_text() {
        assert_eq!(format_counts_text(&sample()), vec!["the: 3", "cat: 1"]);
    }

    #[test]
    fn test_format_counts_text_empty() {
        assert!(format_counts_text(&[]).is_empty());
    }

    #[test]
    fn test_format_counts_json() {
        let json = format_counts_json(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed,
            serde_json::json!([
                {"word": "the", "count": 3},
                {"word": "cat", "count": 1}
            ])
        );
    }
}
