//! Stats command — character, word, sentence and paragraph counts.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use textstat_core::markdown;
use textstat_core::metrics::{self, TextStatistics};

use super::{read_input_file, read_input_stream};

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze. Reads stdin when omitted or `-`.
    pub file: Option<Utf8PathBuf>,

    /// Strip markdown formatting before counting (automatic for `.md` files).
    #[arg(long)]
    pub strip_markdown: bool,

    /// Fail when the text has more words than this.
    #[arg(long)]
    pub max_words: Option<usize>,
}

/// Statistics plus the word-limit verdict.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// The computed statistics.
    #[serde(flatten)]
    pub stats: TextStatistics,
    /// Word limit (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_words: Option<usize>,
    /// Whether the word count exceeds the limit.
    pub over_max: bool,
}

impl StatsReport {
    /// Analyze `text` and check it against an optional word limit.
    pub fn new(text: &str, max_words: Option<usize>) -> Self {
        let stats = metrics::analyze(text);
        let over_max = max_words.is_some_and(|max| stats.word_count > max);
        Self {
            stats,
            max_words,
            over_max,
        }
    }
}

/// Print statistics for a file or stdin.
#[instrument(name = "cmd_stats", skip_all, fields(file = ?args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    config_max_words: Option<usize>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, max_words = ?args.max_words, "executing stats command");

    let (name, content, is_markdown) = match args.file {
        Some(ref path) if path.as_str() != "-" => (
            path.to_string(),
            read_input_file(path, max_input_bytes)?,
            path.extension() == Some("md"),
        ),
        _ => (
            "<stdin>".to_string(),
            read_input_stream(std::io::stdin().lock(), max_input_bytes)?,
            false,
        ),
    };

    let text = if args.strip_markdown || is_markdown {
        markdown::strip_to_prose(&content)
    } else {
        content
    };

    let max_words = args.max_words.or(config_max_words);
    let report = StatsReport::new(&text, max_words);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_stats(&report.stats);

    if report.over_max {
        let max = report.max_words.unwrap_or(0);
        bail!(
            "{name} is {} words (max: {max}). Trim it down.",
            report.stats.word_count,
        );
    } else if let Some(max) = report.max_words {
        println!(
            "{} {name} is {} words (max: {max})",
            "PASS:".if_supports_color(Stream::Stdout, |t| t.green()),
            report.stats.word_count,
        );
    }

    Ok(())
}

fn print_stats(stats: &TextStatistics) {
    let rows: [(&str, String); 6] = [
        ("Characters", stats.chars_with_spaces.to_string()),
        ("Characters (no spaces)", stats.chars_without_spaces.to_string()),
        ("Words", stats.word_count.to_string()),
        ("Sentences", stats.sentence_count.to_string()),
        ("Paragraphs", stats.paragraph_count.to_string()),
        ("Reading time", stats.reading_time.to_string()),
    ];

    for (label, value) in rows {
        let label = format!("{label}:");
        println!(
            "{} {value}",
            format!("{label:<24}").if_supports_color(Stream::Stdout, |t| t.cyan()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_without_limit_never_over() {
        let report = StatsReport::new("one two three", None);
        assert_eq!(report.stats.word_count, 3);
        assert!(!report.over_max);
    }

    #[test]
    fn report_over_limit() {
        assert!(StatsReport::new("one two three", Some(2)).over_max);
        assert!(!StatsReport::new("one two three", Some(3)).over_max);
    }

    #[test]
    fn report_json_is_flat() {
        let report = StatsReport::new("Hello world.\n\nThis is great!", Some(10));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["word_count"], 6);
        assert_eq!(json["paragraph_count"], 2);
        assert_eq!(json["max_words"], 10);
        assert_eq!(json["over_max"], false);
        assert_eq!(json["reading_time"]["label"], "1 minute");
    }

    #[test]
    fn stats_on_file_succeeds() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "The cat sat. The dog ran.").unwrap();
        let args = StatsArgs {
            file: Some(Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()),
            strip_markdown: false,
            max_words: None,
        };
        assert!(cmd_stats(args, true, None, None).is_ok());
    }

    #[test]
    fn stats_over_config_limit_fails() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "The cat sat. The dog ran.").unwrap();
        let args = StatsArgs {
            file: Some(Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()),
            strip_markdown: false,
            max_words: None,
        };
        assert!(cmd_stats(args, false, Some(3), None).is_err());
    }
}
