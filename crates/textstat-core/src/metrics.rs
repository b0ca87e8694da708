//! Text statistics: character, word, paragraph and sentence counts, plus an
//! estimated reading time.
//!
//! Every function here is total and pure. Whitespace means
//! [`char::is_whitespace`] throughout, which is the same definition
//! [`str::trim`] and [`str::split_whitespace`] use, so the character and word
//! counts always agree on what a separator is.
//!
//! Paragraph and sentence counts are punctuation/blank-line heuristics, not
//! linguistic segmentation. "Dr. Smith" counts as two sentences and "3.14" as
//! two; that is the expected output.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Average reading speed used by [`estimate_reading_time`].
pub const WORDS_PER_MINUTE: usize = 200;

/// A newline, any run of whitespace-only content, then another newline.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// One or more sentence terminators in any mixture (`?!`, `...`).
static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Statistics computed from a single snapshot of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextStatistics {
    /// Number of characters, whitespace included.
    pub chars_with_spaces: usize,
    /// Number of characters after removing all whitespace.
    pub chars_without_spaces: usize,
    /// Number of whitespace-delimited words.
    pub word_count: usize,
    /// Estimated reading time derived from `word_count`.
    pub reading_time: ReadingTime,
    /// Number of blank-line separated paragraphs.
    pub paragraph_count: usize,
    /// Number of punctuation-delimited sentences.
    pub sentence_count: usize,
}

/// Estimated reading time, split into hours and leftover minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReadingTime {
    /// Total minutes, rounded up.
    pub total_minutes: u64,
    /// Whole hours (`total_minutes / 60`).
    pub hours: u64,
    /// Minutes left over after `hours` (or all of them below one hour).
    pub minutes: u64,
    /// Human-readable label, e.g. `"2 minutes"` or `"1 hour 0 minutes"`.
    pub label: String,
}

impl ReadingTime {
    /// Build a reading time from a total minute count.
    ///
    /// Below one hour the label carries only minutes. From 60 minutes on it
    /// carries hours and the leftover minutes, even when the leftover is zero.
    pub fn from_minutes(total_minutes: u64) -> Self {
        if total_minutes < 60 {
            return Self {
                total_minutes,
                hours: 0,
                minutes: total_minutes,
                label: with_unit(total_minutes, "minute", "minutes"),
            };
        }

        let hours = total_minutes / 60;
        let minutes = total_minutes % 60;
        let label = format!(
            "{} {}",
            with_unit(hours, "hour", "hours"),
            with_unit(minutes, "minute", "minutes")
        );

        Self {
            total_minutes,
            hours,
            minutes,
            label,
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn with_unit(n: u64, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Compute every statistic for `text`.
///
/// Holds no state between calls, so it is safe to call on every edit and from
/// any number of threads at once.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze(text: &str) -> TextStatistics {
    let word_count = count_words(text);

    TextStatistics {
        chars_with_spaces: count_chars_with_spaces(text),
        chars_without_spaces: count_chars_without_spaces(text),
        word_count,
        reading_time: estimate_reading_time(word_count),
        paragraph_count: count_paragraphs(text),
        sentence_count: count_sentences(text),
    }
}

/// Count every character, whitespace included.
pub fn count_chars_with_spaces(text: &str) -> usize {
    text.chars().count()
}

/// Count characters that are not whitespace.
pub fn count_chars_without_spaces(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Count maximal runs of non-whitespace characters.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count paragraphs separated by one or more blank lines.
pub fn count_paragraphs(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    let count = PARAGRAPH_BREAK
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count();

    count.max(1)
}

/// Count runs of text between `.`, `!` and `?` terminators.
pub fn count_sentences(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    SENTENCE_TERMINATORS
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Estimate reading time at [`WORDS_PER_MINUTE`], rounding up to whole minutes.
pub fn estimate_reading_time(word_count: usize) -> ReadingTime {
    if word_count == 0 {
        return ReadingTime::from_minutes(0);
    }

    let minutes = word_count.div_ceil(WORDS_PER_MINUTE).max(1);
    ReadingTime::from_minutes(minutes as u64)
}
