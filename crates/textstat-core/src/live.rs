//! Mutable text holder for live statistics.
//!
//! [`LiveText`] owns the current text and the statistics for it. Every
//! change event (a replaced value, an appended chunk, a clear) recomputes the
//! statistics from the full text via [`metrics::analyze`], so readers always
//! see numbers that match [`LiveText::text`].

use crate::metrics::{self, TextStatistics};

/// Current text plus the statistics computed for it.
#[derive(Debug, Clone)]
pub struct LiveText {
    text: String,
    stats: TextStatistics,
    revision: u64,
}

impl Default for LiveText {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveText {
    /// Start with empty text. Statistics are computed immediately.
    pub fn new() -> Self {
        Self::with_text(String::new())
    }

    /// Start with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let stats = metrics::analyze(&text);
        Self {
            text,
            stats,
            revision: 0,
        }
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: impl Into<String>) -> &TextStatistics {
        self.text = text.into();
        self.refresh()
    }

    /// Append a chunk to the end of the text.
    pub fn push_str(&mut self, chunk: &str) -> &TextStatistics {
        self.text.push_str(chunk);
        self.refresh()
    }

    /// Empty the text.
    pub fn clear(&mut self) -> &TextStatistics {
        self.text.clear();
        self.refresh()
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Statistics for the current text.
    pub const fn stats(&self) -> &TextStatistics {
        &self.stats
    }

    /// Number of change events applied since construction.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn refresh(&mut self) -> &TextStatistics {
        self.revision += 1;
        self.stats = metrics::analyze(&self.text);
        tracing::trace!(
            revision = self.revision,
            words = self.stats.word_count,
            "statistics refreshed"
        );
        &self.stats
    }
}
