//! Core library for textstat.
//!
//! This crate computes descriptive statistics over freeform text and provides
//! the foundational types used by the `textstat` CLI and any downstream
//! consumers.
//!
//! # Modules
//!
//! - [`metrics`] - Character, word, paragraph, sentence and reading-time counts
//! - [`live`] - Mutable text holder that recomputes statistics on every change
//! - [`markdown`] - Markdown-to-prose preprocessing
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textstat_core::metrics;
//!
//! let stats = metrics::analyze("Hello world.\n\nThis is great!");
//! assert_eq!(stats.word_count, 6);
//! assert_eq!(stats.paragraph_count, 2);
//! assert_eq!(stats.reading_time.to_string(), "1 minute");
//! ```
#![deny(unsafe_code)]

pub mod config;

pub mod error;

pub mod live;

pub mod markdown;

pub mod metrics;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};

pub use error::{ConfigError, ConfigResult};

pub use live::LiveText;

pub use metrics::{ReadingTime, TextStatistics, analyze};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
