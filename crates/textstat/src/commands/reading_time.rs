//! Reading-time command — label for a word count.

use clap::Args;
use tracing::{debug, instrument};

use textstat_core::metrics;

/// Arguments for the `reading-time` subcommand.
#[derive(Args, Debug)]
pub struct ReadingTimeArgs {
    /// Number of words.
    pub words: usize,
}

/// Print the estimated reading time for a word count.
#[instrument(name = "cmd_reading_time", skip_all, fields(words = args.words))]
pub fn cmd_reading_time(args: ReadingTimeArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = args.words, "executing reading-time command");

    let reading_time = metrics::estimate_reading_time(args.words);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reading_time)?);
    } else {
        println!("{reading_time}");
    }

    Ok(())
}
