//! Live command — recompute statistics as text arrives on stdin.
//!
//! Each line read from stdin is one change event: it is appended to a
//! [`LiveText`] and the refreshed statistics are printed immediately. The
//! initial (empty) statistics are printed before any input is read.

use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use textstat_core::live::LiveText;
use textstat_core::metrics::TextStatistics;

/// Arguments for the `live` subcommand.
#[derive(Args, Debug, Default)]
pub struct LiveArgs {
    /// A line equal to this marker clears the text instead of being appended.
    #[arg(long, value_name = "MARKER")]
    pub clear_marker: Option<String>,
}

/// One emitted update.
#[derive(Debug, Serialize)]
struct LiveUpdate<'a> {
    revision: u64,
    #[serde(flatten)]
    stats: &'a TextStatistics,
}

/// Read stdin line by line, printing updated statistics after each line.
#[instrument(name = "cmd_live", skip_all)]
pub fn cmd_live(
    args: LiveArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(clear_marker = ?args.clear_marker, "executing live command");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_live(
        stdin.lock(),
        stdout.lock(),
        args.clear_marker.as_deref(),
        global_json,
        max_input_bytes,
    )
}

fn run_live<R: BufRead, W: Write>(
    mut reader: R,
    mut out: W,
    clear_marker: Option<&str>,
    json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let mut live = LiveText::new();
    emit(&mut out, &live, json)?;

    let mut line = String::new();
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .context("failed to read stdin")?;
        if read == 0 {
            break;
        }

        if clear_marker.is_some_and(|marker| line.trim_end_matches(['\r', '\n']) == marker) {
            live.clear();
        } else {
            if let Some(max) = max_input_bytes
                && live.text().len() + line.len() > max
            {
                bail!("input too large: live text would exceed {max} bytes");
            }
            live.push_str(&line);
        }

        emit(&mut out, &live, json)?;
    }

    debug!(revisions = live.revision(), "live input closed");
    Ok(())
}

fn emit<W: Write>(out: &mut W, live: &LiveText, json: bool) -> anyhow::Result<()> {
    let stats = live.stats();
    if json {
        let update = LiveUpdate {
            revision: live.revision(),
            stats,
        };
        serde_json::to_writer(&mut *out, &update)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{} words | {} chars ({} without spaces) | {} sentences | {} paragraphs | {}",
            stats.word_count.if_supports_color(Stream::Stdout, |t| t.bold()),
            stats.chars_with_spaces,
            stats.chars_without_spaces,
            stats.sentence_count,
            stats.paragraph_count,
            stats.reading_time,
        )?;
    }
    out.flush().context("failed to write statistics")?;
    Ok(())
}
