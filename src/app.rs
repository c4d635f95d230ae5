//! Fetch-and-print workflow behind the `gh-activity <USERNAME>` command
//!
//! Kept apart from `main` so the output layout and outcome can be checked
//! against any [`EventSource`] and any writer.

use crate::cli::Cli;
use crate::config::Config;
use crate::core::{render_statistics, FeedConfig, FeedRenderer};
use crate::utils::EventSource;
use std::io::{self, Write};
use std::process::ExitCode;

/// How a feed run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Feed printed
    Rendered,
    /// The user has no public activity
    Empty,
    /// The source failed; messages went to the error writer
    FetchFailed,
}

impl RunOutcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunOutcome::Rendered | RunOutcome::Empty => ExitCode::SUCCESS,
            RunOutcome::FetchFailed => ExitCode::FAILURE,
        }
    }
}

/// Fetch `username`'s feed from `source` and print it
///
/// Normal output goes to `out`, fetch errors to `err`. Only a failing
/// writer makes this return `Err`.
pub fn run_with<S, O, E>(
    source: &S,
    username: &str,
    cli: &Cli,
    config: &Config,
    out: &mut O,
    err: &mut E,
) -> io::Result<RunOutcome>
where
    S: EventSource + ?Sized,
    O: Write,
    E: Write,
{
    writeln!(out, "Fetching activities for {}...", username)?;

    let records = match source.fetch(username) {
        Ok(records) => records,
        Err(e) => {
            tracing::debug!(error = ?e, "fetch failed");
            writeln!(err, "Error: {}", e)?;
            if let Some(hint) = e.hint() {
                writeln!(err, "{}", hint)?;
            }
            writeln!(
                err,
                "\nFailed to fetch activities. Please check the username and try again."
            )?;
            return Ok(RunOutcome::FetchFailed);
        }
    };

    if records.is_empty() {
        writeln!(out, "No recent activities found for {}", username)?;
        return Ok(RunOutcome::Empty);
    }

    writeln!(out, "\nRecent GitHub activities for {}:", username)?;
    writeln!(out, "{}", "=".repeat(60))?;

    let limit = cli.resolve_limit(config.display.default_limit, records.len());
    let renderer = FeedRenderer::new(FeedConfig::from_display(&config.display));
    for line in renderer.render(&records, limit) {
        writeln!(out, "{}", line)?;
    }

    if cli.stats || config.display.show_stats {
        for line in render_statistics(&records) {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(RunOutcome::Rendered)
}
