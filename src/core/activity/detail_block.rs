//! Detail lines shown under a summary line
//!
//! Only push, issue and pull request events have a detail block. Each block
//! is optional on its own: when the payload lacks the data a block needs,
//! the block is left out and the summary line still renders.

use super::types::{first_line, short_sha, truncate_with_ellipsis, Commit, EventKind, EventRecord};
use crate::config::{apply_color, AnsiColor};

/// Bullet in front of each commit line
const BULLET: &str = "\u{2022}";

/// Configuration for detail block rendering
#[derive(Debug, Clone)]
pub struct DetailBlockConfig {
    /// Maximum number of commits listed for a push (default: 3, the most recent)
    pub max_commits: usize,
    /// Characters of the sha shown (default: 7)
    pub sha_len: usize,
    /// Maximum length of a commit message's first line (default: 50)
    pub max_message_len: usize,
    /// Maximum length of an issue / pull request title (default: 60)
    pub max_title_len: usize,
    /// Color applied to every detail line (default: none)
    pub color: Option<AnsiColor>,
}

impl Default for DetailBlockConfig {
    fn default() -> Self {
        Self {
            max_commits: 3,
            sha_len: 7,
            max_message_len: 50,
            max_title_len: 60,
            color: None,
        }
    }
}

/// Render the detail block for one record
///
/// Returns an empty vector for kinds without details or when the needed
/// payload data is absent.
///
/// # Output Format Examples
/// - Push: `  Commits:` followed by `    • abc1234: Fix parser`
/// - Issue: `  Issue: "Crash on start"`
/// - Pull request: `  PR: "Add retry support"`
pub fn render_detail_block(record: &EventRecord, config: &DetailBlockConfig) -> Vec<String> {
    let lines = match record.kind() {
        EventKind::Push { commits } => match commits.value() {
            Some(commits) => commit_lines(commits, config),
            None => Vec::new(),
        },
        EventKind::Issues {
            issue_title: Some(title),
            ..
        } => vec![title_line("Issue", title, config)],
        EventKind::PullRequest {
            pr_title: Some(title),
            ..
        } => vec![title_line("PR", title, config)],
        _ => Vec::new(),
    };

    lines
        .into_iter()
        .map(|line| apply_color(&line, config.color.as_ref()))
        .collect()
}

/// Render the detail block without colors
pub fn format_detail_block(record: &EventRecord) -> Vec<String> {
    render_detail_block(record, &DetailBlockConfig::default())
}

fn commit_lines(commits: &[Commit], config: &DetailBlockConfig) -> Vec<String> {
    // Last N in array order; entries that decoded to nothing are dropped
    let start = commits.len().saturating_sub(config.max_commits);
    let shown: Vec<String> = commits[start..]
        .iter()
        .filter(|c| !c.is_empty())
        .map(|c| commit_line(c, config))
        .collect();

    if shown.is_empty() {
        return shown;
    }

    let mut lines = Vec::with_capacity(shown.len() + 1);
    lines.push("  Commits:".to_string());
    lines.extend(shown);
    lines
}

fn commit_line(commit: &Commit, config: &DetailBlockConfig) -> String {
    let sha = short_sha(commit.sha.as_deref().unwrap_or_default(), config.sha_len);
    let message = first_line(commit.message.as_deref().unwrap_or_default());
    format!(
        "    {} {}: {}",
        BULLET,
        sha,
        truncate_with_ellipsis(message, config.max_message_len)
    )
}

fn title_line(label: &str, title: &str, config: &DetailBlockConfig) -> String {
    format!(
        "  {}: \"{}\"",
        label,
        truncate_with_ellipsis(title, config.max_title_len)
    )
}
