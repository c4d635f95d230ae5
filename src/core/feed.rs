//! Bounded rendering of an activity feed
//!
//! Combines the per-event summary and detail renderers into the lines the
//! CLI prints, and renders the statistics section.
//!
//! # Output Structure
//!
//! For each displayed event:
//!
//! 1. **Summary line**: `- Pushed 2 commits to octo/repo (2024-01-15 10:30)`
//! 2. **Detail block** (optional): commits, issue title or pull request title
//!
//! Followed by a blank line and a footer, either `... and N more activities`
//! or `Total: N activities`.
//!
//! # Example Usage
//!
//! ```ignore
//! use gh_activity::core::activity::parse_feed;
//! use gh_activity::core::feed::{FeedConfig, FeedRenderer};
//!
//! let records = parse_feed(&body)?;
//! let renderer = FeedRenderer::new(FeedConfig::default());
//! for line in renderer.render(&records, 10) {
//!     println!("{}", line);
//! }
//! ```

use crate::config::DisplayConfig;

use super::activity::{
    render_detail_block, render_summary_line, statistics, ActivityStats, DetailBlockConfig,
    EventRecord, SummaryLineConfig,
};

/// Configuration for feed rendering
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Whether detail blocks follow their summary line
    pub show_details: bool,
    pub summary_config: SummaryLineConfig,
    pub detail_config: DetailBlockConfig,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            show_details: true,
            summary_config: SummaryLineConfig::default(),
            detail_config: DetailBlockConfig::default(),
        }
    }
}

impl FeedConfig {
    /// Build from the `[display]` section; colors apply only when enabled
    pub fn from_display(display: &DisplayConfig) -> Self {
        let (timestamp_color, detail_color) = if display.color {
            (display.timestamp_color.clone(), display.detail_color.clone())
        } else {
            (None, None)
        };

        Self {
            show_details: display.show_details,
            summary_config: SummaryLineConfig { timestamp_color },
            detail_config: DetailBlockConfig {
                color: detail_color,
                ..Default::default()
            },
        }
    }

    /// Builder method to set show_details
    pub fn show_details(mut self, show: bool) -> Self {
        self.show_details = show;
        self
    }
}

/// Feed renderer
pub struct FeedRenderer {
    config: FeedConfig,
}

impl FeedRenderer {
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }

    /// Render the first `limit` records followed by the footer
    ///
    /// Records keep the order they were received in (newest first for the
    /// GitHub feed).
    pub fn render(&self, records: &[EventRecord], limit: usize) -> Vec<String> {
        let mut lines = Vec::new();

        for record in records.iter().take(limit) {
            lines.push(render_summary_line(record, &self.config.summary_config));
            if self.config.show_details {
                lines.extend(render_detail_block(record, &self.config.detail_config));
            }
        }

        lines.push(String::new());
        lines.push(footer(records.len(), limit));
        lines
    }
}

fn footer(total: usize, limit: usize) -> String {
    if total > limit {
        format!("... and {} more activities", total - limit)
    } else {
        format!("Total: {} activities", total)
    }
}

/// Render with the default configuration
pub fn render(records: &[EventRecord], limit: usize) -> Vec<String> {
    FeedRenderer::new(FeedConfig::default()).render(records, limit)
}

/// Render the statistics section; empty for an empty feed
pub fn render_statistics(records: &[EventRecord]) -> Vec<String> {
    match statistics(records) {
        Some(stats) => format_statistics(&stats),
        None => Vec::new(),
    }
}

/// Lay out already computed statistics
pub fn format_statistics(stats: &ActivityStats) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Activity Statistics:".to_string(),
        "-".repeat(30),
        "Events by type:".to_string(),
    ];

    for entry in &stats.event_types {
        lines.push(format!("  {}: {}", entry.display_name, entry.count));
    }

    lines.push(String::new());
    lines.push("Top repositories:".to_string());
    for entry in &stats.top_repositories {
        lines.push(format!("  {}: {} events", entry.key, entry.count));
    }

    lines
}
