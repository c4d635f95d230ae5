//! Activity event model, formatting and statistics
//!
//! This module provides functionality for:
//! - Decoding the GitHub events feed into normalized records
//! - Rendering one summary line per event
//! - Rendering detail blocks for push, issue and pull request events
//! - Ranking event types and repositories by frequency

pub mod detail_block;
pub mod feed_parser;
pub mod stats;
pub mod summary_line;
pub mod types;

// Re-export commonly used items
pub use detail_block::{format_detail_block, render_detail_block, DetailBlockConfig};
pub use feed_parser::{parse_feed, records_from_value, FeedError};
pub use stats::{statistics, ActivityStats, EventTypeCount, StatTally, TallyEntry, TOP_REPOSITORIES};
pub use summary_line::{
    fallback_message, format_summary_line, render_summary_line, summary_message,
    SummaryLineConfig,
};
pub use types::{
    truncate_with_ellipsis, Commit, EventKind, EventRecord, Field, Timestamp, UNKNOWN_EVENT_TYPE,
    UNKNOWN_REPOSITORY, UNKNOWN_TIME,
};
