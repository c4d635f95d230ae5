//! Activity feed data structures
//!
//! This module defines the normalized shape of one GitHub activity event.
//! Every accessor returns either a decoded value or a documented default,
//! so callers never have to handle a missing field themselves.

use chrono::NaiveDateTime;
use std::fmt;

/// Event type shown when the record carries no `type`
pub const UNKNOWN_EVENT_TYPE: &str = "UnknownEvent";

/// Repository name shown when the record carries no `repo.name`
pub const UNKNOWN_REPOSITORY: &str = "Unknown Repository";

/// Timestamp text shown when the record carries no `created_at`
pub const UNKNOWN_TIME: &str = "Unknown time";

/// Action text used when an event that normally carries one has none
pub const DEFAULT_ACTION: &str = "performed action on";

/// Display format for parsed timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Decoded state of one payload field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// Key not present (or `null`)
    #[default]
    Missing,
    /// Key present but with an unexpected JSON shape
    Invalid,
    Value(T),
}

impl<T> Field<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// One entry of a push event's `payload.commits`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Commit {
    pub sha: Option<String>,
    pub message: Option<String>,
}

impl Commit {
    /// An entry that decoded to nothing displayable
    pub fn is_empty(&self) -> bool {
        self.sha.is_none() && self.message.is_none()
    }
}

/// Event classification with the payload fields each kind uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push { commits: Field<Vec<Commit>> },
    Issues {
        action: Field<String>,
        issue_title: Option<String>,
    },
    IssueComment,
    Create { ref_type: Field<String> },
    Delete { ref_type: Field<String> },
    Watch,
    Fork,
    PullRequest {
        action: Field<String>,
        pr_title: Option<String>,
    },
    PullRequestReview,
    PullRequestReviewComment,
    CommitComment,
    Release { action: Field<String> },
    Gollum,
    Member { action: Field<String> },
    Public,
    Sponsorship,
    /// Any type tag without a dedicated rule
    Other,
}

/// `created_at` as it will be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// Wall-clock time in the offset the feed reported it in
    Parsed(NaiveDateTime),
    /// Unparseable value, shown verbatim
    Raw(String),
    Unknown,
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Parsed(dt) => write!(f, "{}", dt.format(TIMESTAMP_FORMAT)),
            Timestamp::Raw(raw) => f.write_str(raw),
            Timestamp::Unknown => f.write_str(UNKNOWN_TIME),
        }
    }
}

/// One normalized activity event
///
/// Built once from the fetched JSON (see `feed_parser`) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub(crate) event_type: Option<String>,
    pub(crate) repo_name: Option<String>,
    pub(crate) created_at: Timestamp,
    pub(crate) kind: EventKind,
}

impl EventRecord {
    /// Raw type tag, or `UnknownEvent`
    pub fn event_type(&self) -> &str {
        self.event_type.as_deref().unwrap_or(UNKNOWN_EVENT_TYPE)
    }

    /// `repo.name`, or `Unknown Repository`
    pub fn repo_name(&self) -> &str {
        self.repo_name.as_deref().unwrap_or(UNKNOWN_REPOSITORY)
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }
}

/// Truncate to `max_chars` characters, appending `...` only when something was cut
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
        None => s.to_string(),
    }
}

/// First `len` characters of a commit sha
pub fn short_sha(sha: &str, len: usize) -> &str {
    match sha.char_indices().nth(len) {
        Some((byte_idx, _)) => &sha[..byte_idx],
        None => sha,
    }
}

/// First line of a (possibly multi-line) message
pub fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}
