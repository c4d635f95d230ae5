//! Decoding of the GitHub events API response
//!
//! The events endpoint returns a JSON array of loosely-typed objects whose
//! `payload` shape depends on the event type. This module turns each element
//! into an [`EventRecord`], reading only the keys the formatter needs and
//! degrading every missing or oddly-shaped key to a default.

use super::types::{Commit, EventKind, EventRecord, Field, Timestamp};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use thiserror::Error;

/// Offset-carrying layouts tried after RFC 3339, in order
const OFFSET_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%z",
];

/// Naive layouts tried after the offset layouts, in order
const NAIVE_LAYOUTS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON array of events, got {0}")]
    NotAnArray(&'static str),
}

/// Parse a response body into event records, preserving feed order
pub fn parse_feed(body: &str) -> Result<Vec<EventRecord>, FeedError> {
    let value: Value = serde_json::from_str(body)?;
    records_from_value(&value)
}

/// Convert an already-decoded JSON document into event records
pub fn records_from_value(value: &Value) -> Result<Vec<EventRecord>, FeedError> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(FeedError::NotAnArray(json_kind(other))),
    };

    let records: Vec<EventRecord> = items.iter().map(EventRecord::from_value).collect();
    tracing::debug!(count = records.len(), "decoded activity feed");
    Ok(records)
}

impl EventRecord {
    /// Build a record from one element of the events array. Never fails.
    pub fn from_value(value: &Value) -> EventRecord {
        let empty = Map::new();
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => {
                tracing::warn!(kind = json_kind(value), "feed element is not an object");
                &empty
            }
        };

        let event_type = obj.get("type").and_then(|v| match v {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        });

        let repo_name = obj
            .get("repo")
            .and_then(|r| r.get("name"))
            .and_then(|n| n.as_str())
            .map(String::from);

        let created_at = parse_timestamp(obj.get("created_at"));

        let payload = obj
            .get("payload")
            .and_then(|p| p.as_object())
            .unwrap_or(&empty);
        let kind = classify(event_type.as_deref(), payload);

        EventRecord {
            event_type,
            repo_name,
            created_at,
            kind,
        }
    }
}

/// Map a type tag to its kind, decoding the payload fields that kind uses
fn classify(event_type: Option<&str>, payload: &Map<String, Value>) -> EventKind {
    match event_type.unwrap_or_default() {
        "PushEvent" => EventKind::Push {
            commits: commits_field(payload),
        },
        "IssuesEvent" => EventKind::Issues {
            action: string_field(payload, "action"),
            issue_title: nested_title(payload, "issue"),
        },
        "IssueCommentEvent" => EventKind::IssueComment,
        "CreateEvent" => EventKind::Create {
            ref_type: string_field(payload, "ref_type"),
        },
        "DeleteEvent" => EventKind::Delete {
            ref_type: string_field(payload, "ref_type"),
        },
        "WatchEvent" => EventKind::Watch,
        "ForkEvent" => EventKind::Fork,
        "PullRequestEvent" => EventKind::PullRequest {
            action: string_field(payload, "action"),
            pr_title: nested_title(payload, "pull_request"),
        },
        "PullRequestReviewEvent" => EventKind::PullRequestReview,
        "PullRequestReviewCommentEvent" => EventKind::PullRequestReviewComment,
        "CommitCommentEvent" => EventKind::CommitComment,
        "ReleaseEvent" => EventKind::Release {
            action: string_field(payload, "action"),
        },
        "GollumEvent" => EventKind::Gollum,
        "MemberEvent" => EventKind::Member {
            action: string_field(payload, "action"),
        },
        "PublicEvent" => EventKind::Public,
        "SponsorshipEvent" => EventKind::Sponsorship,
        _ => EventKind::Other,
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Field<String> {
    match obj.get(key) {
        None | Some(Value::Null) => Field::Missing,
        Some(Value::String(s)) => Field::Value(s.clone()),
        Some(_) => Field::Invalid,
    }
}

fn commits_field(payload: &Map<String, Value>) -> Field<Vec<Commit>> {
    match payload.get("commits") {
        None | Some(Value::Null) => Field::Missing,
        Some(Value::Array(items)) => Field::Value(items.iter().map(decode_commit).collect()),
        Some(other) => {
            tracing::warn!(kind = json_kind(other), "payload.commits is not an array");
            Field::Invalid
        }
    }
}

fn decode_commit(value: &Value) -> Commit {
    let text = |key: &str| value.get(key).and_then(|v| v.as_str()).map(String::from);
    Commit {
        sha: text("sha"),
        message: text("message"),
    }
}

/// `payload.<key>.title`, when `<key>` is an object carrying a string title
fn nested_title(payload: &Map<String, Value>, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(|v| v.as_object())
        .and_then(|o| o.get("title"))
        .and_then(|t| t.as_str())
        .map(String::from)
}

/// Interpret `created_at` for display
pub fn parse_timestamp(value: Option<&Value>) -> Timestamp {
    match value {
        None | Some(Value::Null) => Timestamp::Unknown,
        Some(Value::String(s)) if s.is_empty() => Timestamp::Unknown,
        Some(Value::String(s)) => match parse_iso8601(s) {
            Some(dt) => Timestamp::Parsed(dt),
            None => Timestamp::Raw(s.clone()),
        },
        Some(other) => Timestamp::Raw(other.to_string()),
    }
}

/// Parse an ISO 8601 string into its wall-clock time. A trailing `Z` is UTC.
fn parse_iso8601(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    // `Z` is the same instant as `+00:00`, which `%z` understands
    let with_offset = match s.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => s.to_string(),
    };
    for layout in OFFSET_LAYOUTS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, layout) {
            return Some(dt.naive_local());
        }
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, layout) {
            return Some(ndt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
