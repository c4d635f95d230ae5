//! Summary line rendering
//!
//! Every event renders to exactly one line of the form
//! `- {message} ({timestamp})`. The message comes from a per-kind rule;
//! kinds without a rule, and records whose payload cannot fill the rule's
//! placeholders, use the generic `{event_type} in {repo}` message instead.
//!
//! Output format examples:
//! - `- Pushed 3 commits to octocat/hello (2024-01-15 10:30)`
//! - `- opened an issue in octocat/hello (2024-01-15 10:30)`
//! - `- DiscussionEvent in octocat/hello (Unknown time)`

use super::types::{EventKind, EventRecord, Field, DEFAULT_ACTION};
use crate::config::{apply_color, AnsiColor};

/// Configuration for summary line rendering
#[derive(Debug, Clone, Default)]
pub struct SummaryLineConfig {
    /// Color for the parenthesized timestamp (default: none)
    pub timestamp_color: Option<AnsiColor>,
}

/// Message for one record, without bullet or timestamp
pub fn summary_message(record: &EventRecord) -> String {
    rule_message(record).unwrap_or_else(|| fallback_message(record))
}

/// `{event_type} in {repo}`, used for unknown kinds and failed substitutions
pub fn fallback_message(record: &EventRecord) -> String {
    format!("{} in {}", record.event_type(), record.repo_name())
}

/// Render the summary line for one record with the given configuration
pub fn render_summary_line(record: &EventRecord, config: &SummaryLineConfig) -> String {
    let timestamp = record.timestamp().to_string();
    format!(
        "- {} ({})",
        summary_message(record),
        apply_color(&timestamp, config.timestamp_color.as_ref())
    )
}

/// Render the summary line without colors
pub fn format_summary_line(record: &EventRecord) -> String {
    render_summary_line(record, &SummaryLineConfig::default())
}

/// Apply the rule for the record's kind. `None` means "use the fallback".
fn rule_message(record: &EventRecord) -> Option<String> {
    let repo = record.repo_name();

    let message = match record.kind() {
        EventKind::Push { commits } => {
            let count = match commits {
                Field::Missing => 0,
                Field::Value(commits) => commits.len(),
                Field::Invalid => return None,
            };
            format!("Pushed {} commits to {}", count, repo)
        }
        EventKind::Issues { action, .. } => {
            format!("{} an issue in {}", action_or_default(action)?, repo)
        }
        EventKind::IssueComment => format!("Commented on an issue in {}", repo),
        EventKind::Create { ref_type } => format!("Created {} in {}", ref_type.value()?, repo),
        EventKind::Delete { ref_type } => format!("Deleted {} in {}", ref_type.value()?, repo),
        EventKind::Watch => format!("Starred {}", repo),
        EventKind::Fork => format!("Forked {}", repo),
        EventKind::PullRequest { action, .. } => {
            format!("{} a pull request in {}", action_or_default(action)?, repo)
        }
        EventKind::PullRequestReview => format!("Reviewed a pull request in {}", repo),
        EventKind::PullRequestReviewComment => {
            format!("Commented on a pull request review in {}", repo)
        }
        EventKind::CommitComment => format!("Commented on a commit in {}", repo),
        EventKind::Release { action } => {
            format!("{} a release in {}", action_or_default(action)?, repo)
        }
        EventKind::Gollum => format!("Updated wiki pages in {}", repo),
        EventKind::Member { action } => {
            format!("{} a member to {}", action_or_default(action)?, repo)
        }
        EventKind::Public => format!("Made {} public", repo),
        EventKind::Sponsorship => format!("Sponsored {}", repo),
        EventKind::Other => return None,
    };

    Some(message)
}

fn action_or_default(action: &Field<String>) -> Option<&str> {
    match action {
        Field::Missing => Some(DEFAULT_ACTION),
        Field::Value(action) => Some(action),
        Field::Invalid => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> EventRecord {
        EventRecord::from_value(&value)
    }

    fn event(event_type: &str, payload: Value) -> EventRecord {
        record(json!({
            "type": event_type,
            "repo": {"name": "octo/repo"},
            "created_at": "2024-01-15T10:30:45Z",
            "payload": payload
        }))
    }

    #[test]
    fn test_unknown_type_uses_fallback() {
        let line = format_summary_line(&event("DiscussionEvent", json!({})));
        assert_eq!(line, "- DiscussionEvent in octo/repo (2024-01-15 10:30)");
    }

    #[test]
    fn test_push_commit_count() {
        let commits = json!([{"sha": "a"}, {"sha": "b"}, {"sha": "c"}]);
        let line = format_summary_line(&event("PushEvent", json!({"commits": commits})));
        assert_eq!(line, "- Pushed 3 commits to octo/repo (2024-01-15 10:30)");

        let empty = format_summary_line(&event("PushEvent", json!({"commits": []})));
        assert_eq!(empty, "- Pushed 0 commits to octo/repo (2024-01-15 10:30)");
    }

    #[test]
    fn test_push_without_commits_counts_zero() {
        let message = summary_message(&event("PushEvent", json!({})));
        assert_eq!(message, "Pushed 0 commits to octo/repo");
    }

    #[test]
    fn test_push_with_malformed_commits_falls_back() {
        let message = summary_message(&event("PushEvent", json!({"commits": "three"})));
        assert_eq!(message, "PushEvent in octo/repo");
    }

    #[test]
    fn test_issue_and_pull_request_actions() {
        assert_eq!(
            summary_message(&event("IssuesEvent", json!({"action": "opened"}))),
            "opened an issue in octo/repo"
        );
        assert_eq!(
            summary_message(&event("PullRequestEvent", json!({"action": "closed"}))),
            "closed a pull request in octo/repo"
        );
    }

    #[test]
    fn test_missing_action_uses_default() {
        assert_eq!(
            summary_message(&event("IssuesEvent", json!({}))),
            "performed action on an issue in octo/repo"
        );
        assert_eq!(
            summary_message(&event("PullRequestEvent", json!({}))),
            "performed action on a pull request in octo/repo"
        );
    }

    #[test]
    fn test_invalid_action_falls_back() {
        assert_eq!(
            summary_message(&event("IssuesEvent", json!({"action": ["opened"]}))),
            "IssuesEvent in octo/repo"
        );
    }

    #[test]
    fn test_ref_type_substitution() {
        assert_eq!(
            summary_message(&event("CreateEvent", json!({"ref_type": "branch"}))),
            "Created branch in octo/repo"
        );
        assert_eq!(
            summary_message(&event("DeleteEvent", json!({"ref_type": "tag"}))),
            "Deleted tag in octo/repo"
        );
        assert_eq!(
            summary_message(&event("CreateEvent", json!({}))),
            "CreateEvent in octo/repo"
        );
    }

    #[test]
    fn test_release_and_member_actions() {
        assert_eq!(
            summary_message(&event("ReleaseEvent", json!({"action": "published"}))),
            "published a release in octo/repo"
        );
        assert_eq!(
            summary_message(&event("MemberEvent", json!({"action": "added"}))),
            "added a member to octo/repo"
        );
    }

    #[test]
    fn test_fixed_messages() {
        let cases = [
            ("IssueCommentEvent", "Commented on an issue in octo/repo"),
            ("WatchEvent", "Starred octo/repo"),
            ("ForkEvent", "Forked octo/repo"),
            ("PullRequestReviewEvent", "Reviewed a pull request in octo/repo"),
            (
                "PullRequestReviewCommentEvent",
                "Commented on a pull request review in octo/repo",
            ),
            ("CommitCommentEvent", "Commented on a commit in octo/repo"),
            ("GollumEvent", "Updated wiki pages in octo/repo"),
            ("PublicEvent", "Made octo/repo public"),
            ("SponsorshipEvent", "Sponsored octo/repo"),
        ];
        for (event_type, expected) in cases {
            assert_eq!(summary_message(&event(event_type, json!({}))), expected);
        }
    }

    #[test]
    fn test_missing_everything() {
        let line = format_summary_line(&record(json!({})));
        assert_eq!(line, "- UnknownEvent in Unknown Repository (Unknown time)");
    }

    #[test]
    fn test_malformed_timestamp_verbatim() {
        let line = format_summary_line(&record(json!({
            "type": "WatchEvent",
            "repo": {"name": "octo/repo"},
            "created_at": "not-a-date"
        })));
        assert_eq!(line, "- Starred octo/repo (not-a-date)");
    }

    #[test]
    fn test_timestamp_color() {
        let config = SummaryLineConfig {
            timestamp_color: Some(AnsiColor::Color16 { c16: 8 }),
        };
        let line = render_summary_line(&event("WatchEvent", json!({})), &config);
        assert_eq!(line, "- Starred octo/repo (\x1b[90m2024-01-15 10:30\x1b[0m)");
    }
}
