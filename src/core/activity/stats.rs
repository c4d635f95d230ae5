//! Frequency statistics over a whole activity feed
//!
//! Counts are always taken over every fetched record, independent of how
//! many records were displayed.

use super::types::EventRecord;
use std::collections::HashMap;

/// Number of repositories kept in the ranking
pub const TOP_REPOSITORIES: usize = 5;

/// Tally key for a record without a type or repository name
pub const UNKNOWN_KEY: &str = "Unknown";

/// One key of a tally with its number of occurrences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEntry {
    pub key: String,
    pub count: usize,
}

/// Insertion-ordered frequency count
#[derive(Debug, Clone, Default)]
struct Tally {
    entries: Vec<TallyEntry>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push(TallyEntry {
                    key: key.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Entries by descending count; equal counts keep first-seen order
    fn ranked(self) -> Vec<TallyEntry> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

/// Both tallies of a feed, built in one pass
#[derive(Debug, Clone, Default)]
pub struct StatTally {
    event_types: Tally,
    repos: Tally,
}

impl StatTally {
    pub fn from_records(records: &[EventRecord]) -> Self {
        records.iter().fold(Self::default(), |mut tally, record| {
            // Statistics use their own default, unlike the summary line
            tally
                .event_types
                .add(record.event_type.as_deref().unwrap_or(UNKNOWN_KEY));
            tally
                .repos
                .add(record.repo_name.as_deref().unwrap_or(UNKNOWN_KEY));
            tally
        })
    }

    pub fn is_empty(&self) -> bool {
        self.event_types.entries.is_empty()
    }

    pub fn into_stats(self) -> ActivityStats {
        let event_types = self
            .event_types
            .ranked()
            .into_iter()
            .map(|entry| EventTypeCount {
                display_name: display_name(&entry.key).to_string(),
                event_type: entry.key,
                count: entry.count,
            })
            .collect();

        let mut top_repositories = self.repos.ranked();
        top_repositories.truncate(TOP_REPOSITORIES);

        ActivityStats {
            event_types,
            top_repositories,
        }
    }
}

/// Count of one event type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTypeCount {
    /// Raw tag, e.g. `PushEvent`
    pub event_type: String,
    /// Tag without its `Event` suffix, e.g. `Push`
    pub display_name: String,
    pub count: usize,
}

/// Ranked statistics for a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityStats {
    pub event_types: Vec<EventTypeCount>,
    /// At most `TOP_REPOSITORIES` entries
    pub top_repositories: Vec<TallyEntry>,
}

/// Compute statistics over the whole feed. `None` for an empty feed.
pub fn statistics(records: &[EventRecord]) -> Option<ActivityStats> {
    let tally = StatTally::from_records(records);
    if tally.is_empty() {
        return None;
    }
    Some(tally.into_stats())
}

/// Event type tag without a trailing `Event`
pub fn display_name(event_type: &str) -> &str {
    event_type.strip_suffix("Event").unwrap_or(event_type)
}
