//! Transition journal.
//!
//! The journal records state names and timestamps only, never state values,
//! and keeps at most `limit` records, dropping the oldest first.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Record of a single completed transition.
///
/// # Example
///
/// ```rust
/// use hookstate::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "Idle".to_string(),
///     to: "Running".to_string(),
///     timestamp: Utc::now(),
///     deferred: false,
/// };
/// assert_eq!(record.to, "Running");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Name of the retired state
    pub from: String,
    /// Name of the installed state
    pub to: String,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
    /// Whether the transition was requested from inside a hook
    pub deferred: bool,
}

/// Bounded, ordered journal of completed transitions.
///
/// # Example
///
/// ```rust
/// use hookstate::History;
///
/// let mut history = History::new(2);
/// history.record("A", "B", false);
/// history.record("B", "C", false);
/// history.record("C", "A", true);
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.path(), vec!["B", "C", "A"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct History {
    limit: usize,
    records: VecDeque<TransitionRecord>,
}

/// Serialized form of `History`, trimmed to its limit on load.
#[derive(Deserialize)]
struct StoredHistory {
    limit: usize,
    records: VecDeque<TransitionRecord>,
}

impl From<StoredHistory> for History {
    fn from(stored: StoredHistory) -> Self {
        let mut history = Self {
            limit: stored.limit,
            records: stored.records,
        };
        history.trim(stored.limit);
        history
    }
}

impl History {
    /// Create an empty journal keeping at most `limit` records.
    /// A limit of zero disables recording.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            records: VecDeque::with_capacity(limit.min(64)),
        }
    }

    pub fn record(&mut self, from: &str, to: &str, deferred: bool) {
        if self.limit == 0 {
            self.records.clear();
            return;
        }
        self.trim(self.limit - 1);
        self.records.push_back(TransitionRecord {
            from: from.to_string(),
            to: to.to_string(),
            timestamp: Utc::now(),
            deferred,
        });
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records from oldest to newest.
    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    /// Names of the states traversed: the `from` of the oldest retained
    /// record, then the `to` of every record.
    pub fn path(&self) -> Vec<&str> {
        let Some(first) = self.records.front() else {
            return Vec::new();
        };

        std::iter::once(first.from.as_str())
            .chain(self.records.iter().map(|r| r.to.as_str()))
            .collect()
    }

    /// Time between the oldest and newest retained record.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.records.front()?;
        let last = self.records.back()?;
        Some(last.timestamp - first.timestamp)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Drop the oldest records until at most `keep` remain.
    fn trim(&mut self, keep: usize) {
        while self.records.len() > keep {
            self.records.pop_front();
        }
    }
}
