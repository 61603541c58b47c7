use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The communication log keeps only this many entries; anything older is
/// evicted when a new entry arrives.
pub const COMM_LOG_CAPACITY: usize = 10;

/// One radio/command message in the communication log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub message: String,
    pub device_id: String,
    pub is_emergency: bool,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(
        message: impl Into<String>,
        device_id: impl Into<String>,
        is_emergency: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            message: message.into(),
            device_id: device_id.into(),
            is_emergency,
            timestamp,
        }
    }
}

/// Newest-first bounded ring of communication messages.
#[derive(Debug, Clone, Default)]
pub struct CommLog {
    entries: VecDeque<LogEntry>,
}

impl CommLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(COMM_LOG_CAPACITY),
        }
    }

    /// Append an entry at the front, evicting the oldest past capacity.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(COMM_LOG_CAPACITY);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}
