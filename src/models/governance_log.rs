//! Bounded audit trail shown on the AI Governance Logs page.
//!
//! Holds the most recent screening decisions received from the feed and the
//! operator's consent changes. Oldest entries are dropped once the log is full.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FeedEvent;

/// Entries kept before the oldest is dropped
pub const GOVERNANCE_LOG_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LogKind {
    /// A screened transaction arrived from the feed
    Decision { transaction_id: Uuid, flagged: bool },
    /// The operator granted or revoked location permission
    Consent { granted: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: LogKind,
}

#[derive(Debug, Clone)]
pub struct GovernanceLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for GovernanceLog {
    fn default() -> Self {
        Self::new()
    }
}

impl GovernanceLog {
    pub fn new() -> Self {
        Self::with_capacity(GOVERNANCE_LOG_CAPACITY)
    }

    /// A log keeping at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record_decision(&mut self, event: &FeedEvent) {
        self.push(LogEntry {
            at: event.received_at,
            kind: LogKind::Decision {
                transaction_id: event.transaction_id,
                flagged: event.flagged,
            },
        });
    }

    pub fn record_consent(&mut self, granted: bool, at: DateTime<Utc>) {
        self.push(LogEntry {
            at,
            kind: LogKind::Consent { granted },
        });
    }

    fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries, newest first.
    pub fn recent(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
