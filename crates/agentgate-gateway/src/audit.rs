//! Append-only audit trail of governance decisions.
//!
//! Insertion order is audit order. Entries are never mutated. With the default
//! config the log grows without bound for the process lifetime; setting
//! `audit.max_entries` turns it into a ring that evicts the oldest entry.

use std::collections::VecDeque;

use agentgate_core::decision::AuditEntry;

#[derive(Debug, Default)]
pub struct AuditLog {
    entries: VecDeque<AuditEntry>,
    max_entries: Option<usize>,
}

impl AuditLog {
    pub fn new(max_entries: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    pub fn append(&mut self, entry: AuditEntry) {
        if let Some(cap) = self.max_entries {
            while self.entries.len() >= cap {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(entry);
    }

    /// Rendered copy of the log, optionally restricted to VIOLATION entries.
    pub fn query(&self, violations_only: bool) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| !violations_only || e.is_violation())
            .map(AuditEntry::render)
            .collect()
    }

    /// Structured copy of the log.
    pub fn snapshot(&self) -> Vec<AuditEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
