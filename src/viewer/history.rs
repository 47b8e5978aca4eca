//! Bounded record of tracked actions.

use std::collections::VecDeque;

use serde::Serialize;

use crate::viewer::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Monotonic across the viewer's lifetime, including evicted entries.
    pub sequence: u64,
    pub action: &'static str,
}

/// Oldest entries are evicted once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct History {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
    next_sequence: u64,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Record `intent` when it is tracked. Returns whether it was recorded.
    pub fn record<I: Intent>(&mut self, intent: &I) -> bool {
        if !intent.is_tracked() {
            return false;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            sequence: self.next_sequence,
            action: intent.name(),
        });
        self.next_sequence += 1;
        true
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::action::{Action, ActionKind};

    #[test]
    fn untracked_actions_are_ignored() {
        let mut history = History::new(4);
        assert!(!history.record(&Action::new(ActionKind::BodyMouseLeave)));
        assert!(history.is_empty());
    }

    #[test]
    fn oldest_entry_is_evicted() {
        let mut history = History::new(2);
        let copy = Action::new(ActionKind::CopyKeyDown).tracked();
        for _ in 0..3 {
            history.record(&copy);
        }
        let sequences: Vec<u64> = history.entries().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);
        assert_eq!(history.last().map(|e| e.action), Some("copyKeyDown"));
    }
}
