//! Short history of notable generation turnovers, shown in the UI.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// What kind of turnover an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// The last bird of a generation died.
    Extinction,
    /// A generation outlived every earlier one.
    Record,
    /// Every bird died at age 0, so parents were drawn uniformly.
    Fallback,
}

impl EventKind {
    /// Short tag for display.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Extinction => "extinct",
            EventKind::Record => "record",
            EventKind::Fallback => "fallback",
        }
    }
}

/// One entry in the [`EventLog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Generation the entry belongs to.
    pub generation: u32,
    /// Text shown to the user.
    pub description: String,
    /// Category.
    pub kind: EventKind,
}

/// Newest-first ring of at most `capacity` entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<LoggedEvent>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates an empty log holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepends an entry, evicting the oldest once the log is full.
    pub fn log(&mut self, generation: u32, description: String, kind: EventKind) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(LoggedEvent {
            generation,
            description,
            kind,
        });
    }

    /// All entries, newest first.
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.entries
    }

    /// Most recent entry of the given kind.
    pub fn latest(&self, kind: EventKind) -> Option<&LoggedEvent> {
        self.entries.iter().find(|event| event.kind == kind)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
