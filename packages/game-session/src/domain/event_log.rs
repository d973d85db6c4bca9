//! Append-only history of applied events, rendered for display.

use tracing::trace;

use crate::domain::events::GameEvent;

/// One log per session. Phases never own a copy; the session lends it to
/// each transition, so history survives every phase change.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct EventLog {
    entries: Vec<String>,
    closed: bool,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, event: &GameEvent) {
        if self.closed {
            return;
        }
        let entry = event.describe();
        trace!(kind = event.kind().as_str(), entry = %entry, "event logged");
        self.entries.push(entry);
    }

    /// Snapshot of the rendered entries, in arrival order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Discards history and refuses further appends.
    pub fn close(&mut self) {
        self.entries = Vec::new();
        self.closed = true;
    }
}
