//! In-memory visit mapping.
//!
//! The registry is a plain data structure owned by whoever drives it (the
//! [`crate::core::controller::Tracker`] in this crate); it never touches the
//! store itself. At most one status per state, absence means "none".

use std::collections::BTreeMap;

use crate::core::stats::{self, VisitCounts};
use crate::models::{StateId, Status};

#[derive(Debug, Clone, Default)]
pub struct VisitRegistry {
    visits: BTreeMap<StateId, Status>,
}

impl VisitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole mapping, e.g. with a freshly loaded one.
    pub fn replace(&mut self, visits: BTreeMap<StateId, Status>) {
        self.visits = visits;
    }

    pub fn status(&self, id: StateId) -> Option<Status> {
        self.visits.get(&id).copied()
    }

    /// Apply a status change. `None` clears the entry. Returns the previous
    /// status so callers can tell whether anything actually changed.
    pub fn set(&mut self, id: StateId, status: Option<Status>) -> Option<Status> {
        match status {
            Some(status) => self.visits.insert(id, status),
            None => self.visits.remove(&id),
        }
    }

    pub fn clear(&mut self) {
        self.visits.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn visits(&self) -> &BTreeMap<StateId, Status> {
        &self.visits
    }

    pub fn stats(&self) -> VisitCounts {
        stats::compute_stats(&self.visits)
    }
}
