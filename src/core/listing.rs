//! Derived, read-only visited-states lists.
//!
//! Filtering follows the same inclusion rule as the stats: a user's list
//! contains every state whose status implies that user's presence, annotated
//! with how the visit happened. The `both`/`together` categories match their
//! exact status only and carry no annotation.

use std::collections::BTreeMap;

use crate::models::{StatCategory, StateId, Status, VisitKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedState {
    pub id: StateId,
    pub name: &'static str,
    pub kind: Option<VisitKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Alphabetical,
    ByVisitKind,
}

pub fn visited_states(
    visits: &BTreeMap<StateId, Status>,
    category: StatCategory,
) -> Vec<VisitedState> {
    let mut states: Vec<VisitedState> = visits
        .iter()
        .filter_map(|(&id, &status)| {
            let kind = match (category, status) {
                (StatCategory::User1, Status::Ben) => Some(Some(VisitKind::Individual)),
                (StatCategory::User2, Status::Matt) => Some(Some(VisitKind::Individual)),
                (StatCategory::User1 | StatCategory::User2, Status::Both) => {
                    Some(Some(VisitKind::Separately))
                }
                (StatCategory::User1 | StatCategory::User2, Status::Together) => {
                    Some(Some(VisitKind::Together))
                }
                (StatCategory::Both, Status::Both) => Some(None),
                (StatCategory::Together, Status::Together) => Some(None),
                _ => None,
            };
            kind.map(|kind| VisitedState {
                id,
                name: id.name(),
                kind,
            })
        })
        .collect();
    sort_visited(&mut states, SortOrder::Alphabetical);
    states
}

/// Pure, restartable sort over an already-filtered list.
pub fn sort_visited(states: &mut [VisitedState], order: SortOrder) {
    match order {
        SortOrder::Alphabetical => states.sort_by_key(|s| s.name),
        SortOrder::ByVisitKind => states.sort_by_key(|s| (s.kind, s.name)),
    }
}
