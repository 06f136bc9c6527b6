//! Aggregate statistics derived from the visit mapping.
//!
//! Counts follow an inclusion rule: every status also counts toward the
//! "lower" buckets it implies. `both` means each user visited separately, so
//! it counts for both individuals and the joint bucket; `together` is a
//! superset of that. Stats are recomputed on every mutation, never stored.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::geometry::STATE_COUNT;
use crate::models::{StateId, Status};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VisitCounts {
    pub ben: u32,
    pub matt: u32,
    pub both: u32,
    pub together: u32,
}

pub fn compute_stats(visits: &BTreeMap<StateId, Status>) -> VisitCounts {
    let mut counts = VisitCounts::default();
    for status in visits.values() {
        match status {
            Status::Ben => counts.ben += 1,
            Status::Matt => counts.matt += 1,
            Status::Both => {
                counts.ben += 1;
                counts.matt += 1;
                counts.both += 1;
            }
            Status::Together => {
                counts.ben += 1;
                counts.matt += 1;
                counts.both += 1;
                counts.together += 1;
            }
        }
    }
    counts
}

/// Rounded percentage of the 50 states, ties away from zero.
pub fn percent(count: u32) -> u32 {
    (count as f64 / STATE_COUNT as f64 * 100.0).round() as u32
}

/// `"12/50 (24%)"` as shown on the stat cards.
pub fn percent_label(count: u32) -> String {
    format!("{count}/{STATE_COUNT} ({}%)", percent(count))
}
