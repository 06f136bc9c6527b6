use std::collections::BTreeMap;
use std::future::Future;

use crate::models::{StateId, Status};

/// Key-value store of state → status.
///
/// Absent states are simply not present; "none" is expressed as deletion.
pub trait VisitRepository {
    /// Full current mapping. Absent states are omitted.
    fn get_visits(&self) -> impl Future<Output = anyhow::Result<BTreeMap<StateId, Status>>>;

    /// Insert or overwrite the status for one state.
    fn upsert_visit(&self, id: StateId, status: Status) -> impl Future<Output = anyhow::Result<()>>;

    /// Delete the row for one state. Idempotent: deleting an absent state
    /// succeeds.
    fn delete_visit(&self, id: StateId) -> impl Future<Output = anyhow::Result<()>>;

    /// Delete every row in a single atomic statement.
    fn reset_visits(&self) -> impl Future<Output = anyhow::Result<()>>;
}
