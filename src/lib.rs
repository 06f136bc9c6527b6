pub mod core;
pub mod geometry;
pub mod models;
pub mod render;
pub mod server;

pub use crate::core::controller::{Notice, Severity, Tracker};
pub use crate::core::db::{SettingsRepository, TrackerDb, VisitRepository};
pub use crate::core::listing::{SortOrder, VisitedState, sort_visited, visited_states};
pub use crate::core::registry::VisitRegistry;
pub use crate::core::settings::{
    DisplayNames, Settings, SettingsError, SettingsUpdate, StatusColors, StoredSettings,
};
pub use crate::core::stats::{VisitCounts, compute_stats, percent_label};
pub use crate::models::{StatCategory, StateId, Status, VisitKind};
