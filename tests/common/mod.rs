mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from statetrack for tests
pub use statetrack::{
    DisplayNames, SettingsRepository, SettingsUpdate, StateId, Status, StatusColors,
    StoredSettings, TrackerDb, VisitRepository,
};
