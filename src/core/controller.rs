//! Reconciliation controller: owns the in-memory state and keeps it
//! consistent with the persistence store.
//!
//! Mutations are optimistic: the in-memory mapping changes first, then the
//! store call goes out. A failed save is reported through a [`Notice`] but
//! the local change stands; local and persisted views diverge until the next
//! load. That divergence is accepted behavior, not something to repair
//! silently. The one exception is [`Tracker::reset_all`], which only clears
//! local state once the store confirms the bulk delete.

use crate::core::db::{SettingsRepository, VisitRepository};
use crate::core::listing::{self, VisitedState};
use crate::core::registry::VisitRegistry;
use crate::core::settings::{
    DisplayNames, Settings, SettingsError, SettingsUpdate, StatusColors,
};
use crate::core::stats::VisitCounts;
use crate::models::{StatCategory, StateId, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient, non-blocking user notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// The single owner of the current mapping and settings (no module globals).
#[derive(Debug)]
pub struct Tracker<S> {
    store: S,
    registry: VisitRegistry,
    settings: Settings,
}

impl<S: VisitRepository + SettingsRepository> Tracker<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            registry: VisitRegistry::new(),
            settings: Settings::default(),
        }
    }

    /// Fetch visits and settings from the store. Either fetch may fail
    /// independently; the failing half falls back to empty/defaults and a
    /// recoverable notice is returned. Never fatal.
    pub async fn load(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();

        match self.store.get_visits().await {
            Ok(visits) => self.registry.replace(visits),
            Err(_) => {
                self.registry.clear();
                notices.push(Notice::error("Failed to load data from server"));
            }
        }

        match self.store.get_settings().await {
            Ok(stored) => self.settings = Settings::from(stored),
            Err(_) => {
                self.settings = Settings::default();
                notices.push(Notice::error("Failed to load settings"));
            }
        }

        notices
    }

    /// Set or clear one state's status. The in-memory mapping mutates first;
    /// a persistence failure yields an error notice without rollback.
    pub async fn set_status(&mut self, id: StateId, status: Option<Status>) -> Option<Notice> {
        self.registry.set(id, status);

        let result = match status {
            Some(status) => self.store.upsert_visit(id, status).await,
            None => self.store.delete_visit(id).await,
        };
        match result {
            Ok(()) => None,
            Err(_) => Some(Notice::error("Failed to save changes")),
        }
    }

    /// Clear every entry via the store's bulk reset. Atomic from the
    /// caller's view: local state is cleared only once the store succeeds.
    pub async fn reset_all(&mut self) -> Notice {
        match self.store.reset_visits().await {
            Ok(()) => {
                self.registry.clear();
                Notice::success("All data has been reset")
            }
            Err(_) => Notice::error("Failed to reset data"),
        }
    }

    /// Save display names. Empty names are rejected here, before any store
    /// call, leaving both local and persisted settings untouched.
    pub async fn save_names(
        &mut self,
        user1: &str,
        user2: &str,
    ) -> Result<Notice, SettingsError> {
        let names = DisplayNames::validated(user1, user2)?;
        self.settings.names = names.clone();
        Ok(match self.store.put_setting(&SettingsUpdate::Names(names)).await {
            Ok(()) => Notice::success("Names saved successfully!"),
            Err(_) => Notice::error("Failed to save settings"),
        })
    }

    /// Save status colors. Values are opaque; no validation.
    pub async fn save_colors(&mut self, colors: StatusColors) -> Notice {
        self.settings.colors = colors.clone();
        match self.store.put_setting(&SettingsUpdate::Colors(colors)).await {
            Ok(()) => Notice::success("Colors saved successfully!"),
            Err(_) => Notice::error("Failed to save settings"),
        }
    }

    pub fn registry(&self) -> &VisitRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> VisitCounts {
        self.registry.stats()
    }

    pub fn visited(&self, category: StatCategory) -> Vec<VisitedState> {
        listing::visited_states(self.registry.visits(), category)
    }

    /// Current map, colored per visits and settings.
    pub fn render_map(&self) -> String {
        crate::render::render_map(self.registry.visits(), &self.settings.colors)
    }
}
