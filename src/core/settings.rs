//! User-customizable presentation settings: status colors and display names.
//!
//! Settings are persisted per key (`"colors"` / `"names"`) and replaced
//! wholesale on save; there is no per-field merge. Missing keys fall back to
//! the fixed defaults, including when only one of the two keys is present.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Status;

pub const DEFAULT_COLOR_BEN: &str = "#ffd700";
pub const DEFAULT_COLOR_MATT: &str = "#ff69b4";
pub const DEFAULT_COLOR_BOTH: &str = "#90ee90";
pub const DEFAULT_COLOR_TOGETHER: &str = "#87ceeb";

pub const DEFAULT_NAME_USER1: &str = "User 1";
pub const DEFAULT_NAME_USER2: &str = "User 2";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Names cannot be empty")]
    EmptyName,
}

/// Fill colors per status. Values are opaque strings, not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusColors {
    pub ben: String,
    pub matt: String,
    pub both: String,
    pub together: String,
}

impl Default for StatusColors {
    fn default() -> Self {
        Self {
            ben: DEFAULT_COLOR_BEN.to_string(),
            matt: DEFAULT_COLOR_MATT.to_string(),
            both: DEFAULT_COLOR_BOTH.to_string(),
            together: DEFAULT_COLOR_TOGETHER.to_string(),
        }
    }
}

impl StatusColors {
    pub fn for_status(&self, status: Status) -> &str {
        match status {
            Status::Ben => &self.ben,
            Status::Matt => &self.matt,
            Status::Both => &self.both,
            Status::Together => &self.together,
        }
    }
}

/// Display names for the two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNames {
    pub user1: String,
    pub user2: String,
}

impl Default for DisplayNames {
    fn default() -> Self {
        Self {
            user1: DEFAULT_NAME_USER1.to_string(),
            user2: DEFAULT_NAME_USER2.to_string(),
        }
    }
}

impl DisplayNames {
    /// Build a validated pair from raw input. Both names must be non-empty
    /// after trimming; rejection happens here, before any store call.
    pub fn validated(user1: &str, user2: &str) -> Result<Self, SettingsError> {
        let user1 = user1.trim();
        let user2 = user2.trim();
        if user1.is_empty() || user2.is_empty() {
            return Err(SettingsError::EmptyName);
        }
        Ok(Self {
            user1: user1.to_string(),
            user2: user2.to_string(),
        })
    }
}

/// Settings as they come out of the store: either key may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<StatusColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<DisplayNames>,
}

/// A wholesale replacement of one settings key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsUpdate {
    Colors(StatusColors),
    Names(DisplayNames),
}

impl SettingsUpdate {
    pub fn key(&self) -> &'static str {
        match self {
            SettingsUpdate::Colors(_) => "colors",
            SettingsUpdate::Names(_) => "names",
        }
    }
}

/// Fully-defaulted settings held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub colors: StatusColors,
    pub names: DisplayNames,
}

impl From<StoredSettings> for Settings {
    fn from(stored: StoredSettings) -> Self {
        Self {
            colors: stored.colors.unwrap_or_default(),
            names: stored.names.unwrap_or_default(),
        }
    }
}
