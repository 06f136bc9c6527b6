use std::future::Future;

use crate::core::settings::{SettingsUpdate, StoredSettings};

/// Key-value store of the two settings keys.
///
/// Values are replaced wholesale per key; the store never merges fields.
pub trait SettingsRepository {
    /// Both keys, either of which may be absent.
    fn get_settings(&self) -> impl Future<Output = anyhow::Result<StoredSettings>>;

    /// Replace the entire value for one key.
    fn put_setting(&self, update: &SettingsUpdate) -> impl Future<Output = anyhow::Result<()>>;
}
