mod pool;
mod setting;
mod visit;

use std::collections::BTreeMap;
use std::path::Path;

use sqlx::sqlite::SqlitePool;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::core::settings::{SettingsUpdate, StoredSettings};
use crate::models::{StateId, Status};

pub use setting::SettingsRepository;
pub use visit::VisitRepository;

/// The sqlite-backed persistence store: one table of state visits, one
/// key-value table of settings.
#[derive(Debug, Clone)]
pub struct TrackerDb {
    pool: SqlitePool,
}

impl TrackerDb {
    pub async fn open<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        Ok(Self {
            pool: pool::connect(db_file).await?,
        })
    }
}

impl VisitRepository for TrackerDb {
    async fn get_visits(&self) -> anyhow::Result<BTreeMap<StateId, Status>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as(r#"SELECT state_id, status FROM state_visits"#)
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter()
            .map(|(state_id, status)| {
                Ok((
                    StateId::try_from(state_id.as_str())?,
                    Status::try_from(status.as_str())?,
                ))
            })
            .collect()
    }

    async fn upsert_visit(&self, id: StateId, status: Status) -> anyhow::Result<()> {
        let updated_at = OffsetDateTime::now_utc().format(&Rfc3339)?;
        sqlx::query(
            r#"INSERT INTO state_visits (state_id, status, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (state_id) DO UPDATE SET
                status = excluded.status,
                updated_at = excluded.updated_at"#,
        )
        .bind(id.code())
        .bind(status.as_str())
        .bind(updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_visit(&self, id: StateId) -> anyhow::Result<()> {
        sqlx::query(r#"DELETE FROM state_visits WHERE state_id = $1"#)
            .bind(id.code())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn reset_visits(&self) -> anyhow::Result<()> {
        // Single statement, so the reset is atomic: either every row is gone
        // or none is.
        sqlx::query(r#"DELETE FROM state_visits"#)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

impl SettingsRepository for TrackerDb {
    async fn get_settings(&self) -> anyhow::Result<StoredSettings> {
        let rows: Vec<(String, String)> = sqlx::query_as(r#"SELECT key, value FROM settings"#)
            .fetch_all(&self.pool)
            .await?;
        let mut stored = StoredSettings::default();
        for (key, value) in rows {
            match key.as_str() {
                "colors" => stored.colors = Some(serde_json::from_str(&value)?),
                "names" => stored.names = Some(serde_json::from_str(&value)?),
                // Rows written by future versions are ignored, not an error.
                _ => {}
            }
        }
        Ok(stored)
    }

    async fn put_setting(&self, update: &SettingsUpdate) -> anyhow::Result<()> {
        let value = match update {
            SettingsUpdate::Colors(colors) => serde_json::to_string(colors)?,
            SettingsUpdate::Names(names) => serde_json::to_string(names)?,
        };
        sqlx::query(
            r#"INSERT INTO settings (key, value) VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = excluded.value"#,
        )
        .bind(update.key())
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
