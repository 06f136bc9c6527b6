use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::state::AppState;
use crate::core::db::{SettingsRepository, VisitRepository};
use crate::core::listing::{self, SortOrder};
use crate::core::settings::{DisplayNames, Settings, SettingsUpdate, StatusColors, StoredSettings};
use crate::core::stats::{VisitCounts, compute_stats, percent_label};
use crate::models::{StatCategory, StateId, Status};
use crate::render;

#[derive(Deserialize)]
pub struct StatusBody {
    status: Option<String>,
}

#[derive(Deserialize)]
pub struct SettingBody {
    key: String,
    value: serde_json::Value,
}

#[derive(Serialize)]
pub struct StateSaved {
    success: bool,
    #[serde(rename = "stateId")]
    state_id: &'static str,
    status: &'static str,
}

#[derive(Serialize)]
pub struct StateDeleted {
    success: bool,
    #[serde(rename = "stateId")]
    state_id: &'static str,
}

#[derive(Serialize)]
pub struct Ack {
    success: bool,
}

#[derive(Deserialize)]
pub struct ListQuery {
    sort: Option<String>,
}

#[derive(Serialize)]
pub struct ListEntry {
    id: StateId,
    name: &'static str,
    #[serde(rename = "visitType", skip_serializing_if = "Option::is_none")]
    visit_type: Option<&'static str>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    counts: VisitCounts,
    labels: StatLabels,
}

#[derive(Serialize)]
pub struct StatLabels {
    ben: String,
    matt: String,
    both: String,
    together: String,
}

pub async fn get_states(
    State(app): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<StateId, Status>>, ApiError> {
    Ok(Json(app.db.get_visits().await?))
}

pub async fn set_state(
    State(app): State<Arc<AppState>>,
    Path(state_id): Path<String>,
    Json(body): Json<StatusBody>,
) -> Result<Json<StateSaved>, ApiError> {
    let id = StateId::try_from(state_id.as_str())
        .map_err(|_| ApiError::UnknownState(state_id.clone()))?;
    let status = body.status.ok_or(ApiError::MissingStatus)?;
    let status =
        Status::try_from(status.as_str()).map_err(|_| ApiError::InvalidStatus(status.clone()))?;

    app.db.upsert_visit(id, status).await?;
    Ok(Json(StateSaved {
        success: true,
        state_id: id.code(),
        status: status.as_str(),
    }))
}

pub async fn delete_state(
    State(app): State<Arc<AppState>>,
    Path(state_id): Path<String>,
) -> Result<Json<StateDeleted>, ApiError> {
    let id = StateId::try_from(state_id.as_str())
        .map_err(|_| ApiError::UnknownState(state_id.clone()))?;

    // Idempotent: deleting an absent row is still a success.
    app.db.delete_visit(id).await?;
    Ok(Json(StateDeleted {
        success: true,
        state_id: id.code(),
    }))
}

pub async fn get_settings(
    State(app): State<Arc<AppState>>,
) -> Result<Json<StoredSettings>, ApiError> {
    Ok(Json(app.db.get_settings().await?))
}

pub async fn put_setting(
    State(app): State<Arc<AppState>>,
    Json(body): Json<SettingBody>,
) -> Result<Json<Ack>, ApiError> {
    let update = match body.key.as_str() {
        "colors" => {
            let colors: StatusColors =
                serde_json::from_value(body.value).map_err(|_| ApiError::InvalidSettingsValue)?;
            SettingsUpdate::Colors(colors)
        }
        "names" => {
            let raw: DisplayNames =
                serde_json::from_value(body.value).map_err(|_| ApiError::InvalidSettingsValue)?;
            let names = DisplayNames::validated(&raw.user1, &raw.user2)?;
            SettingsUpdate::Names(names)
        }
        _ => return Err(ApiError::UnknownSettingsKey(body.key)),
    };

    app.db.put_setting(&update).await?;
    Ok(Json(Ack { success: true }))
}

pub async fn get_stats(State(app): State<Arc<AppState>>) -> Result<Json<StatsResponse>, ApiError> {
    let visits = app.db.get_visits().await?;
    let counts = compute_stats(&visits);
    Ok(Json(StatsResponse {
        counts,
        labels: StatLabels {
            ben: percent_label(counts.ben),
            matt: percent_label(counts.matt),
            both: percent_label(counts.both),
            together: percent_label(counts.together),
        },
    }))
}

pub async fn get_list(
    State(app): State<Arc<AppState>>,
    Path(category): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ListEntry>>, ApiError> {
    let category = StatCategory::try_from(category.as_str())
        .map_err(|_| ApiError::UnknownCategory(category.clone()))?;
    let sort = match query.sort.as_deref() {
        None | Some("alphabetical") => SortOrder::Alphabetical,
        Some("visitType") => SortOrder::ByVisitKind,
        Some(other) => return Err(ApiError::InvalidSortOrder(other.to_string())),
    };

    let visits = app.db.get_visits().await?;
    let mut states = listing::visited_states(&visits, category);
    listing::sort_visited(&mut states, sort);

    Ok(Json(
        states
            .into_iter()
            .map(|s| ListEntry {
                id: s.id,
                name: s.name,
                visit_type: s.kind.map(|kind| kind.label()),
            })
            .collect(),
    ))
}

pub async fn reset(State(app): State<Arc<AppState>>) -> Result<Json<Ack>, ApiError> {
    app.db.reset_visits().await?;
    Ok(Json(Ack { success: true }))
}

pub async fn map_svg(State(app): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let visits = app.db.get_visits().await?;
    let settings = Settings::from(app.db.get_settings().await?);
    let svg = render::render_map(&visits, &settings.colors);
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
