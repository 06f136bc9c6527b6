use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::core::settings::SettingsError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Status is required")]
    MissingStatus,

    #[error("Unknown state: {0}")]
    UnknownState(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Unknown settings key: {0}")]
    UnknownSettingsKey(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid sort order: {0}")]
    InvalidSortOrder(String),

    #[error("Invalid settings value")]
    InvalidSettingsValue,

    #[error("Names cannot be empty")]
    EmptyName,

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl From<SettingsError> for ApiError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::EmptyName => ApiError::EmptyName,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Storage(ref err) => {
                error!("storage failure: {err:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
