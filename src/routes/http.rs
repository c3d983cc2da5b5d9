// HTTP handlers: views, timeframe lookup, user actions, CSV export

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::AppState;
use crate::error::DashboardError;
use crate::timeframe::{BarWidths, Distribution, Timeframe, distribution};
use crate::version::{NAME, VERSION, banner};

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match self {
            DashboardError::UnknownTimeframeKey(_) => StatusCode::BAD_REQUEST,
            DashboardError::ControllerStopped => StatusCode::SERVICE_UNAVAILABLE,
            DashboardError::MissingDisplaySlot(_) | DashboardError::MalformedNumericText(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TimeframeResponse {
    timeframe: Timeframe,
    distribution: Distribution,
    widths: BarWidths,
}

impl TimeframeResponse {
    fn new(timeframe: Timeframe, distribution: Distribution) -> Self {
        Self {
            timeframe,
            distribution,
            widths: distribution.bar_widths(),
        }
    }
}

/// GET /: plain-text banner.
pub(super) async fn root_handler() -> impl IntoResponse {
    banner()
}

/// GET /version: returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/dashboard: the latest full view.
pub(super) async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dashboard.view())
}

/// GET /api/timeframe/{key}: distribution and bar widths, without touching the display.
pub(super) async fn timeframe_handler(
    Path(key): Path<String>,
) -> Result<Json<TimeframeResponse>, DashboardError> {
    let timeframe: Timeframe = key.parse()?;
    Ok(Json(TimeframeResponse::new(
        timeframe,
        distribution(timeframe),
    )))
}

/// POST /api/timeframe/{key}: switch the threat distribution panel.
pub(super) async fn apply_timeframe_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<TimeframeResponse>, DashboardError> {
    let timeframe: Timeframe = key.parse()?;
    let data = state.dashboard.change_timeframe(timeframe).await?;
    Ok(Json(TimeframeResponse::new(timeframe, data)))
}

/// POST /api/auto-refresh/toggle
pub(super) async fn toggle_auto_refresh_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DashboardError> {
    let enabled = state.dashboard.toggle_auto_refresh().await?;
    Ok(Json(serde_json::json!({ "autoRefresh": enabled })))
}

/// POST /api/analysis: `started` is false while a previous run is still in progress.
pub(super) async fn run_analysis_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DashboardError> {
    let started = state.dashboard.run_full_analysis().await?;
    Ok(Json(serde_json::json!({ "started": started })))
}

/// GET /api/incidents/export: CSV attachment.
pub(super) async fn export_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DashboardError> {
    let csv = state.dashboard.export_incidents().await?;
    let disposition = format!("attachment; filename=\"{}\"", csv.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv.content,
    ))
}

/// POST /api/incidents/{id}/view
pub(super) async fn view_incident_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, DashboardError> {
    state.dashboard.view_incident(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sources/{address}/block
pub(super) async fn block_source_handler(
    Path(address): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, DashboardError> {
    state.dashboard.block_source(address).await?;
    Ok(StatusCode::NO_CONTENT)
}
