// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tower_http::cors::{Any, CorsLayer};

use crate::scheduler::DashboardHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) dashboard: DashboardHandle,
    pub(crate) ws_connections: Arc<AtomicUsize>,
}

pub fn app(dashboard: DashboardHandle, ws_connections: Arc<AtomicUsize>) -> Router {
    let state = AppState {
        dashboard,
        ws_connections,
    };
    Router::new()
        .route("/", get(http::root_handler)) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/dashboard", get(http::dashboard_handler)) // GET /api/dashboard
        .route(
            "/api/timeframe/{key}",
            get(http::timeframe_handler).post(http::apply_timeframe_handler),
        ) // GET, POST /api/timeframe/{key}
        .route(
            "/api/auto-refresh/toggle",
            post(http::toggle_auto_refresh_handler),
        ) // POST /api/auto-refresh/toggle
        .route("/api/analysis", post(http::run_analysis_handler)) // POST /api/analysis
        .route("/api/incidents/export", get(http::export_handler)) // GET /api/incidents/export
        .route("/api/incidents/{id}/view", post(http::view_incident_handler)) // POST /api/incidents/{id}/view
        .route(
            "/api/sources/{address}/block",
            post(http::block_source_handler),
        ) // POST /api/sources/{address}/block
        .route("/ws/dashboard", get(ws::ws_dashboard)) // WS /ws/dashboard
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
