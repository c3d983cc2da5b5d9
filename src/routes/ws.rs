// WebSocket handler: welcome view, then live dashboard events

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use bytes::Bytes;
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::broadcast;
use tokio::time::{Duration, timeout};

use super::AppState;
use crate::presenter::{DashboardEvent, DashboardView};

pub(super) const WS_PING_INTERVAL: Duration = Duration::from_secs(30);
pub(super) const WS_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Decrements the connection count on drop (connect = +1, drop = -1).
struct WsConnectionGuard(Arc<AtomicUsize>);

impl Drop for WsConnectionGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, std::sync::atomic::Ordering::Relaxed);
    }
}

pub(super) async fn ws_dashboard(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let dashboard = state.dashboard.clone();
    let conn_count = state.ws_connections.clone();
    ws.on_upgrade(move |socket| async move {
        // Subscribe before taking the view so no event between the two is lost.
        let mut rx = dashboard.subscribe();
        let view = dashboard.view();
        if let Err(e) = stream_dashboard(socket, &mut rx, view, conn_count).await {
            tracing::info!("Dashboard stream error: {}", e);
        }
    })
}

async fn stream_dashboard(
    socket: WebSocket,
    rx: &mut broadcast::Receiver<DashboardEvent>,
    view: DashboardView,
    conn_count: Arc<AtomicUsize>,
) -> anyhow::Result<()> {
    conn_count.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
    let _guard = WsConnectionGuard(conn_count);
    tracing::info!("Client connected to dashboard stream");

    let (mut sender, mut receiver) = socket.split();

    let welcome = serde_json::json!({ "type": "welcome", "view": view });
    let welcome_json = serde_json::to_string(&welcome)?;
    let r = timeout(WS_SEND_TIMEOUT, sender.send(Message::Text(welcome_json.into()))).await;
    if r.is_err() || r.unwrap_or(Ok(())).is_err() {
        return Ok(());
    }

    let mut ping_interval = tokio::time::interval(WS_PING_INTERVAL);
    ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            result = rx.recv() => {
                match result {
                    Ok(event) => {
                        let json = serde_json::to_string(&event)?;
                        let r = timeout(WS_SEND_TIMEOUT, sender.send(Message::Text(json.into()))).await;
                        if r.is_err() || r.unwrap_or(Ok(())).is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!("WebSocket /ws/dashboard client lagged, skipped {} messages", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
            _ = ping_interval.tick() => {
                let r = timeout(WS_SEND_TIMEOUT, sender.send(Message::Ping(Bytes::new()))).await;
                if r.is_err() || r.unwrap_or(Ok(())).is_err() {
                    break;
                }
            }
        }
    }
    tracing::info!("Client disconnected from dashboard stream");
    Ok(())
}
