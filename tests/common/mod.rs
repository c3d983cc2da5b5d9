// Shared test helpers

use socdash::display::SlotBoard;
use socdash::presenter::DashboardEvent;
use socdash::scheduler::{self, DashboardConfig, DashboardDeps, DashboardHandle};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::{broadcast, oneshot};

/// A spawned controller. Dropping `shutdown_tx` stops it, so keep this alive.
pub struct TestDashboard {
    pub handle: DashboardHandle,
    pub shutdown_tx: oneshot::Sender<()>,
    pub join: tokio::task::JoinHandle<()>,
    pub ws_connections: Arc<AtomicUsize>,
}

pub fn seeded_config() -> DashboardConfig {
    DashboardConfig {
        random_seed: Some(7),
        ..DashboardConfig::default()
    }
}

pub fn spawn_dashboard(surface: SlotBoard, config: DashboardConfig) -> TestDashboard {
    let (events, _) = broadcast::channel::<DashboardEvent>(1024);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let ws_connections = Arc::new(AtomicUsize::new(0));
    let (handle, join) = scheduler::spawn(
        DashboardDeps {
            surface,
            events,
            ws_connections: ws_connections.clone(),
            shutdown_rx,
        },
        config,
    );
    TestDashboard {
        handle,
        shutdown_tx,
        join,
        ws_connections,
    }
}

pub fn spawn_default() -> TestDashboard {
    spawn_dashboard(SlotBoard::full(), seeded_config())
}
