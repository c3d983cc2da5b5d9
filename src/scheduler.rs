// Dashboard controller: one task owns all dashboard state and drives it from timers
// (clock, metrics, synthetic alerts, optional auto-refresh, count-up frames,
// notification deadlines, pending analysis) and from user commands.

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::time::{Duration, Instant, Interval, interval, interval_at, sleep_until};
use tracing::Instrument;

use crate::animation::{CountUpTarget, CountUpTask, parse_display_integer, with_thousands};
use crate::config::AppConfig;
use crate::display::{DisplaySurface, Slot};
use crate::error::DashboardError;
use crate::export::{self, CsvExport};
use crate::feed::{self, AlertFeed};
use crate::models::{
    AlertEntry, IncidentRecord, MetricSnapshot, Notification, NotificationKind,
};
use crate::notifications::{NotificationCenter, NotificationTimings};
use crate::presenter::{self, DashboardEvent, DashboardView};
use crate::timeframe::{BarWidths, Distribution, Timeframe, distribution};

/// Rate limit for "no receivers" logging when no WebSocket client is connected.
const NO_RECEIVERS_LOG_INTERVAL: Duration = Duration::from_secs(60);

/// Command channel capacity between HTTP handlers and the controller.
const COMMAND_CHANNEL_CAPACITY: usize = 64;

pub const ACTIVE_THREAT_CHOICES: [&str; 5] = ["5", "6", "7", "8", "9"];
pub const MTTD_CHOICES: [&str; 5] = ["4.2", "3.8", "4.5", "3.9", "4.1"];
pub const ACCURACY_CHOICES: [&str; 5] = ["97.8%", "97.6%", "98.1%", "97.9%", "98.0%"];

pub const AUTO_REFRESH_ON_LABEL: &str = "Auto Refresh";
pub const AUTO_REFRESH_OFF_LABEL: &str = "Auto Refresh (Off)";
pub const ANALYSIS_IDLE_LABEL: &str = "Run Full Analysis";
pub const ANALYSIS_RUNNING_LABEL: &str = "Running Analysis...";

/// Timing and sizing for the controller.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub clock_interval: Duration,
    pub metrics_interval: Duration,
    pub synthetic_alert_interval: Duration,
    pub auto_refresh_interval: Duration,
    pub analysis_duration: Duration,
    pub count_up_duration: Duration,
    pub frame_interval: Duration,
    pub notifications: NotificationTimings,
    pub max_feed_entries: usize,
    pub auto_refresh_on_start: bool,
    pub random_seed: Option<u64>,
    pub stats_log_interval: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            clock_interval: Duration::from_secs(1),
            metrics_interval: Duration::from_secs(5),
            synthetic_alert_interval: Duration::from_secs(15),
            auto_refresh_interval: Duration::from_secs(10),
            analysis_duration: Duration::from_secs(3),
            count_up_duration: crate::animation::DEFAULT_DURATION,
            frame_interval: Duration::from_millis(16),
            notifications: NotificationTimings::default(),
            max_feed_entries: feed::DEFAULT_MAX_ENTRIES,
            auto_refresh_on_start: false,
            random_seed: None,
            stats_log_interval: Duration::from_secs(60),
        }
    }
}

impl DashboardConfig {
    pub fn from_app(config: &AppConfig) -> Self {
        let s = &config.scheduler;
        Self {
            clock_interval: Duration::from_millis(s.clock_interval_ms),
            metrics_interval: Duration::from_millis(s.metrics_interval_ms),
            synthetic_alert_interval: Duration::from_millis(s.synthetic_alert_interval_ms),
            auto_refresh_interval: Duration::from_millis(s.auto_refresh_interval_ms),
            analysis_duration: Duration::from_millis(s.analysis_duration_ms),
            count_up_duration: Duration::from_millis(config.animation.duration_ms),
            frame_interval: Duration::from_millis(config.animation.frame_interval_ms),
            notifications: NotificationTimings {
                visible_for: Duration::from_millis(config.notifications.visible_ms),
                fade_out: Duration::from_millis(config.notifications.fade_out_ms),
            },
            max_feed_entries: config.feed.max_entries,
            auto_refresh_on_start: s.auto_refresh_on_start,
            random_seed: s.random_seed,
            stats_log_interval: Duration::from_secs(config.monitoring.stats_log_interval_secs),
        }
    }
}

/// User-initiated actions, answered on a oneshot once applied.
#[derive(Debug)]
pub enum Command {
    ToggleAutoRefresh {
        reply: oneshot::Sender<bool>,
    },
    ExportIncidents {
        reply: oneshot::Sender<CsvExport>,
    },
    RunFullAnalysis {
        reply: oneshot::Sender<bool>,
    },
    ChangeTimeframe {
        timeframe: Timeframe,
        reply: oneshot::Sender<Distribution>,
    },
    ViewIncident {
        id: String,
        reply: oneshot::Sender<Notification>,
    },
    BlockSource {
        address: String,
        reply: oneshot::Sender<Notification>,
    },
}

/// Cloneable front for the controller task.
#[derive(Clone)]
pub struct DashboardHandle {
    commands: mpsc::Sender<Command>,
    view: watch::Receiver<DashboardView>,
    events: broadcast::Sender<DashboardEvent>,
}

impl DashboardHandle {
    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, DashboardError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(build(reply))
            .await
            .map_err(|_| DashboardError::ControllerStopped)?;
        rx.await.map_err(|_| DashboardError::ControllerStopped)
    }

    /// Flips auto-refresh; returns the new state.
    pub async fn toggle_auto_refresh(&self) -> Result<bool, DashboardError> {
        self.request(|reply| Command::ToggleAutoRefresh { reply })
            .await
    }

    pub async fn export_incidents(&self) -> Result<CsvExport, DashboardError> {
        self.request(|reply| Command::ExportIncidents { reply }).await
    }

    /// Returns false when an analysis is already running (the trigger is ignored).
    pub async fn run_full_analysis(&self) -> Result<bool, DashboardError> {
        self.request(|reply| Command::RunFullAnalysis { reply }).await
    }

    pub async fn change_timeframe(
        &self,
        timeframe: Timeframe,
    ) -> Result<Distribution, DashboardError> {
        self.request(|reply| Command::ChangeTimeframe { timeframe, reply })
            .await
    }

    pub async fn view_incident(
        &self,
        id: impl Into<String>,
    ) -> Result<Notification, DashboardError> {
        let id = id.into();
        self.request(|reply| Command::ViewIncident { id, reply }).await
    }

    pub async fn block_source(
        &self,
        address: impl Into<String>,
    ) -> Result<Notification, DashboardError> {
        let address = address.into();
        self.request(|reply| Command::BlockSource { address, reply })
            .await
    }

    /// Latest published dashboard view.
    pub fn view(&self) -> DashboardView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events.subscribe()
    }
}

/// The optional auto-refresh injection task. Dropping it cancels it.
#[derive(Debug)]
struct AutoRefreshTask {
    ticks: Interval,
    injections: u64,
}

#[derive(Debug)]
struct RunningCountUp {
    task: CountUpTask,
    started: Instant,
    frames: Interval,
}

#[derive(Debug, Clone, Copy)]
struct PendingAnalysis {
    due: Instant,
}

/// Periodic task that first fires one period from now.
fn every(period: Duration) -> Interval {
    let mut tick = interval_at(Instant::now() + period, period);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    tick
}

async fn next_tick(tick: Option<&mut Interval>) {
    match tick {
        Some(tick) => {
            tick.tick().await;
        }
        None => std::future::pending().await,
    }
}

async fn sleep_until_opt(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

fn local_time_of_day() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

fn local_timestamp() -> String {
    chrono::Local::now().format("%m/%d/%Y, %H:%M:%S").to_string()
}

/// All mutable dashboard state. Only the controller task touches it.
pub struct Dashboard<S: DisplaySurface> {
    surface: S,
    feed: AlertFeed,
    incidents: Vec<IncidentRecord>,
    notifications: NotificationCenter,
    rng: StdRng,
    timeframe: Timeframe,
    auto_refresh: Option<AutoRefreshTask>,
    count_up: Option<RunningCountUp>,
    pending_analysis: Option<PendingAnalysis>,
    synthetic_alerts_injected: u64,
    events: broadcast::Sender<DashboardEvent>,
    last_no_receivers_log: Option<Instant>,
    config: DashboardConfig,
}

impl<S: DisplaySurface> Dashboard<S> {
    /// Populates the display and starts the count-up. Must run inside a tokio runtime.
    pub fn new(
        surface: S,
        events: broadcast::Sender<DashboardEvent>,
        config: DashboardConfig,
    ) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut dashboard = Self {
            surface,
            feed: AlertFeed::with_seed(config.max_feed_entries, feed::seed_alerts()),
            incidents: IncidentRecord::seed(),
            notifications: NotificationCenter::new(config.notifications),
            rng,
            timeframe: Timeframe::LastDay,
            auto_refresh: None,
            count_up: None,
            pending_analysis: None,
            synthetic_alerts_injected: 0,
            events,
            last_no_receivers_log: None,
            config,
        };
        dashboard.tick_clock();
        dashboard.write_metrics(&MetricSnapshot::initial());
        dashboard.set_slot(Slot::AnalysisLabel, ANALYSIS_IDLE_LABEL);
        dashboard.set_slot(Slot::AutoRefreshLabel, AUTO_REFRESH_OFF_LABEL);
        dashboard.change_timeframe(Timeframe::LastDay);
        if dashboard.config.auto_refresh_on_start {
            dashboard.toggle_auto_refresh();
        }
        dashboard.start_count_up();
        dashboard
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn feed(&self) -> &AlertFeed {
        &self.feed
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn auto_refresh_enabled(&self) -> bool {
        self.auto_refresh.is_some()
    }

    pub fn count_up_running(&self) -> bool {
        self.count_up.is_some()
    }

    pub fn analysis_running(&self) -> bool {
        self.pending_analysis.is_some()
    }

    pub fn synthetic_alerts_injected(&self) -> u64 {
        self.synthetic_alerts_injected
    }

    /// Snapshot for HTTP clients and the watch channel.
    pub fn view(&self) -> DashboardView {
        DashboardView {
            slots: self.surface.snapshot(),
            alerts: self.feed.iter().map(presenter::present_alert).collect(),
            incidents: self
                .incidents
                .iter()
                .map(presenter::present_incident)
                .collect(),
            notifications: self
                .notifications
                .live()
                .iter()
                .map(|(n, state)| presenter::present_notification(n, *state))
                .collect(),
            auto_refresh: self.auto_refresh_enabled(),
            analysis_running: self.analysis_running(),
            timeframe: self.timeframe,
            synthetic_alerts_injected: self.synthetic_alerts_injected,
        }
    }

    fn emit(&mut self, event: DashboardEvent) {
        if self.events.send(event).is_err() {
            let should_log = self
                .last_no_receivers_log
                .is_none_or(|t| t.elapsed() >= NO_RECEIVERS_LOG_INTERVAL);
            if should_log {
                tracing::debug!(
                    operation = "broadcast_event",
                    "No active WebSocket clients; broadcast channel has no receivers"
                );
                self.last_no_receivers_log = Some(Instant::now());
            }
        }
    }

    /// Writes one slot; an absent slot is skipped without aborting the caller.
    fn set_slot(&mut self, slot: Slot, text: &str) {
        match self.surface.write(slot, text) {
            Ok(()) => self.emit(DashboardEvent::Slot {
                slot,
                text: text.to_string(),
            }),
            Err(e) => tracing::trace!(error = %e, operation = "set_slot", "slot write skipped"),
        }
    }

    fn write_metrics(&mut self, metrics: &MetricSnapshot) {
        self.set_slot(Slot::TotalEvents, &metrics.total_events);
        self.set_slot(Slot::ActiveThreats, &metrics.active_threats);
        self.set_slot(Slot::Mttd, &metrics.mttd);
        self.set_slot(Slot::Accuracy, &metrics.accuracy);
    }

    fn push_alert(&mut self, alert: AlertEntry) {
        let view = presenter::present_alert(&alert);
        let evicted = self.feed.push(alert).is_some();
        tracing::debug!(
            operation = "push_alert",
            title = %view.title,
            feed_len = self.feed.len(),
            evicted,
            "alert added"
        );
        self.emit(DashboardEvent::Alert {
            alert: view,
            evicted,
        });
    }

    fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> Notification {
        let notification = self.notifications.push(message, kind, Instant::now());
        tracing::info!(
            operation = "notify",
            id = notification.id,
            kind = ?notification.kind,
            "{}",
            notification.message
        );
        if let Some(state) = self.notifications.state_of(notification.id) {
            let view = presenter::present_notification(&notification, state);
            self.emit(DashboardEvent::Notification { notification: view });
        }
        notification
    }

    /// Replaces each integer metric with "0" and animates it back up to its value.
    fn start_count_up(&mut self) {
        let targets: Vec<CountUpTarget> = Slot::METRICS
            .iter()
            .filter_map(|slot| {
                let text = self.surface.read(*slot).ok()?;
                CountUpTarget::from_display(*slot, text)
            })
            .collect();
        if targets.is_empty() {
            return;
        }
        let mut frames = interval(self.config.frame_interval);
        frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        self.count_up = Some(RunningCountUp {
            task: CountUpTask::new(targets, self.config.count_up_duration),
            started: Instant::now(),
            frames,
        });
        self.tick_count_up();
    }

    /// Writes one animation frame; drops the task once it reaches its targets.
    pub fn tick_count_up(&mut self) {
        let Some(running) = self.count_up.as_ref() else {
            return;
        };
        let (frame, done) = running.task.frame(running.started.elapsed());
        for (slot, text) in frame {
            self.set_slot(slot, &text);
        }
        if done {
            tracing::debug!(operation = "count_up", "metric animation complete");
            self.count_up = None;
        }
    }

    /// Jumps a running count-up to its final values.
    fn finish_count_up(&mut self) {
        if let Some(running) = self.count_up.take() {
            let (frame, _) = running.task.frame(self.config.count_up_duration);
            for (slot, text) in frame {
                self.set_slot(slot, &text);
            }
        }
    }

    pub fn tick_clock(&mut self) {
        let now = local_timestamp();
        self.set_slot(Slot::CurrentTime, &now);
        self.set_slot(Slot::LastAnalysis, &now);
    }

    /// Total events grows by a random 10..=59; the other metrics jump to a random candidate.
    pub fn tick_metrics(&mut self) {
        self.finish_count_up();

        let total = self
            .surface
            .read(Slot::TotalEvents)
            .and_then(parse_display_integer);
        match total {
            Ok(current) => {
                let increment: u64 = self.rng.gen_range(10..=59);
                self.set_slot(Slot::TotalEvents, &with_thousands(current + increment));
            }
            Err(DashboardError::MissingDisplaySlot(_)) => {}
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    operation = "tick_metrics",
                    "total events increment skipped"
                );
            }
        }

        let choices = [
            (Slot::ActiveThreats, &ACTIVE_THREAT_CHOICES),
            (Slot::Mttd, &MTTD_CHOICES),
            (Slot::Accuracy, &ACCURACY_CHOICES),
        ];
        for (slot, candidates) in choices {
            if let Some(value) = candidates.choose(&mut self.rng) {
                self.set_slot(slot, value);
            }
        }
    }

    pub fn tick_synthetic_alert(&mut self) {
        let template = feed::choose_template(&mut self.rng);
        self.push_alert(template.stamp(local_time_of_day()));
        self.synthetic_alerts_injected += 1;
    }

    /// Flips auto-refresh. Turning on replaces nothing: at most one task exists.
    pub fn toggle_auto_refresh(&mut self) -> bool {
        match self.auto_refresh.take() {
            Some(task) => {
                tracing::info!(
                    operation = "toggle_auto_refresh",
                    injections = task.injections,
                    "auto refresh off"
                );
                self.set_slot(Slot::AutoRefreshLabel, AUTO_REFRESH_OFF_LABEL);
            }
            None => {
                self.auto_refresh = Some(AutoRefreshTask {
                    ticks: every(self.config.auto_refresh_interval),
                    injections: 0,
                });
                tracing::info!(
                    operation = "toggle_auto_refresh",
                    interval_ms = self.config.auto_refresh_interval.as_millis() as u64,
                    "auto refresh on"
                );
                self.set_slot(Slot::AutoRefreshLabel, AUTO_REFRESH_ON_LABEL);
            }
        }
        let enabled = self.auto_refresh_enabled();
        self.emit(DashboardEvent::AutoRefresh { enabled });
        enabled
    }

    fn tick_auto_refresh(&mut self) {
        if let Some(task) = self.auto_refresh.as_mut() {
            task.injections += 1;
            self.tick_synthetic_alert();
        }
    }

    pub fn change_timeframe(&mut self, timeframe: Timeframe) -> Distribution {
        let data = distribution(timeframe);
        let widths = data.bar_widths();
        self.set_slot(Slot::CriticalBar, &BarWidths::format(widths.critical));
        self.set_slot(Slot::HighBar, &BarWidths::format(widths.high));
        self.set_slot(Slot::MediumBar, &BarWidths::format(widths.medium));
        self.set_slot(Slot::CriticalCount, &data.critical.to_string());
        self.set_slot(Slot::HighCount, &data.high.to_string());
        self.set_slot(Slot::MediumCount, &data.medium.to_string());
        self.timeframe = timeframe;
        tracing::debug!(operation = "change_timeframe", %timeframe, "distribution updated");
        data
    }

    pub fn export_incidents(&mut self) -> CsvExport {
        let csv = export::export_incidents(&self.incidents);
        tracing::info!(
            operation = "export_incidents",
            filename = %csv.filename,
            rows = self.incidents.len(),
            "incidents exported"
        );
        self.notify(
            "Incident report exported successfully",
            NotificationKind::Success,
        );
        csv
    }

    /// Starts the simulated analysis; ignored while one is already running.
    pub fn run_full_analysis(&mut self) -> bool {
        if self.pending_analysis.is_some() {
            tracing::debug!(operation = "run_full_analysis", "analysis already running");
            return false;
        }
        self.set_slot(Slot::AnalysisLabel, ANALYSIS_RUNNING_LABEL);
        self.pending_analysis = Some(PendingAnalysis {
            due: Instant::now() + self.config.analysis_duration,
        });
        true
    }

    fn complete_analysis(&mut self) {
        if self.pending_analysis.take().is_none() {
            return;
        }
        self.finish_count_up();
        self.write_metrics(&MetricSnapshot::after_full_analysis());
        self.push_alert(feed::ANALYSIS_COMPLETE.stamp(local_time_of_day()));
        self.set_slot(Slot::AnalysisLabel, ANALYSIS_IDLE_LABEL);
        self.notify(
            "Full analysis completed - 2 new critical threats detected",
            NotificationKind::Warning,
        );
    }

    pub fn view_incident(&mut self, id: &str) -> Notification {
        self.notify(
            format!("Opening incident {} for detailed analysis", id),
            NotificationKind::Info,
        )
    }

    pub fn block_source(&mut self, address: &str) -> Notification {
        self.notify(
            format!("Blocked source IP: {}", address),
            NotificationKind::Success,
        )
    }

    fn advance_notifications(&mut self) {
        for transition in self.notifications.advance(Instant::now()) {
            let view = presenter::present_notification(&transition.notification, transition.state);
            self.emit(DashboardEvent::Notification { notification: view });
        }
    }

    /// Publishes the view before replying so callers observe their own change.
    fn respond<T>(
        &self,
        view_tx: &watch::Sender<DashboardView>,
        reply: oneshot::Sender<T>,
        value: T,
    ) {
        view_tx.send_replace(self.view());
        let _ = reply.send(value);
    }

    fn handle(&mut self, command: Command, view_tx: &watch::Sender<DashboardView>) {
        match command {
            Command::ToggleAutoRefresh { reply } => {
                let enabled = self.toggle_auto_refresh();
                self.respond(view_tx, reply, enabled);
            }
            Command::ExportIncidents { reply } => {
                let csv = self.export_incidents();
                self.respond(view_tx, reply, csv);
            }
            Command::RunFullAnalysis { reply } => {
                let started = self.run_full_analysis();
                self.respond(view_tx, reply, started);
            }
            Command::ChangeTimeframe { timeframe, reply } => {
                let data = self.change_timeframe(timeframe);
                self.respond(view_tx, reply, data);
            }
            Command::ViewIncident { id, reply } => {
                let notification = self.view_incident(&id);
                self.respond(view_tx, reply, notification);
            }
            Command::BlockSource { address, reply } => {
                let notification = self.block_source(&address);
                self.respond(view_tx, reply, notification);
            }
        }
    }
}

/// Display, channels and shutdown for the controller.
pub struct DashboardDeps<S> {
    pub surface: S,
    pub events: broadcast::Sender<DashboardEvent>,
    pub ws_connections: Arc<AtomicUsize>,
    pub shutdown_rx: oneshot::Receiver<()>,
}

/// Spawns the controller task. Must be called inside a tokio runtime.
pub fn spawn<S>(
    deps: DashboardDeps<S>,
    config: DashboardConfig,
) -> (DashboardHandle, tokio::task::JoinHandle<()>)
where
    S: DisplaySurface + Send + 'static,
{
    let DashboardDeps {
        surface,
        events,
        ws_connections,
        shutdown_rx,
    } = deps;
    let dashboard = Dashboard::new(surface, events.clone(), config);
    let (view_tx, view_rx) = watch::channel(dashboard.view());
    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    let handle = DashboardHandle {
        commands: command_tx,
        view: view_rx,
        events,
    };
    let scheduler_span = tracing::span!(
        tracing::Level::DEBUG,
        "scheduler",
        clock_interval_ms = dashboard.config.clock_interval.as_millis() as u64
    );
    let join = tokio::spawn(
        run(dashboard, command_rx, view_tx, ws_connections, shutdown_rx)
            .instrument(scheduler_span),
    );
    (handle, join)
}

async fn run<S: DisplaySurface>(
    mut dashboard: Dashboard<S>,
    mut commands: mpsc::Receiver<Command>,
    view_tx: watch::Sender<DashboardView>,
    ws_connections: Arc<AtomicUsize>,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    let mut clock_tick = every(dashboard.config.clock_interval);
    let mut metrics_tick = every(dashboard.config.metrics_interval);
    let mut synthetic_tick = every(dashboard.config.synthetic_alert_interval);
    let mut stats_log_tick = every(dashboard.config.stats_log_interval);

    loop {
        let notification_deadline = dashboard.notifications.next_deadline();
        let analysis_deadline = dashboard.pending_analysis.map(|p| p.due);
        tokio::select! {
            _ = clock_tick.tick() => dashboard.tick_clock(),
            _ = metrics_tick.tick() => dashboard.tick_metrics(),
            _ = synthetic_tick.tick() => dashboard.tick_synthetic_alert(),
            _ = next_tick(dashboard.auto_refresh.as_mut().map(|t| &mut t.ticks)) => {
                dashboard.tick_auto_refresh();
            }
            _ = next_tick(dashboard.count_up.as_mut().map(|c| &mut c.frames)) => {
                dashboard.tick_count_up();
            }
            _ = sleep_until_opt(notification_deadline) => dashboard.advance_notifications(),
            _ = sleep_until_opt(analysis_deadline) => dashboard.complete_analysis(),
            command = commands.recv() => {
                match command {
                    Some(command) => dashboard.handle(command, &view_tx),
                    None => {
                        tracing::debug!("All dashboard handles dropped");
                        break;
                    }
                }
            }
            _ = stats_log_tick.tick() => {
                tracing::info!(
                    ws_clients = ws_connections.load(std::sync::atomic::Ordering::Relaxed),
                    alerts_in_feed = dashboard.feed.len(),
                    synthetic_alerts_injected = dashboard.synthetic_alerts_injected,
                    live_notifications = dashboard.notifications.len(),
                    auto_refresh = dashboard.auto_refresh_enabled(),
                    "dashboard stats"
                );
            }
            _ = &mut shutdown_rx => {
                tracing::debug!("Dashboard controller shutting down");
                break;
            }
        }
        view_tx.send_replace(dashboard.view());
    }
}
