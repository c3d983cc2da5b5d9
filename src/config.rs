use serde::Deserialize;

use crate::display::Slot;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub publishing: PublishingConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishingConfig {
    /// Max number of dashboard events kept in the broadcast channel for /ws/dashboard (slow clients may lag).
    pub broadcast_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub clock_interval_ms: u64,
    pub metrics_interval_ms: u64,
    pub synthetic_alert_interval_ms: u64,
    /// Extra injection period while auto-refresh is on.
    pub auto_refresh_interval_ms: u64,
    pub analysis_duration_ms: u64,
    pub auto_refresh_on_start: bool,
    /// Fixed RNG seed for reproducible demos; entropy when unset.
    pub random_seed: Option<u64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: 1000,
            metrics_interval_ms: 5000,
            synthetic_alert_interval_ms: 15_000,
            auto_refresh_interval_ms: 10_000,
            analysis_duration_ms: 3000,
            auto_refresh_on_start: false,
            random_seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: u64,
    /// Frame cadence for the count-up; best effort.
    pub frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            frame_interval_ms: 16,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub visible_ms: u64,
    pub fade_out_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            visible_ms: 3000,
            fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub max_entries: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_entries: crate::feed::DEFAULT_MAX_ENTRIES,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Slots present on the page; writes to any other slot are skipped.
    pub slots: Vec<Slot>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            slots: Slot::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// How often to log dashboard stats (ws clients, alerts injected) at INFO level.
    pub stats_log_interval_secs: u64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            stats_log_interval_secs: 60,
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            self.publishing.broadcast_capacity > 0,
            "publishing.broadcast_capacity must be > 0, got {}",
            self.publishing.broadcast_capacity
        );
        let intervals = [
            ("scheduler.clock_interval_ms", self.scheduler.clock_interval_ms),
            ("scheduler.metrics_interval_ms", self.scheduler.metrics_interval_ms),
            (
                "scheduler.synthetic_alert_interval_ms",
                self.scheduler.synthetic_alert_interval_ms,
            ),
            (
                "scheduler.auto_refresh_interval_ms",
                self.scheduler.auto_refresh_interval_ms,
            ),
            ("animation.duration_ms", self.animation.duration_ms),
            ("animation.frame_interval_ms", self.animation.frame_interval_ms),
            ("notifications.visible_ms", self.notifications.visible_ms),
            (
                "monitoring.stats_log_interval_secs",
                self.monitoring.stats_log_interval_secs,
            ),
        ];
        for (name, value) in intervals {
            anyhow::ensure!(value > 0, "{} must be > 0, got {}", name, value);
        }
        anyhow::ensure!(
            self.feed.max_entries > 0,
            "feed.max_entries must be > 0, got {}",
            self.feed.max_entries
        );
        anyhow::ensure!(
            !self.display.slots.is_empty(),
            "display.slots must be non-empty"
        );
        Ok(())
    }
}
