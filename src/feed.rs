// Bounded alert feed, newest first. Seed literals and synthetic templates.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{AlertEntry, Severity};

/// Default maximum number of alerts retained in the feed.
pub const DEFAULT_MAX_ENTRIES: usize = 10;

/// A pre-written alert; stamped with the current time when injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTemplate {
    pub severity: Severity,
    pub title: &'static str,
    pub details: &'static str,
}

impl AlertTemplate {
    pub fn stamp(&self, timestamp: impl Into<String>) -> AlertEntry {
        AlertEntry::new(self.severity, self.title, self.details, timestamp)
    }
}

/// Templates drawn from for synthetic alerts.
pub const SYNTHETIC_TEMPLATES: [AlertTemplate; 3] = [
    AlertTemplate {
        severity: Severity::Medium,
        title: "Unusual Network Activity",
        details: "10.0.0.15 → Port scanning detected",
    },
    AlertTemplate {
        severity: Severity::High,
        title: "Login from New Location",
        details: "admin account → Suspicious geolocation",
    },
    AlertTemplate {
        severity: Severity::Medium,
        title: "Antivirus Alert",
        details: "Potential malware → Quarantined",
    },
];

/// Alert raised when a full analysis completes.
pub const ANALYSIS_COMPLETE: AlertTemplate = AlertTemplate {
    severity: Severity::Critical,
    title: "Full Analysis Complete",
    details: "2 new critical threats identified | Immediate action required",
};

/// Picks one synthetic template uniformly at random.
pub fn choose_template<R: Rng + ?Sized>(rng: &mut R) -> AlertTemplate {
    *SYNTHETIC_TEMPLATES
        .choose(rng)
        .unwrap_or(&SYNTHETIC_TEMPLATES[0])
}

/// Alerts shown at startup, newest first.
pub fn seed_alerts() -> Vec<AlertEntry> {
    vec![
        AlertEntry::new(
            Severity::Critical,
            "Data Exfiltration Detected",
            "192.168.1.150 → 203.0.113.195 | 847MB transferred",
            "14:32:15",
        ),
        AlertEntry::new(
            Severity::High,
            "Brute Force Attack",
            "203.0.113.15 → admin account | 47 attempts",
            "14:28:42",
        ),
        AlertEntry::new(
            Severity::High,
            "Malware Communication",
            "10.0.0.25 → 185.220.101.42 | Botnet C2",
            "14:25:18",
        ),
        AlertEntry::new(
            Severity::Medium,
            "Suspicious Port Activity",
            "172.16.1.10 → Port 31337 | Unusual traffic",
            "14:22:07",
        ),
        AlertEntry::new(
            Severity::High,
            "Failed Login Spike",
            "198.51.100.25 → Multiple accounts | 23 attempts",
            "14:19:33",
        ),
        AlertEntry::new(
            Severity::Critical,
            "APT Communication",
            "192.168.1.102 → 203.0.113.195 | Command & Control",
            "14:15:22",
        ),
        AlertEntry::new(
            Severity::Medium,
            "Off-Hours File Access",
            "finance_data.xlsx accessed | User: jsmith",
            "14:12:45",
        ),
    ]
}

/// Reverse-chronological feed holding at most `max_entries` alerts.
#[derive(Debug, Clone)]
pub struct AlertFeed {
    entries: VecDeque<AlertEntry>,
    max_entries: usize,
}

impl AlertFeed {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries + 1),
            max_entries,
        }
    }

    /// Feed pre-filled with `seed` (already newest first), trimmed to the bound.
    pub fn with_seed(max_entries: usize, seed: Vec<AlertEntry>) -> Self {
        let mut feed = Self::new(max_entries);
        feed.entries.extend(seed);
        feed.entries.truncate(max_entries);
        feed
    }

    /// Inserts at the head; returns the evicted tail entry when the bound is exceeded.
    pub fn push(&mut self, entry: AlertEntry) -> Option<AlertEntry> {
        self.entries.push_front(entry);
        if self.entries.len() > self.max_entries {
            self.entries.pop_back()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn latest(&self) -> Option<&AlertEntry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlertEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<AlertEntry> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for AlertFeed {
    fn default() -> Self {
        Self::with_seed(DEFAULT_MAX_ENTRIES, seed_alerts())
    }
}
