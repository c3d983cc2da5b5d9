// Alert feed entries

use serde::{Deserialize, Serialize};

/// Alert and incident severity; serializes to lowercase JSON (e.g. "critical").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEntry {
    pub severity: Severity,
    pub title: String,
    pub details: String,
    /// Wall-clock time of day, `HH:MM:SS`.
    pub timestamp: String,
}

impl AlertEntry {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        details: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            details: details.into(),
            timestamp: timestamp.into(),
        }
    }
}
