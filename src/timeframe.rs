// Threat distribution per timeframe.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1h")]
    LastHour,
    #[serde(rename = "24h")]
    LastDay,
    #[serde(rename = "7d")]
    LastWeek,
}

impl Timeframe {
    pub fn key(self) -> &'static str {
        match self {
            Timeframe::LastHour => "1h",
            Timeframe::LastDay => "24h",
            Timeframe::LastWeek => "7d",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Timeframe {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1h" => Ok(Timeframe::LastHour),
            "24h" => Ok(Timeframe::LastDay),
            "7d" => Ok(Timeframe::LastWeek),
            other => Err(DashboardError::UnknownTimeframeKey(other.to_string())),
        }
    }
}

/// Threat counts by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
}

/// Bar widths in percent; they sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarWidths {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
}

impl Distribution {
    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium
    }

    /// `count / total * 100` per severity. Every table entry has a non-zero total.
    pub fn bar_widths(&self) -> BarWidths {
        let total = self.total().max(1) as f64;
        BarWidths {
            critical: self.critical as f64 / total * 100.0,
            high: self.high as f64 / total * 100.0,
            medium: self.medium as f64 / total * 100.0,
        }
    }
}

impl BarWidths {
    /// CSS-style width text, e.g. "28.57%".
    pub fn format(width: f64) -> String {
        format!("{:.2}%", width)
    }
}

pub fn distribution(timeframe: Timeframe) -> Distribution {
    match timeframe {
        Timeframe::LastHour => Distribution {
            critical: 1,
            high: 2,
            medium: 1,
        },
        Timeframe::LastDay => Distribution {
            critical: 2,
            high: 3,
            medium: 2,
        },
        Timeframe::LastWeek => Distribution {
            critical: 5,
            high: 8,
            medium: 12,
        },
    }
}

/// Looks up the distribution for a raw timeframe key; unknown keys are rejected.
pub fn distribution_for(key: &str) -> Result<Distribution, DashboardError> {
    Ok(distribution(key.parse()?))
}
