// Display surface: named text slots written by the scheduler.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::DashboardError;

/// Named text slots on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    CurrentTime,
    LastAnalysis,
    TotalEvents,
    ActiveThreats,
    Mttd,
    Accuracy,
    CriticalBar,
    HighBar,
    MediumBar,
    CriticalCount,
    HighCount,
    MediumCount,
    AutoRefreshLabel,
    AnalysisLabel,
}

impl Slot {
    pub const ALL: [Slot; 14] = [
        Slot::CurrentTime,
        Slot::LastAnalysis,
        Slot::TotalEvents,
        Slot::ActiveThreats,
        Slot::Mttd,
        Slot::Accuracy,
        Slot::CriticalBar,
        Slot::HighBar,
        Slot::MediumBar,
        Slot::CriticalCount,
        Slot::HighCount,
        Slot::MediumCount,
        Slot::AutoRefreshLabel,
        Slot::AnalysisLabel,
    ];

    /// The four metric cards, in display order.
    pub const METRICS: [Slot; 4] = [
        Slot::TotalEvents,
        Slot::ActiveThreats,
        Slot::Mttd,
        Slot::Accuracy,
    ];

    /// Element id on the page (camelCase, same as the JSON name).
    pub fn id(self) -> &'static str {
        match self {
            Slot::CurrentTime => "currentTime",
            Slot::LastAnalysis => "lastAnalysis",
            Slot::TotalEvents => "totalEvents",
            Slot::ActiveThreats => "activeThreats",
            Slot::Mttd => "mttd",
            Slot::Accuracy => "accuracy",
            Slot::CriticalBar => "criticalBar",
            Slot::HighBar => "highBar",
            Slot::MediumBar => "mediumBar",
            Slot::CriticalCount => "criticalCount",
            Slot::HighCount => "highCount",
            Slot::MediumCount => "mediumCount",
            Slot::AutoRefreshLabel => "autoRefreshLabel",
            Slot::AnalysisLabel => "analysisLabel",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Where the scheduler publishes text. Writes to an absent slot fail with
/// `MissingDisplaySlot`; callers skip the write and carry on.
pub trait DisplaySurface {
    fn write(&mut self, slot: Slot, text: &str) -> Result<(), DashboardError>;

    fn read(&self, slot: Slot) -> Result<&str, DashboardError>;

    /// Current text of every present slot.
    fn snapshot(&self) -> BTreeMap<Slot, String>;
}

/// In-memory display with a fixed set of present slots.
#[derive(Debug, Clone, Default)]
pub struct SlotBoard {
    slots: BTreeMap<Slot, String>,
}

impl SlotBoard {
    pub fn new(present: impl IntoIterator<Item = Slot>) -> Self {
        Self {
            slots: present.into_iter().map(|s| (s, String::new())).collect(),
        }
    }

    /// Board with every known slot present.
    pub fn full() -> Self {
        Self::new(Slot::ALL)
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.slots.contains_key(&slot)
    }
}

impl DisplaySurface for SlotBoard {
    fn write(&mut self, slot: Slot, text: &str) -> Result<(), DashboardError> {
        let current = self
            .slots
            .get_mut(&slot)
            .ok_or(DashboardError::MissingDisplaySlot(slot))?;
        current.clear();
        current.push_str(text);
        Ok(())
    }

    fn read(&self, slot: Slot) -> Result<&str, DashboardError> {
        self.slots
            .get(&slot)
            .map(String::as_str)
            .ok_or(DashboardError::MissingDisplaySlot(slot))
    }

    fn snapshot(&self) -> BTreeMap<Slot, String> {
        self.slots.clone()
    }
}

