// Per-tick, per-slot failures. None of these is fatal to the process.

use crate::display::Slot;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The display has no such slot; the write is skipped.
    #[error("display slot {0} is not present")]
    MissingDisplaySlot(Slot),

    #[error("unknown timeframe key {0:?} (expected one of 1h, 24h, 7d)")]
    UnknownTimeframeKey(String),

    /// Displayed text could not be parsed back into a number before an incremental update.
    #[error("cannot parse {0:?} as a number")]
    MalformedNumericText(String),

    #[error("dashboard controller has stopped")]
    ControllerStopped,
}
