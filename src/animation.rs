// Count-up animation for integer metrics (ease-out cubic).

use std::time::Duration;

use crate::display::Slot;
use crate::error::DashboardError;

/// Default count-up duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Ease-out cubic: `1 - (1 - p)^3`, with `p` clamped to [0, 1].
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Value shown `elapsed` into an animation from `start` to `end` lasting `duration`.
/// Reaches exactly `end` once `elapsed >= duration`.
pub fn value_at(start: u64, end: u64, elapsed: Duration, duration: Duration) -> u64 {
    let progress = if duration.is_zero() {
        1.0
    } else {
        elapsed.as_nanos() as f64 / duration.as_nanos() as f64
    };
    let progress = progress.clamp(0.0, 1.0);
    if progress >= 1.0 {
        return end;
    }
    let (start_f, end_f) = (start as f64, end as f64);
    let current = (start_f + (end_f - start_f) * ease_out_cubic(progress)).floor();
    current.clamp(start_f.min(end_f), start_f.max(end_f)) as u64
}

/// Formats with `,` thousands separators (e.g. 12847 -> "12,847").
pub fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parses displayed integer text, ignoring thousands separators.
pub fn parse_display_integer(text: &str) -> Result<u64, DashboardError> {
    let stripped: String = text.chars().filter(|c| *c != ',').collect();
    stripped
        .trim()
        .parse::<u64>()
        .map_err(|_| DashboardError::MalformedNumericText(text.to_string()))
}

/// One slot being counted up from 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUpTarget {
    pub slot: Slot,
    pub end: u64,
    pub use_commas: bool,
}

impl CountUpTarget {
    /// Target for `text` if it is a plain integer; decimals and percentages are not animated.
    pub fn from_display(slot: Slot, text: &str) -> Option<Self> {
        let end = parse_display_integer(text).ok()?;
        Some(Self {
            slot,
            end,
            use_commas: text.contains(','),
        })
    }

    pub fn render(&self, value: u64) -> String {
        if self.use_commas {
            with_thousands(value)
        } else {
            value.to_string()
        }
    }
}

/// A running count-up over several slots, advanced one frame at a time.
#[derive(Debug, Clone)]
pub struct CountUpTask {
    targets: Vec<CountUpTarget>,
    duration: Duration,
}

impl CountUpTask {
    pub fn new(targets: Vec<CountUpTarget>, duration: Duration) -> Self {
        Self { targets, duration }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Text for every slot at `elapsed`, plus whether the animation has finished.
    pub fn frame(&self, elapsed: Duration) -> (Vec<(Slot, String)>, bool) {
        let frame = self
            .targets
            .iter()
            .map(|t| (t.slot, t.render(value_at(0, t.end, elapsed, self.duration))))
            .collect();
        (frame, elapsed >= self.duration)
    }
}
