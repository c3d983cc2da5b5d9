// Headline metric values as displayed

use serde::{Deserialize, Serialize};

/// Text of the four metric cards. Values are kept as display text because the
/// dashboard only ever shows them; numeric work parses the text back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSnapshot {
    pub total_events: String,
    pub active_threats: String,
    pub mttd: String,
    pub accuracy: String,
}

impl MetricSnapshot {
    /// Values shown before any tick has run.
    pub fn initial() -> Self {
        Self {
            total_events: "12,847".into(),
            active_threats: "7".into(),
            mttd: "4.2".into(),
            accuracy: "97.8%".into(),
        }
    }

    /// Values published when a full analysis completes.
    pub fn after_full_analysis() -> Self {
        Self {
            total_events: "12,483".into(),
            active_threats: "9".into(),
            mttd: "3.7".into(),
            accuracy: "98.2%".into(),
        }
    }
}
