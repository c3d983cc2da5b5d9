// Domain models: alerts, incidents, metrics, notifications

mod alert;
mod incident;
mod metrics;
mod notification;

pub use alert::{AlertEntry, Severity};
pub use incident::{IncidentRecord, IncidentStatus};
pub use metrics::MetricSnapshot;
pub use notification::{Notification, NotificationKind, NotificationState};
