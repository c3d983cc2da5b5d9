// Data -> presentation mapping. Models stay free of display formatting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::display::Slot;
use crate::models::{
    AlertEntry, IncidentRecord, Notification, NotificationKind, NotificationState, Severity,
};
use crate::timeframe::Timeframe;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertView {
    pub class_name: String,
    pub severity: Severity,
    pub severity_label: String,
    pub title: String,
    pub details: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentView {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub severity: Severity,
    pub severity_class: String,
    pub source: String,
    pub time: String,
    pub status: String,
    pub status_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub state: NotificationState,
    pub class_name: String,
    /// Theme colour for the left border.
    pub accent: String,
}

pub fn present_alert(alert: &AlertEntry) -> AlertView {
    let severity = alert.severity.as_str();
    AlertView {
        class_name: format!("alert-item {}", severity),
        severity: alert.severity,
        severity_label: severity.to_uppercase(),
        title: alert.title.clone(),
        details: alert.details.clone(),
        time: alert.timestamp.clone(),
    }
}

pub fn present_incident(incident: &IncidentRecord) -> IncidentView {
    IncidentView {
        id: incident.id.clone(),
        type_: incident.type_.clone(),
        severity: incident.severity,
        severity_class: format!("severity-badge {}", incident.severity.as_str()),
        source: incident.source_address.clone(),
        time: incident.time.clone(),
        status: incident.status.as_str().to_string(),
        status_class: format!("status-badge {}", incident.status.as_str()),
    }
}

pub fn accent_for(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "success",
        NotificationKind::Warning => "warning",
        NotificationKind::Error => "danger",
        NotificationKind::Info => "accent-primary",
    }
}

pub fn present_notification(
    notification: &Notification,
    state: NotificationState,
) -> NotificationView {
    let kind = match notification.kind {
        NotificationKind::Info => "info",
        NotificationKind::Success => "success",
        NotificationKind::Warning => "warning",
        NotificationKind::Error => "error",
    };
    NotificationView {
        id: notification.id,
        message: notification.message.clone(),
        kind: notification.kind,
        state,
        class_name: format!("notification {}", kind),
        accent: accent_for(notification.kind).to_string(),
    }
}

/// Everything a client needs to draw the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub slots: BTreeMap<Slot, String>,
    pub alerts: Vec<AlertView>,
    pub incidents: Vec<IncidentView>,
    pub notifications: Vec<NotificationView>,
    pub auto_refresh: bool,
    pub analysis_running: bool,
    pub timeframe: Timeframe,
    pub synthetic_alerts_injected: u64,
}

/// Incremental updates pushed to WebSocket clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DashboardEvent {
    Slot { slot: Slot, text: String },
    Alert { alert: AlertView, evicted: bool },
    Notification { notification: NotificationView },
    AutoRefresh { enabled: bool },
}
