// Investigation queue records

use serde::{Deserialize, Serialize};

use super::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Investigating,
    Blocked,
    Monitoring,
}

impl IncidentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Blocked => "blocked",
            IncidentStatus::Monitoring => "monitoring",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub severity: Severity,
    pub source_address: String,
    pub time: String,
    pub status: IncidentStatus,
}

impl IncidentRecord {
    /// The fixed investigation queue shown on the dashboard.
    pub fn seed() -> Vec<IncidentRecord> {
        [
            (
                "BF-20250826-143215-2030113015",
                "Brute Force Attack",
                Severity::Critical,
                "203.0.113.15",
                "14:32:15",
                IncidentStatus::Investigating,
            ),
            (
                "MW-20250826-142818-18522010142",
                "Malware Communication",
                Severity::High,
                "10.0.0.25",
                "14:28:18",
                IncidentStatus::Blocked,
            ),
            (
                "DE-20250826-141522-2030113195",
                "Data Exfiltration",
                Severity::Critical,
                "192.168.1.150",
                "14:15:22",
                IncidentStatus::Investigating,
            ),
            (
                "BF-20250826-141933-19851100025",
                "Brute Force Attack",
                Severity::High,
                "198.51.100.25",
                "14:19:33",
                IncidentStatus::Blocked,
            ),
            (
                "SA-20250826-141245-17216110",
                "Suspicious Activity",
                Severity::Medium,
                "172.16.1.10",
                "14:12:45",
                IncidentStatus::Monitoring,
            ),
        ]
        .into_iter()
        .map(|(id, type_, severity, source, time, status)| IncidentRecord {
            id: id.into(),
            type_: type_.into(),
            severity,
            source_address: source.into(),
            time: time.into(),
            status,
        })
        .collect()
    }
}
