// CSV export of the investigation queue.

use chrono::NaiveDate;

use crate::models::IncidentRecord;

pub const CSV_HEADER: &str = "Incident ID,Threat Type,Severity,Source,Time,Status";

/// A text file ready to hand to the client as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// Commas inside a field would break the row; they become semicolons.
fn field(text: &str) -> String {
    text.replace(',', ";")
}

pub fn incidents_csv(incidents: &[IncidentRecord]) -> String {
    let mut lines = Vec::with_capacity(incidents.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for incident in incidents {
        let row = [
            field(&incident.id),
            field(&incident.type_),
            field(incident.severity.as_str()),
            field(&incident.source_address),
            field(&incident.time),
            field(incident.status.as_str()),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("soc_incidents_{}.csv", date.format("%Y-%m-%d"))
}

/// Export named after today's UTC date.
pub fn export_incidents(incidents: &[IncidentRecord]) -> CsvExport {
    CsvExport {
        filename: export_filename(chrono::Utc::now().date_naive()),
        content: incidents_csv(incidents),
    }
}
