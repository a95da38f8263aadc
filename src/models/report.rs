use super::table::{Cell, Column, TableRow};
use super::wire;
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ReportId = i64;

/// One entry of the report list, as returned by `GET /reports`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(rename = "ID")]
    pub id: ReportId,
    #[serde(rename = "NumberOfDiscrepancies")]
    pub number_of_discrepancies: u64,
    /// `YYYY-MM-DD`, UTC
    #[serde(rename = "CreatedAtDate")]
    pub created_at_date: String,
    /// `HH:MM:SS`, UTC
    #[serde(rename = "TimeOfCreation")]
    pub time_of_creation: String,
}

impl ReportSummary {
    /// Combines the stored UTC date and time columns.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let stamp = format!("{} {}", self.created_at_date, self.time_of_creation);
        NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|dt| dt.and_utc())
    }

    /// Creation time in the browser's local timezone, falling back to the raw columns.
    pub fn created_label(&self) -> String {
        match self.created_at() {
            Some(created) => created
                .with_timezone(&Local)
                .format("%m/%d/%Y, %I:%M:%S %p")
                .to_string(),
            None => format!("{} {}", self.created_at_date, self.time_of_creation),
        }
    }
}

/// A single reconciliation mismatch from `GET /reports/{id}`.
///
/// Columns hold raw CSV cells, so any of them may be blank.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscrepancyRecord {
    #[serde(rename = "CaseID", deserialize_with = "wire::text", default)]
    pub case_id: String,
    #[serde(rename = "EventCode", deserialize_with = "wire::text", default)]
    pub event_code: String,
    #[serde(rename = "EventName", deserialize_with = "wire::text", default)]
    pub event_name: String,
    #[serde(rename = "MMWRYear", deserialize_with = "wire::optional_int", default)]
    pub mmwr_year: Option<i32>,
    #[serde(rename = "MMWRWeek", deserialize_with = "wire::optional_int", default)]
    pub mmwr_week: Option<i32>,
    #[serde(rename = "Reason", deserialize_with = "wire::text", default)]
    pub reason: String,
    #[serde(rename = "ReasonID", deserialize_with = "wire::optional_int", default)]
    pub reason_id: Option<i64>,
}

impl TableRow for DiscrepancyRecord {
    const COLUMNS: &'static [Column] = &[
        Column::new("CaseID", "Case ID"),
        Column::new("EventCode", "Event Code"),
        Column::new("EventName", "Event Name"),
        Column::new("MMWRYear", "MMWR Year"),
        Column::new("MMWRWeek", "MMWR Week"),
        Column::new("Reason", "Reason"),
        Column::new("ReasonID", "Reason ID"),
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.case_id.clone()),
            Cell::Text(self.event_code.clone()),
            Cell::Text(self.event_name.clone()),
            Cell::from(self.mmwr_year.map(i64::from)),
            Cell::from(self.mmwr_week.map(i64::from)),
            Cell::Text(self.reason.clone()),
            Cell::from(self.reason_id),
        ]
    }
}
