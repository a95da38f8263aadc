use super::table::{Cell, Column, TableRow};
use super::wire;
use serde::{Deserialize, Serialize};

/// Per-disease counts from `GET /report_statistics/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiseaseStatistic {
    #[serde(rename = "EventCode", deserialize_with = "wire::text", default)]
    pub event_code: String,
    #[serde(rename = "EventName", deserialize_with = "wire::text", default)]
    pub event_name: String,
    #[serde(rename = "TotalCases", deserialize_with = "wire::count", default)]
    pub total_cases: u64,
    #[serde(rename = "TotalDuplicates", deserialize_with = "wire::count", default)]
    pub total_duplicates: u64,
    #[serde(rename = "TotalMissingFromCDC", deserialize_with = "wire::count", default)]
    pub total_missing_from_cdc: u64,
    #[serde(rename = "TotalMissingFromState", deserialize_with = "wire::count", default)]
    pub total_missing_from_state: u64,
    #[serde(rename = "TotalWrongAttributes", deserialize_with = "wire::count", default)]
    pub total_wrong_attributes: u64,
}

/// Field-wise sums over every disease of a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatisticsTotals {
    pub diseases: usize,
    pub total_cases: u64,
    pub total_duplicates: u64,
    pub total_missing_from_cdc: u64,
    pub total_missing_from_state: u64,
    pub total_wrong_attributes: u64,
}

impl StatisticsTotals {
    pub fn from_rows(rows: &[DiseaseStatistic]) -> Self {
        rows.iter().collect()
    }

    fn add(mut self, row: &DiseaseStatistic) -> Self {
        self.diseases += 1;
        self.total_cases = self.total_cases.saturating_add(row.total_cases);
        self.total_duplicates = self
            .total_duplicates
            .saturating_add(row.total_duplicates);
        self.total_missing_from_cdc = self
            .total_missing_from_cdc
            .saturating_add(row.total_missing_from_cdc);
        self.total_missing_from_state = self
            .total_missing_from_state
            .saturating_add(row.total_missing_from_state);
        self.total_wrong_attributes = self
            .total_wrong_attributes
            .saturating_add(row.total_wrong_attributes);
        self
    }
}

impl<'a> FromIterator<&'a DiseaseStatistic> for StatisticsTotals {
    fn from_iter<I: IntoIterator<Item = &'a DiseaseStatistic>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::add)
    }
}

fn count(value: u64) -> Cell {
    Cell::Number(i64::try_from(value).unwrap_or(i64::MAX))
}

impl TableRow for DiseaseStatistic {
    const COLUMNS: &'static [Column] = &[
        Column::new("EventCode", "Event Code"),
        Column::new("EventName", "Event Name"),
        Column::new("TotalCases", "Total Cases"),
        Column::new("TotalDuplicates", "Total Duplicates"),
        Column::new("TotalMissingFromCDC", "Total Missing From CDC"),
        Column::new("TotalMissingFromState", "Total Missing From State"),
        Column::new("TotalWrongAttributes", "Total Wrong Attributes"),
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.event_code.clone()),
            Cell::Text(self.event_name.clone()),
            count(self.total_cases),
            count(self.total_duplicates),
            count(self.total_missing_from_cdc),
            count(self.total_missing_from_state),
            count(self.total_wrong_attributes),
        ]
    }
}
