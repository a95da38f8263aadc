//! CSV text for the report downloads.

use crate::models::table::{Cell, TableRow};

pub const RESULTS_FILE: &str = "Results.csv";
pub const STATISTICS_FILE: &str = "Statistics.csv";

/// Builds a CSV document: one header line of column keys, then one line per row.
///
/// Lines are joined with `\n` and there is no trailing newline, so `rows.len()`
/// records give `rows.len() + 1` lines. Text fields are quoted with embedded
/// quotes doubled; numbers are written bare and blank cells are left empty.
pub fn to_csv<R: TableRow>(rows: &[R]) -> String {
    let header = R::COLUMNS
        .iter()
        .map(|column| column.key)
        .collect::<Vec<_>>()
        .join(",");

    std::iter::once(header)
        .chain(rows.iter().map(|row| {
            row.cells()
                .iter()
                .map(field)
                .collect::<Vec<_>>()
                .join(",")
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

fn field(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => format!("\"{}\"", text.replace('"', "\"\"")),
        Cell::Number(n) => n.to_string(),
        Cell::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::DiscrepancyRecord;

    fn record(case_id: &str, reason: &str) -> DiscrepancyRecord {
        DiscrepancyRecord {
            case_id: case_id.to_string(),
            event_code: "10140".to_string(),
            event_name: "Measles".to_string(),
            mmwr_year: Some(2023),
            mmwr_week: Some(14),
            reason: reason.to_string(),
            reason_id: Some(2),
        }
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = to_csv::<DiscrepancyRecord>(&[]);
        assert_eq!(
            csv,
            "CaseID,EventCode,EventName,MMWRYear,MMWRWeek,Reason,ReasonID"
        );
    }

    #[test]
    fn test_text_fields_are_quoted() {
        let csv = to_csv(&[record("A-1", "Missing from \"CDC\", state only")]);
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "\"A-1\",\"10140\",\"Measles\",2023,14,\"Missing from \"\"CDC\"\", state only\",2"
        );
    }

    #[test]
    fn test_blank_numbers_are_empty_fields() {
        let mut row = record("A-2", "Duplicate");
        row.mmwr_week = None;
        row.reason_id = None;

        let csv = to_csv(&[row]);
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(line, "\"A-2\",\"10140\",\"Measles\",2023,,\"Duplicate\",");
    }
}
