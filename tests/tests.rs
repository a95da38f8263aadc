#[cfg(test)]
mod tests {
    use recon_dashboard::hooks::data_state::DataState;
    use recon_dashboard::models::{
        error::{AppError, ValidationError},
        report::{DiscrepancyRecord, ReportSummary},
        report_list::ReportList,
        statistics::{DiseaseStatistic, StatisticsTotals},
        submission::{
            CompareAttribute, ReportForm, ReportMode, ReportSubmission, UploadFile, year_options,
        },
        table::{DEFAULT_PAGE_SIZE, PAGE_SIZES, SortDirection, TableState},
    };
    use recon_dashboard::utils::csv::to_csv;
    use chrono::{TimeZone, Utc};
    use std::rc::Rc;

    const CURRENT_YEAR: i32 = 2025;

    // Helper function to create a discrepancy row
    fn record(case_id: &str, event_code: &str, week: i32, reason_id: i64) -> DiscrepancyRecord {
        DiscrepancyRecord {
            case_id: case_id.to_string(),
            event_code: event_code.to_string(),
            event_name: format!("Disease {event_code}"),
            mmwr_year: Some(2024),
            mmwr_week: Some(week),
            reason: "Missing from CDC".to_string(),
            reason_id: Some(reason_id),
        }
    }

    fn create_test_records() -> Vec<DiscrepancyRecord> {
        vec![
            record("100", "10140", 3, 1),
            record("205", "11080", 12, 2),
            record("31", "10140", 7, 3),
            record("412", "10190", 40, 1),
        ]
    }

    // Helper function to create per-disease statistics
    fn create_test_statistics() -> Vec<DiseaseStatistic> {
        vec![
            DiseaseStatistic {
                event_code: "10140".to_string(),
                event_name: "Measles".to_string(),
                total_cases: 120,
                total_duplicates: 3,
                total_missing_from_cdc: 5,
                total_missing_from_state: 2,
                total_wrong_attributes: 7,
            },
            DiseaseStatistic {
                event_code: "11080".to_string(),
                event_name: "Pertussis".to_string(),
                total_cases: 80,
                total_duplicates: 0,
                total_missing_from_cdc: 1,
                total_missing_from_state: 4,
                total_wrong_attributes: 2,
            },
            DiseaseStatistic {
                event_code: "10190".to_string(),
                event_name: "Mumps".to_string(),
                total_cases: 15,
                total_duplicates: 1,
                total_missing_from_cdc: 0,
                total_missing_from_state: 0,
                total_wrong_attributes: 1,
            },
        ]
    }

    fn summaries(count: i64) -> Vec<ReportSummary> {
        (1..=count)
            .rev()
            .map(|id| ReportSummary {
                id,
                number_of_discrepancies: u64::try_from(id * 10).unwrap(),
                created_at_date: "2024-03-01".to_string(),
                time_of_creation: "14:05:09".to_string(),
            })
            .collect()
    }

    fn csv_file(name: &str) -> UploadFile {
        UploadFile::new(name, b"CaseID,EventCode\n1,10140\n".to_vec())
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection refused".to_string());
        assert_eq!(error.to_string(), "API error: Connection refused");
    }

    #[test]
    fn test_http_error_displays_server_detail() {
        let error = AppError::Http {
            status: 400,
            detail: "State file is missing the CaseID column".to_string(),
        };
        assert_eq!(error.to_string(), "State file is missing the CaseID column");
    }

    #[test]
    fn test_validation_error_converts_into_app_error() {
        let error: AppError = ValidationError::MissingCdcFile.into();
        assert_eq!(error, AppError::Validation(ValidationError::MissingCdcFile));
        assert_eq!(error.to_string(), "CDC file not uploaded");
    }

    // ===== Wire Model Tests =====

    #[test]
    fn test_report_summary_deserialization() {
        let json = r#"{
            "ID": 12,
            "CreatedAtDate": "2024-03-01",
            "TimeOfCreation": "14:05:09",
            "NumberOfDiscrepancies": 37
        }"#;

        let summary: ReportSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 12);
        assert_eq!(summary.number_of_discrepancies, 37);
        assert_eq!(
            summary.created_at(),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap())
        );
    }

    #[test]
    fn test_report_summary_unparsable_time_falls_back_to_raw() {
        let summary = ReportSummary {
            id: 1,
            number_of_discrepancies: 0,
            created_at_date: "yesterday".to_string(),
            time_of_creation: "noon".to_string(),
        };
        assert_eq!(summary.created_at(), None);
        assert_eq!(summary.created_label(), "yesterday noon");
    }

    #[test]
    fn test_discrepancy_deserialization_ignores_row_ids() {
        let json = r#"[{
            "ID": 901,
            "ReportID": 12,
            "CaseID": "A-77",
            "EventCode": "10140",
            "MMWRYear": 2024,
            "MMWRWeek": 9,
            "Reason": "Duplicate in state data",
            "ReasonID": 2
        }]"#;

        let rows: Vec<DiscrepancyRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].case_id, "A-77");
        assert_eq!(rows[0].event_name, "");
        assert_eq!(rows[0].mmwr_week, Some(9));
        assert_eq!(rows[0].reason_id, Some(2));
    }

    #[test]
    fn test_discrepancy_with_blank_cells_still_loads() {
        let json = r#"[
            {"CaseID": "A-1", "EventCode": "10140", "MMWRYear": 2024, "MMWRWeek": 9, "Reason": "Missing from CDC", "ReasonID": 1},
            {"CaseID": 5521, "EventCode": null, "MMWRYear": "", "MMWRWeek": null, "Reason": "Wrong attributes", "ReasonID": "3"}
        ]"#;

        let rows: Vec<DiscrepancyRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 2);

        let blank = &rows[1];
        assert_eq!(blank.case_id, "5521");
        assert_eq!(blank.event_code, "");
        assert_eq!(blank.mmwr_year, None);
        assert_eq!(blank.mmwr_week, None);
        assert_eq!(blank.reason_id, Some(3));

        let csv = to_csv(&rows);
        assert_eq!(
            csv.split('\n').nth(2),
            Some("\"5521\",\"\",\"\",,,\"Wrong attributes\",3")
        );
    }

    #[test]
    fn test_blank_cells_sort_first() {
        let mut rows = create_test_records();
        rows[2].mmwr_week = None;
        let mut state = TableState::default();
        state.toggle_sort(4);

        let weeks: Vec<Option<i32>> = state.apply(&rows).rows.iter().map(|r| r.mmwr_week).collect();
        assert_eq!(weeks, vec![None, Some(3), Some(12), Some(40)]);
    }

    #[test]
    fn test_disease_statistic_deserialization() {
        let json = r#"{
            "EventCode": "10140",
            "EventName": "Measles",
            "TotalCases": 120,
            "TotalDuplicates": 3,
            "TotalMissingFromCDC": 5,
            "TotalMissingFromState": 2,
            "TotalWrongAttributes": 7
        }"#;

        let stat: DiseaseStatistic = serde_json::from_str(json).unwrap();
        assert_eq!(stat, create_test_statistics()[0]);
    }

    #[test]
    fn test_disease_statistic_blank_counts_are_zero() {
        let json = r#"{
            "EventCode": "10190",
            "EventName": null,
            "TotalCases": "15",
            "TotalDuplicates": "",
            "TotalMissingFromCDC": null,
            "TotalMissingFromState": 0,
            "TotalWrongAttributes": 1
        }"#;

        let stat: DiseaseStatistic = serde_json::from_str(json).unwrap();
        assert_eq!(stat.event_name, "");
        assert_eq!(stat.total_cases, 15);
        assert_eq!(stat.total_duplicates, 0);
        assert_eq!(stat.total_missing_from_cdc, 0);
        assert_eq!(stat.total_wrong_attributes, 1);
    }

    // ===== Statistics Tests =====

    #[test]
    fn test_totals_are_field_wise_sums() {
        let rows = create_test_statistics();
        let totals = StatisticsTotals::from_rows(&rows);

        assert_eq!(
            totals,
            StatisticsTotals {
                diseases: 3,
                total_cases: 215,
                total_duplicates: 4,
                total_missing_from_cdc: 6,
                total_missing_from_state: 6,
                total_wrong_attributes: 10,
            }
        );
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let mut rows = create_test_statistics();
        rows[0].total_cases = u64::MAX;

        let totals = StatisticsTotals::from_rows(&rows);
        assert_eq!(totals.total_cases, u64::MAX);
        assert_eq!(totals.total_duplicates, 4);
    }

    #[test]
    fn test_totals_of_no_rows_are_zero() {
        assert_eq!(StatisticsTotals::from_rows(&[]), StatisticsTotals::default());
    }

    // ===== Create Report Form Tests =====

    #[test]
    fn test_year_options_span() {
        let years = year_options(CURRENT_YEAR);
        assert_eq!(years.len(), 101);
        assert_eq!(years.first(), Some(&CURRENT_YEAR));
        assert_eq!(years.last(), Some(&(CURRENT_YEAR + 100)));
    }

    #[test]
    fn test_form_defaults() {
        let form = ReportForm::<UploadFile>::default();
        assert_eq!(form.mode, ReportMode::Automatic);
        assert!(form.cdc_filter);
        assert_eq!(form.attributes, CompareAttribute::all().to_vec());
    }

    #[test]
    fn test_automatic_without_cdc_file_is_rejected() {
        let form = ReportForm::<UploadFile> {
            year: Some(CURRENT_YEAR),
            ..ReportForm::default()
        };
        assert_eq!(
            form.validate(CURRENT_YEAR),
            Err(ValidationError::MissingCdcFile)
        );
    }

    #[test]
    fn test_automatic_without_year_is_rejected() {
        let form = ReportForm {
            cdc_file: Some(csv_file("cdc.csv")),
            ..ReportForm::default()
        };
        assert_eq!(form.validate(CURRENT_YEAR), Err(ValidationError::MissingYear));
    }

    #[test]
    fn test_automatic_year_outside_range_is_rejected() {
        let form = ReportForm {
            cdc_file: Some(csv_file("cdc.csv")),
            year: Some(CURRENT_YEAR - 1),
            ..ReportForm::default()
        };
        assert_eq!(
            form.validate(CURRENT_YEAR),
            Err(ValidationError::YearOutOfRange(CURRENT_YEAR - 1))
        );
    }

    #[test]
    fn test_manual_without_both_files_is_rejected() {
        let only_cdc = ReportForm {
            mode: ReportMode::Manual,
            cdc_file: Some(csv_file("cdc.csv")),
            ..ReportForm::default()
        };
        assert_eq!(
            only_cdc.validate(CURRENT_YEAR),
            Err(ValidationError::MissingStateFile)
        );

        let only_state = ReportForm {
            mode: ReportMode::Manual,
            state_file: Some(csv_file("state.csv")),
            ..ReportForm::default()
        };
        assert_eq!(
            only_state.validate(CURRENT_YEAR),
            Err(ValidationError::MissingCdcFile)
        );
    }

    #[test]
    fn test_manual_mode_ignores_year() {
        let form = ReportForm {
            mode: ReportMode::Manual,
            cdc_file: Some(csv_file("cdc.csv")),
            state_file: Some(csv_file("state.csv")),
            ..ReportForm::default()
        };
        assert!(form.validate(CURRENT_YEAR).is_ok());
    }

    #[test]
    fn test_automatic_submission_shape() {
        let form = ReportForm {
            cdc_file: Some(csv_file("cdc.csv")),
            year: Some(2030),
            cdc_filter: false,
            attributes: vec![CompareAttribute::MmwrWeek, CompareAttribute::CaseId],
            ..ReportForm::default()
        };

        let submission = form.validate(CURRENT_YEAR).unwrap();
        assert_eq!(submission.endpoint(), "/automatic_report");
        assert_eq!(
            submission.query(),
            vec![
                ("year", "2030".to_string()),
                ("isCDCFilter", "false".to_string())
            ]
        );
        assert_eq!(
            submission.text_fields().unwrap(),
            vec![
                ("isCDCFilter", "false".to_string()),
                ("attributes", r#"["CaseID","MMWRWeek"]"#.to_string()),
            ]
        );

        let files = submission.into_files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "cdc_file");
        assert_eq!(files[0].1.name, "cdc.csv");
    }

    #[test]
    fn test_manual_submission_shape() {
        let form = ReportForm {
            mode: ReportMode::Manual,
            cdc_file: Some(csv_file("cdc.csv")),
            state_file: Some(csv_file("state.csv")),
            ..ReportForm::default()
        };

        let submission = form.validate(CURRENT_YEAR).unwrap();
        assert!(matches!(submission, ReportSubmission::Manual { .. }));
        assert_eq!(submission.endpoint(), "/manual_report");
        assert_eq!(submission.query(), vec![("isCDCFilter", "true".to_string())]);
        assert_eq!(
            submission.text_fields().unwrap(),
            vec![("isCDCFilter", "true".to_string())]
        );

        let names: Vec<(&str, String)> = submission
            .into_files()
            .into_iter()
            .map(|(field, file)| (field, file.name))
            .collect();
        assert_eq!(
            names,
            vec![
                ("state_file", "state.csv".to_string()),
                ("cdc_file", "cdc.csv".to_string())
            ]
        );
    }

    #[test]
    fn test_compare_attribute_parsing() {
        assert_eq!(
            "MMWRYear".parse::<CompareAttribute>().unwrap(),
            CompareAttribute::MmwrYear
        );
        assert!("mmwryear".parse::<CompareAttribute>().is_err());
    }

    // ===== CSV Export Tests =====

    #[test]
    fn test_results_csv_has_one_line_per_record_plus_header() {
        let records = create_test_records();
        let csv = to_csv(&records);
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), records.len() + 1);
        assert_eq!(
            lines[0],
            "CaseID,EventCode,EventName,MMWRYear,MMWRWeek,Reason,ReasonID"
        );
        assert_eq!(
            lines[1],
            "\"100\",\"10140\",\"Disease 10140\",2024,3,\"Missing from CDC\",1"
        );
    }

    #[test]
    fn test_statistics_csv_header() {
        let csv = to_csv(&create_test_statistics());
        let mut lines = csv.split('\n');

        assert_eq!(
            lines.next(),
            Some(
                "EventCode,EventName,TotalCases,TotalDuplicates,TotalMissingFromCDC,TotalMissingFromState,TotalWrongAttributes"
            )
        );
        assert_eq!(lines.next(), Some("\"10140\",\"Measles\",120,3,5,2,7"));
        assert_eq!(lines.count(), 2);
    }

    // ===== Table State Tests =====

    #[test]
    fn test_table_defaults() {
        let state = TableState::default();
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(state.page_index(), 0);
        assert!(state.sort().is_none());
        assert!(PAGE_SIZES.contains(&DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_sort_cycles_ascending_descending_none() {
        let mut state = TableState::default();

        state.toggle_sort(4);
        assert_eq!(state.sort_direction(4), Some(SortDirection::Ascending));
        state.toggle_sort(4);
        assert_eq!(state.sort_direction(4), Some(SortDirection::Descending));
        state.toggle_sort(4);
        assert_eq!(state.sort_direction(4), None);

        state.toggle_sort(4);
        state.toggle_sort(0);
        assert_eq!(state.sort_direction(4), None);
        assert_eq!(state.sort_direction(0), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_sort_by_week_descending() {
        let records = create_test_records();
        let mut state = TableState::default();
        state.toggle_sort(4);
        state.toggle_sort(4);

        let weeks: Vec<Option<i32>> = state.apply(&records).rows.iter().map(|r| r.mmwr_week).collect();
        assert_eq!(weeks, vec![Some(40), Some(12), Some(7), Some(3)]);
    }

    #[test]
    fn test_column_filter_only_checks_its_column() {
        let records = create_test_records();
        let mut state = TableState::default();

        // "10140" appears as an event code and inside "Disease 10140"
        state.set_column_filter(1, "10140");
        let view = state.apply(&records);
        assert_eq!(view.filtered_count, 2);
        assert_eq!(view.total_count, 4);

        state.set_column_filter(0, "31");
        let view = state.apply(&records);
        assert_eq!(view.filtered_count, 1);
        assert_eq!(view.rows[0].case_id, "31");

        state.set_column_filter(0, "");
        assert_eq!(state.column_filter(0), "");
        assert_eq!(state.apply(&records).filtered_count, 2);
    }

    #[test]
    fn test_global_filter_matches_any_column() {
        let records = create_test_records();
        let mut state = TableState::default();

        state.set_global_filter("disease 11080");
        let view = state.apply(&records);
        assert_eq!(view.filtered_count, 1);
        assert_eq!(view.rows[0].case_id, "205");

        state.set_global_filter("no such value");
        let view = state.apply(&records);
        assert!(view.rows.is_empty());
        assert_eq!(view.page_count, 1);
    }

    #[test]
    fn test_pagination() {
        let records: Vec<DiscrepancyRecord> = (0..23)
            .map(|i| record(&i.to_string(), "10140", i, 1))
            .collect();
        let mut state = TableState::default();

        let view = state.apply(&records);
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.page_count, 3);
        assert!(!view.can_previous());
        assert!(view.can_next());

        state.go_to_page(2, view.page_count);
        let view = state.apply(&records);
        assert_eq!(view.rows.len(), 3);
        assert!(view.can_previous());
        assert!(!view.can_next());

        state.go_to_page(99, view.page_count);
        assert_eq!(state.page_index(), 2);
    }

    #[test]
    fn test_page_size_changes_reset_to_first_page() {
        let records: Vec<DiscrepancyRecord> = (0..23)
            .map(|i| record(&i.to_string(), "10140", i, 1))
            .collect();
        let mut state = TableState::default();
        state.go_to_page(1, 3);

        state.set_page_size(20);
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.apply(&records).page_count, 2);

        state.set_page_size(7);
        assert_eq!(state.page_size(), 20);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = TableState::default();
        state.go_to_page(2, 3);
        state.set_global_filter("a");
        assert_eq!(state.page_index(), 0);
    }

    // ===== Report List Tests =====

    #[test]
    fn test_report_list_shows_five_then_see_more() {
        let all = summaries(8);
        let mut list = ReportList::default();

        assert_eq!(list.visible(&all).len(), 5);
        assert_eq!(list.visible(&all)[0].id, 8);
        assert!(list.has_more(&all));

        list.see_more(all.len());
        assert_eq!(list.visible(&all).len(), 8);
        assert!(!list.has_more(&all));
    }

    #[test]
    fn test_report_list_short_list_has_no_see_more() {
        let all = summaries(3);
        let list = ReportList::default();
        assert_eq!(list.visible(&all).len(), 3);
        assert!(!list.has_more(&all));
    }

    #[test]
    fn test_report_created_resets_visible_count() {
        let all = summaries(9);
        let mut list = ReportList::default();
        list.see_more(all.len());
        list.report_created();
        assert_eq!(list.visible(&all).len(), 5);
    }

    #[test]
    fn test_deleting_active_report_clears_selection() {
        let mut list = ReportList::default();
        list.select(4);
        assert!(list.is_active(4));

        list.report_deleted(4);
        assert_eq!(list.active(), None);
    }

    #[test]
    fn test_deleting_other_report_keeps_selection() {
        let mut list = ReportList::default();
        list.select(4);

        list.report_deleted(2);
        assert_eq!(list.active(), Some(4));
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_data_extraction() {
        let records = Rc::new(create_test_records());
        let loaded = DataState::Loaded(records.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &records);

        let loading: DataState<Vec<DiscrepancyRecord>> = DataState::Loading;
        assert!(loading.data().is_none());

        let error: DataState<Vec<DiscrepancyRecord>> = DataState::Error("Test error".to_string());
        assert!(error.data().is_none());
    }

    #[test]
    fn test_data_state_equality() {
        let state1 = DataState::Loaded(Rc::new(create_test_statistics()));
        let state2 = DataState::Loaded(Rc::new(create_test_statistics()));
        assert_eq!(state1, state2);

        let idle: DataState<Vec<DiseaseStatistic>> = DataState::Idle;
        assert_ne!(idle, state1);
    }
}
