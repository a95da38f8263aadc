use std::rc::Rc;
use yew::prelude::*;

use super::button::Button;
use super::data_table::DataTable;
use super::status::Status;
use crate::hooks::data_state::DataState;
use crate::hooks::use_report::use_report;
use crate::models::{
    report::{DiscrepancyRecord, ReportId},
    statistics::{DiseaseStatistic, StatisticsTotals},
    table::TableRow,
};
use crate::utils::csv::{RESULTS_FILE, STATISTICS_FILE, to_csv};
use crate::utils::download::download_csv;

#[derive(Properties, PartialEq)]
pub struct ReportProps {
    pub report_id: Option<ReportId>,
}

fn download_callback<R: TableRow + 'static>(
    file_name: &'static str,
    rows: Rc<Vec<R>>,
) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        if let Err(e) = download_csv(file_name, &to_csv(rows.as_slice())) {
            gloo::console::error!(format!("Failed to download {file_name} - {e}"));
        }
    })
}

#[function_component(Report)]
pub fn report(props: &ReportProps) -> Html {
    let handle = use_report(props.report_id);

    let Some(report_id) = props.report_id else {
        return html! {
            <div class="report-placeholder">
                <p>{"Select a report to view its discrepancies."}</p>
            </div>
        };
    };

    let results = match &handle.discrepancies {
        DataState::Idle => return html! {},
        DataState::Loading => return html! { <Status loading={true} label="Loading report..." /> },
        DataState::Error(msg) => return html! { <Status error={AttrValue::from(msg.clone())} /> },
        DataState::Loaded(results) => results.clone(),
    };

    html! {
        <div class="report">
            <div class="report-header">
                <h2>{"Results"}</h2>
                <h3>{format!("Number of Cases Different: {}", results.len())}</h3>
            </div>

            if let Some(statistics) = handle.statistics.data() {
                <StatisticsPanel key={report_id.to_string()} statistics={statistics.clone()} />
            }

            <div class="report-actions">
                <Button
                    text="Download CSV"
                    onclick={download_callback(RESULTS_FILE, results.clone())}
                />
            </div>

            <DataTable<DiscrepancyRecord> key={report_id.to_string()} rows={results} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatisticsPanelProps {
    statistics: Rc<Vec<DiseaseStatistic>>,
}

/// Totals table with a toggle to the per-disease table. Keyed by report id,
/// so the toggle and table state start fresh for each report.

#[function_component(StatisticsPanel)]
fn statistics_panel(props: &StatisticsPanelProps) -> Html {
    let show_disease_stats = use_state(|| false);
    let totals = use_memo(props.statistics.clone(), |rows| StatisticsTotals::from_rows(rows));

    let on_toggle = {
        let show = show_disease_stats.clone();
        Callback::from(move |_: MouseEvent| show.set(!*show))
    };
    let toggle_label = if *show_disease_stats {
        "Hide Disease Specific Stats"
    } else {
        "Show Disease Specific Stats"
    };

    html! {
        <div class="statistics-panel">
            <div class="report-actions">
                <Button text={toggle_label} onclick={on_toggle} />
                <Button
                    text="Download Statistics CSV"
                    onclick={download_callback(STATISTICS_FILE, props.statistics.clone())}
                />
            </div>

            if *show_disease_stats {
                <DataTable<DiseaseStatistic> rows={props.statistics.clone()} />
            } else {
                <table class="totals-table">
                    <thead>
                        <tr>
                            <th>{"Diseases"}</th>
                            <th>{"Total Cases"}</th>
                            <th>{"Total Duplicates"}</th>
                            <th>{"Total Missing From CDC"}</th>
                            <th>{"Total Missing From State"}</th>
                            <th>{"Total Wrong Attributes"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr>
                            <td>{totals.diseases.to_string()}</td>
                            <td>{totals.total_cases.to_string()}</td>
                            <td>{totals.total_duplicates.to_string()}</td>
                            <td>{totals.total_missing_from_cdc.to_string()}</td>
                            <td>{totals.total_missing_from_state.to_string()}</td>
                            <td>{totals.total_wrong_attributes.to_string()}</td>
                        </tr>
                    </tbody>
                </table>
            }
        </div>
    }
}
