use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::data_state::DataState;
use crate::models::{
    report::{DiscrepancyRecord, ReportId},
    statistics::DiseaseStatistic,
};
use crate::services::api::{fetch_report, fetch_statistics};

/// Handle returned by `use_report` hook
#[derive(Clone, PartialEq)]
pub struct ReportHandle {
    pub discrepancies: DataState<Vec<DiscrepancyRecord>>,
    pub statistics: DataState<Vec<DiseaseStatistic>>,
}

/// Loads the discrepancy rows and statistics of the selected report.
/// Both requests are started together; neither waits on the other.
#[hook]
pub fn use_report(report_id: Option<ReportId>) -> ReportHandle {
    let discrepancies = use_state(|| DataState::Idle);
    let statistics = use_state(|| DataState::Idle);

    {
        let discrepancies = discrepancies.clone();
        let statistics = statistics.clone();

        use_effect_with(report_id, move |report_id| {
            match *report_id {
                None => {
                    discrepancies.set(DataState::Idle);
                    statistics.set(DataState::Idle);
                }
                Some(id) => {
                    discrepancies.set(DataState::Loading);
                    statistics.set(DataState::Loading);

                    spawn_local(async move {
                        match fetch_report(id).await {
                            Ok(rows) => discrepancies.set(DataState::Loaded(Rc::new(rows))),
                            Err(e) => {
                                gloo::console::error!(format!("Unable to fetch report {id} - {e}"));
                                discrepancies.set(DataState::Error(e.to_string()));
                            }
                        }
                    });

                    spawn_local(async move {
                        match fetch_statistics(id).await {
                            Ok(rows) => statistics.set(DataState::Loaded(Rc::new(rows))),
                            Err(e) => {
                                gloo::console::error!(format!("Unable to fetch statistics {id} - {e}"));
                                statistics.set(DataState::Error(e.to_string()));
                            }
                        }
                    });
                }
            }

            || () // Cleanup
        });
    }

    ReportHandle {
        discrepancies: (*discrepancies).clone(),
        statistics: (*statistics).clone(),
    }
}
