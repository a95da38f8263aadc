use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::data_state::DataState;
use crate::models::report::ReportSummary;
use crate::services::api::fetch_reports;

/// Handle returned by `use_reports` hook
#[derive(Clone, PartialEq)]
pub struct ReportsHandle {
    pub state: DataState<Vec<ReportSummary>>,
    pub refresh: Callback<()>,
}

/// Fetches the report list on mount and again whenever `refresh` is emitted.
#[hook]
pub fn use_reports() -> ReportsHandle {
    let state = use_state(|| DataState::Loading);
    let trigger = use_state(|| 0u32);
    let counter = use_mut_ref(|| 0u32);

    {
        let state = state.clone();

        use_effect_with(*trigger, move |_| {
            spawn_local(async move {
                match fetch_reports().await {
                    Ok(reports) => state.set(DataState::Loaded(Rc::new(reports))),
                    Err(e) => {
                        gloo::console::error!(format!("Error fetching report summaries - {e}"));
                        state.set(DataState::Error(e.to_string()));
                    }
                }
            });

            || ()
        });
    }

    let refresh = Callback::from(move |()| {
        let mut count = counter.borrow_mut();
        *count = count.wrapping_add(1);
        trigger.set(*count);
    });

    ReportsHandle {
        state: (*state).clone(),
        refresh,
    }
}
