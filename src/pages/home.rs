use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{
    button::Button, create_report::CreateReport, modal::Modal, popover::Popover, report::Report,
    status::Status,
};
use crate::hooks::data_state::DataState;
use crate::hooks::use_reports::use_reports;
use crate::models::report::{ReportId, ReportSummary};
use crate::models::report_list::ReportList;
use crate::services::api::ReconClient;

pub enum ListAction {
    Select(ReportId),
    SeeMore(usize),
    Deleted(ReportId),
    Created,
}

impl Reducible for ReportList {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ListAction::Select(id) => next.select(id),
            ListAction::SeeMore(total) => next.see_more(total),
            ListAction::Deleted(id) => next.report_deleted(id),
            ListAction::Created => next.report_created(),
        }
        next.into()
    }
}

/// Report being acted on from its context menu.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PendingAction {
    Rename(ReportId),
    Delete(ReportId),
}

const MENU_OPTIONS: [&str; 2] = ["Rename", "Delete"];

#[function_component(Home)]
pub fn home() -> Html {
    let reports = use_reports();
    let list = use_reducer(ReportList::default);
    let create_open = use_state(|| false);
    let pending = use_state(|| None::<PendingAction>);
    let rename_name = use_state(String::new);

    let on_created = {
        let create_open = create_open.clone();
        let list = list.dispatcher();
        let refresh = reports.refresh.clone();
        Callback::from(move |()| {
            create_open.set(false);
            list.dispatch(ListAction::Created);
            refresh.emit(());
        })
    };

    let close_pending = {
        let pending = pending.clone();
        Callback::from(move |()| pending.set(None))
    };

    let on_confirm_delete = {
        let pending = pending.clone();
        let list = list.dispatcher();
        let refresh = reports.refresh.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(PendingAction::Delete(id)) = *pending else {
                return;
            };
            pending.set(None);

            let list = list.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let result = match ReconClient::new() {
                    Ok(client) => client.delete_report(id).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(()) => {
                        list.dispatch(ListAction::Deleted(id));
                        refresh.emit(());
                    }
                    Err(e) => gloo::console::error!(format!("Failed to delete report {id} - {e}")),
                }
            });
        })
    };

    let on_rename_input = {
        let rename_name = rename_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            rename_name.set(input.value());
        })
    };

    let on_rename_submit = {
        let pending = pending.clone();
        let rename_name = rename_name.clone();
        let refresh = reports.refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(PendingAction::Rename(id)) = *pending else {
                return;
            };
            pending.set(None);
            let new_name = (*rename_name).clone();
            rename_name.set(String::new());

            // The backend has no rename endpoint yet
            gloo::dialogs::alert(&format!("Renaming Report {id} to \"{new_name}\""));
            refresh.emit(());
        })
    };

    let sidebar = match &reports.state {
        DataState::Loaded(summaries) => {
            let cards = list
                .visible(summaries)
                .iter()
                .map(|summary| summary_card(summary, &list, &pending))
                .collect::<Html>();

            let see_more = list.has_more(summaries).then(|| {
                let list = list.dispatcher();
                let total = summaries.len();
                let onclick =
                    Callback::from(move |_: MouseEvent| list.dispatch(ListAction::SeeMore(total)));
                html! { <Button text="See More" class="see-more" {onclick} /> }
            });

            html! { <>{cards}{see_more.unwrap_or_default()}</> }
        }
        DataState::Loading => html! { <Status loading={true} label="Loading reports..." /> },
        DataState::Error(msg) => html! { <Status error={AttrValue::from(msg.clone())} /> },
        DataState::Idle => html! {},
    };

    let open_create = {
        let create_open = create_open.clone();
        Callback::from(move |_: MouseEvent| create_open.set(true))
    };
    let close_create = {
        let create_open = create_open.clone();
        Callback::from(move |()| create_open.set(false))
    };
    let cancel = {
        let close_pending = close_pending.clone();
        Callback::from(move |_: MouseEvent| close_pending.emit(()))
    };

    html! {
        <>
            <Modal is_open={*create_open} on_close={close_create}>
                <CreateReport on_done={on_created} />
            </Modal>

            <Modal
                is_open={matches!(*pending, Some(PendingAction::Delete(_)))}
                on_close={close_pending.clone()}
            >
                if let Some(PendingAction::Delete(id)) = *pending {
                    <div class="dialog">
                        <h2>{format!("Are you sure you wish to delete Report {id}?")}</h2>
                        <p>{"Any archived CSVs are not deleted."}</p>
                        <div class="dialog-actions">
                            <Button text="Cancel" onclick={cancel.clone()} />
                            <Button text="Delete" class="danger" onclick={on_confirm_delete} />
                        </div>
                    </div>
                }
            </Modal>

            <Modal
                is_open={matches!(*pending, Some(PendingAction::Rename(_)))}
                on_close={close_pending}
            >
                if let Some(PendingAction::Rename(id)) = *pending {
                    <form class="dialog" onsubmit={on_rename_submit}>
                        <h2>{format!("Enter the new name for Report {id}:")}</h2>
                        <input
                            type="text"
                            id="new_name"
                            placeholder="Enter the new name"
                            value={(*rename_name).clone()}
                            oninput={on_rename_input}
                        />
                        <div class="dialog-actions">
                            <Button text="Cancel" onclick={cancel} />
                            <Button text="Rename" button_type="submit" />
                        </div>
                    </form>
                }
            </Modal>

            <div class="home">
                <aside class="sidebar">
                    <Button text="Create New Report" onclick={open_create} />
                    {sidebar}
                </aside>
                <section class="report-pane">
                    <Report report_id={list.active()} />
                </section>
            </div>
        </>
    }
}

fn summary_card(
    summary: &ReportSummary,
    list: &UseReducerHandle<ReportList>,
    pending: &UseStateHandle<Option<PendingAction>>,
) -> Html {
    let id = summary.id;
    let is_active = list.is_active(id);

    let onclick = {
        let list = list.dispatcher();
        Callback::from(move |_: MouseEvent| list.dispatch(ListAction::Select(id)))
    };

    let menu = MENU_OPTIONS
        .iter()
        .map(|option| {
            let action = if *option == "Delete" {
                PendingAction::Delete(id)
            } else {
                PendingAction::Rename(id)
            };
            let onclick = {
                let pending = pending.clone();
                Callback::from(move |_: MouseEvent| pending.set(Some(action)))
            };
            html! { <div class="menu-option" {onclick}>{*option}</div> }
        })
        .collect::<Html>();

    html! {
        <div
            key={id.to_string()}
            class={classes!("summary-card", is_active.then_some("active"))}
            {onclick}
        >
            <h2>
                {format!("Report {id}")}
                <span class="summary-menu">
                    <Popover content={menu}>
                        <span class="menu-trigger">{"⋯"}</span>
                    </Popover>
                </span>
            </h2>
            <p>{format!("Discrepancies: {}", summary.number_of_discrepancies)}</p>
            <p>{summary.created_label()}</p>
        </div>
    }
}
