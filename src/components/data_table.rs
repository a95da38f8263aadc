use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::Config;
use crate::models::table::{PAGE_SIZES, SortDirection, TableRow, TableState};
use crate::utils::debounce::debounce;

pub enum TableAction {
    SetGlobalFilter(String),
    SetColumnFilter(usize, String),
    ToggleSort(usize),
    SetPageSize(usize),
    GoToPage { index: usize, page_count: usize },
}

impl Reducible for TableState {
    type Action = TableAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TableAction::SetGlobalFilter(value) => next.set_global_filter(value),
            TableAction::SetColumnFilter(column, value) => next.set_column_filter(column, value),
            TableAction::ToggleSort(column) => next.toggle_sort(column),
            TableAction::SetPageSize(size) => next.set_page_size(size),
            TableAction::GoToPage { index, page_count } => next.go_to_page(index, page_count),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<R: PartialEq> {
    pub rows: Rc<Vec<R>>,
}

/// Sortable, filterable, paginated table over any [`TableRow`].
#[function_component(DataTable)]
pub fn data_table<R>(props: &DataTableProps<R>) -> Html
where
    R: TableRow + PartialEq + 'static,
{
    let table = use_reducer(TableState::default);
    let filter_text = use_state(String::new);

    let apply_global_filter = {
        let dispatcher = table.dispatcher();
        use_memo((), move |_| {
            debounce(
                Callback::from(move |value: String| {
                    dispatcher.dispatch(TableAction::SetGlobalFilter(value));
                }),
                Config::FILTER_DEBOUNCE_MS,
            )
        })
    };

    let on_global_input = {
        let filter_text = filter_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            filter_text.set(value.clone());
            apply_global_filter.emit(value);
        })
    };

    let on_page_size = {
        let table = table.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<usize>() {
                table.dispatch(TableAction::SetPageSize(size));
            }
        })
    };

    let view = table.apply(props.rows.as_slice());
    let page_count = view.page_count;

    let go_to = |index: usize| {
        let table = table.clone();
        Callback::from(move |_: MouseEvent| {
            table.dispatch(TableAction::GoToPage { index, page_count });
        })
    };

    let header = R::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let onclick = {
                let table = table.clone();
                Callback::from(move |_: MouseEvent| table.dispatch(TableAction::ToggleSort(i)))
            };
            let indicator = match table.sort_direction(i) {
                Some(SortDirection::Ascending) => " ▲",
                Some(SortDirection::Descending) => " ▼",
                None => "",
            };
            html! {
                <th class="sortable" {onclick}>{column.label}{indicator}</th>
            }
        })
        .collect::<Html>();

    let column_filters = R::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let oninput = {
                let table = table.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    table.dispatch(TableAction::SetColumnFilter(i, input.value()));
                })
            };
            html! {
                <th>
                    <input
                        class="column-filter"
                        type="text"
                        placeholder={format!("Filter {}", column.label)}
                        value={table.column_filter(i).to_string()}
                        {oninput}
                    />
                </th>
            }
        })
        .collect::<Html>();

    let body = view
        .rows
        .iter()
        .map(|row| {
            html! {
                <tr>
                    { row.cells().into_iter().map(|cell| html! { <td>{cell.to_string()}</td> }).collect::<Html>() }
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="data-table">
            <div class="table-toolbar">
                <input
                    class="global-filter"
                    type="search"
                    placeholder="Search all columns..."
                    value={(*filter_text).clone()}
                    oninput={on_global_input}
                />
                <span class="table-count">
                    {format!("{} of {} rows", view.filtered_count, view.total_count)}
                </span>
            </div>

            <table>
                <thead>
                    <tr>{header}</tr>
                    <tr class="filter-row">{column_filters}</tr>
                </thead>
                <tbody>
                    if view.rows.is_empty() {
                        <tr>
                            <td class="empty" colspan={R::COLUMNS.len().to_string()}>{"No matching rows"}</td>
                        </tr>
                    } else {
                        {body}
                    }
                </tbody>
            </table>

            <div class="table-pagination">
                <button onclick={go_to(0)} disabled={!view.can_previous()}>{"«"}</button>
                <button onclick={go_to(view.page_index.saturating_sub(1))} disabled={!view.can_previous()}>{"‹"}</button>
                <span>{format!("Page {} of {}", view.page_index + 1, page_count)}</span>
                <button onclick={go_to(view.page_index + 1)} disabled={!view.can_next()}>{"›"}</button>
                <button onclick={go_to(page_count - 1)} disabled={!view.can_next()}>{"»"}</button>
                <select onchange={on_page_size} aria-label="Rows per page">
                    {
                        PAGE_SIZES.iter().map(|size| {
                            let selected = *size == table.page_size();
                            html! {
                                <option value={size.to_string()} {selected}>{format!("Show {size}")}</option>
                            }
                        }).collect::<Html>()
                    }
                </select>
            </div>
        </div>
    }
}
