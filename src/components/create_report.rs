use chrono::{Datelike, Local};
use gloo::file::File;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlOptionElement, HtmlSelectElement};
use yew::prelude::*;

use super::button::Button;
use super::error_dialog::ErrorDialog;
use crate::models::error::AppError;
use crate::models::submission::{
    CompareAttribute, ReportForm, ReportMode, ReportSubmission, UploadFile, year_options,
};
use crate::services::api::ReconClient;

#[derive(Properties, PartialEq)]
pub struct CreateReportProps {
    /// Called once the backend has accepted the report
    pub on_done: Callback<()>,
}

fn current_year() -> i32 {
    Local::now().year()
}

fn selected_file(e: &Event) -> Option<File> {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.files().and_then(|files| files.get(0)).map(File::from)
}

fn selected_attributes(e: &Event) -> Vec<CompareAttribute> {
    let select: HtmlSelectElement = e.target_unchecked_into();
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
        .filter_map(|option| option.value().parse().ok())
        .collect()
}

async fn read_upload(file: &File) -> Result<UploadFile, AppError> {
    let bytes = gloo::file::futures::read_as_bytes(file)
        .await
        .map_err(|e| AppError::DataError(format!("Failed to read {}: {e}", file.name())))?;
    Ok(UploadFile::new(file.name(), bytes))
}

/// Reads the chosen files into memory so they can be sent as multipart parts.
async fn read_files(
    submission: ReportSubmission<File>,
) -> Result<ReportSubmission<UploadFile>, AppError> {
    Ok(match submission {
        ReportSubmission::Automatic {
            year,
            cdc_file,
            cdc_filter,
            attributes,
        } => ReportSubmission::Automatic {
            year,
            cdc_file: read_upload(&cdc_file).await?,
            cdc_filter,
            attributes,
        },
        ReportSubmission::Manual {
            state_file,
            cdc_file,
            cdc_filter,
        } => ReportSubmission::Manual {
            state_file: read_upload(&state_file).await?,
            cdc_file: read_upload(&cdc_file).await?,
            cdc_filter,
        },
    })
}

async fn submit(submission: ReportSubmission<File>) -> Result<(), AppError> {
    let submission = read_files(submission).await?;
    ReconClient::new()?.create_report(submission).await
}

#[function_component(CreateReport)]
pub fn create_report(props: &CreateReportProps) -> Html {
    let form = use_state(ReportForm::<File>::default);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let years = use_memo((), |_| year_options(current_year()));

    // Every field edit clones the form, applies the change and stores it back
    let update = |apply: fn(&mut ReportForm<File>, &Event)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            apply(&mut next, &e);
            form.set(next);
        })
    };

    let on_mode = update(|form, e| {
        let input: HtmlInputElement = e.target_unchecked_into();
        form.mode = if input.checked() {
            ReportMode::Automatic
        } else {
            ReportMode::Manual
        };
    });
    let on_cdc_filter = update(|form, e| {
        let input: HtmlInputElement = e.target_unchecked_into();
        form.cdc_filter = input.checked();
    });
    let on_cdc_file = update(|form, e| form.cdc_file = selected_file(e));
    let on_state_file = update(|form, e| form.state_file = selected_file(e));
    let on_year = update(|form, e| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        form.year = select.value().parse().ok();
    });
    let on_attributes = update(|form, e| form.attributes = selected_attributes(e));

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_done = props.on_done.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let submission = match form.validate(current_year()).map_err(AppError::from) {
                Ok(submission) => submission,
                Err(e) => {
                    gloo::console::error!(format!("Report not submitted: {e}"));
                    return;
                }
            };

            let error = error.clone();
            let submitting = submitting.clone();
            let on_done = on_done.clone();
            submitting.set(true);

            spawn_local(async move {
                match submit(submission).await {
                    Ok(()) => {
                        gloo::console::log!("Report created successfully!");
                        on_done.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Error creating report - {e}"));
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_error_close = {
        let error = error.clone();
        Callback::from(move |()| error.set(None))
    };

    let is_automatic = form.mode == ReportMode::Automatic;
    let selected_year = form.year.map(|y| y.to_string()).unwrap_or_default();

    let attribute_picker = html! {
        <>
            <label for="attributes" class="field-label">{"Select Attributes to Compare:"}</label>
            <select id="attributes" class="attribute-select" multiple={true} onchange={on_attributes}>
                {
                    CompareAttribute::all().iter().map(|attribute| {
                        let selected = form.attributes.contains(attribute);
                        html! {
                            <option value={attribute.name()} {selected}>{attribute.name()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
        </>
    };

    html! {
        <div class="create-report">
            if let Some(message) = &*error {
                <ErrorDialog
                    title="Error Creating Report"
                    message={message.clone()}
                    on_close={on_error_close}
                />
            }
            <form {onsubmit}>
                <h2>{"Create New Report"}</h2>

                <label class="checkbox">
                    <input type="checkbox" checked={is_automatic} onchange={on_mode} />
                    {"Use Automatic Report"}
                </label>
                <hr />

                <label for="cdc_file" class="field-label">
                    {"Upload CDC "}<em>{".csv"}</em>{" File:"}
                </label>
                <input type="file" id="cdc_file" accept=".csv" onchange={on_cdc_file} />
                <hr />

                if is_automatic {
                    <label for="year" class="field-label">{"Specify Year to Query From:"}</label>
                    <select id="year" class="year-select" onchange={on_year}>
                        <option value="" selected={selected_year.is_empty()}>{"Select a Year"}</option>
                        {
                            years.iter().map(|year| {
                                let value = year.to_string();
                                let selected = value == selected_year;
                                html! { <option {value} {selected}>{year.to_string()}</option> }
                            }).collect::<Html>()
                        }
                    </select>
                    {attribute_picker}
                } else {
                    <label for="state_file" class="field-label">
                        {"Upload State "}<em>{".csv"}</em>{" File:"}
                    </label>
                    <input type="file" id="state_file" accept=".csv" onchange={on_state_file} />
                }
                <hr />

                <label class="checkbox">
                    <input type="checkbox" checked={form.cdc_filter} onchange={on_cdc_filter} />
                    {"Compare Existing Diseases in CDC Only"}
                </label>

                <div class="form-actions">
                    <Button
                        text={if *submitting { "Submitting..." } else { "Submit" }}
                        button_type="submit"
                        disabled={*submitting}
                    />
                </div>
            </form>
        </div>
    }
}
