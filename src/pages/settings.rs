use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{button::Button, status::Status};
use crate::hooks::data_state::DataState;
use crate::hooks::use_config_value::use_config_value;
use crate::models::error::AppError;
use crate::services::api::{ConfigField, ReconClient};

#[derive(Debug, Clone, PartialEq)]
enum Feedback {
    Saved,
    Failed(String),
}

async fn save_archive_path(value: String, password: String) -> Result<(), AppError> {
    ReconClient::new()?
        .set_config(ConfigField::ArchivePath, &value, &password)
        .await
}

#[function_component(Settings)]
pub fn settings() -> Html {
    let archive_path = use_config_value(ConfigField::ArchivePath);
    let path_input = use_state(String::new);
    let password = use_state(String::new);
    let feedback = use_state(|| None::<Feedback>);

    let on_path_input = {
        let path_input = path_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            path_input.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let archive_path = archive_path.clone();
        let path_input = path_input.clone();
        let password = password.clone();
        let feedback = feedback.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = (*path_input).clone();
            let secret = (*password).clone();
            password.set(String::new());
            gloo::console::log!(format!("Submitting archive path {value}"));

            let archive_path = archive_path.clone();
            let feedback = feedback.clone();
            spawn_local(async move {
                match save_archive_path(value.clone(), secret).await {
                    Ok(()) => {
                        gloo::console::log!("Config submitted successfully!");
                        archive_path.set(DataState::Loaded(Rc::new(value)));
                        feedback.set(Some(Feedback::Saved));
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Error submitting config - {e}"));
                        feedback.set(Some(Feedback::Failed(e.to_string())));
                    }
                }
            });
        })
    };

    let current = match &*archive_path {
        DataState::Loaded(path) if path.is_empty() => {
            html! { <em>{"No archive folder has been set yet."}</em> }
        }
        DataState::Loaded(path) => html! { <code>{path.to_string()}</code> },
        DataState::Loading | DataState::Idle => html! { <Status loading={true} label="Loading..." /> },
        DataState::Error(msg) => html! { <Status error={AttrValue::from(msg.clone())} /> },
    };

    let message = match &*feedback {
        Some(Feedback::Saved) => html! {
            <p class="feedback success">{"Archive path updated."}</p>
        },
        Some(Feedback::Failed(msg)) => html! {
            <p class="feedback error">{format!("Failed to update archive path: {msg}")}</p>
        },
        None => html! {},
    };

    html! {
        <div class="settings">
            <h2>{"Configure settings here:"}</h2>
            <form {onsubmit}>
                <label for="archive_path">{"Current archive folder path: "}{current}</label>
                <input
                    type="text"
                    id="archive_path"
                    placeholder="New archive folder path"
                    value={(*path_input).clone()}
                    oninput={on_path_input}
                />
                <label for="password">{"Password:"}</label>
                <input
                    type="password"
                    id="password"
                    value={(*password).clone()}
                    oninput={on_password_input}
                />
                <Button text="Submit" button_type="submit" />
                {message}
            </form>
        </div>
    }
}
