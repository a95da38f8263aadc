use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::data_state::DataState;
use crate::services::api::{ConfigField, ReconClient};

/// Fetches one named config value on mount. An empty value means it has not been set.
#[hook]
pub fn use_config_value(field: ConfigField) -> UseStateHandle<DataState<String>> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with(field, move |field| {
            let field = *field;

            spawn_local(async move {
                let result = match ReconClient::new() {
                    Ok(client) => client.get_config(field).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(value) => {
                        if value.is_empty() {
                            gloo::console::log!(format!(
                                "Fetched config, but there's no setting for {} yet.",
                                field.name()
                            ));
                        }
                        state.set(DataState::Loaded(Rc::new(value)));
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Error fetching config - {e}"));
                        state.set(DataState::Error(e.to_string()));
                    }
                }
            });

            || ()
        });
    }

    state
}
