use yew::prelude::*;

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod services;
pub mod utils;

use components::{Navbar, Page};
use pages::{home::Home, settings::Settings};

#[function_component(App)]
pub fn app() -> Html {
    let page = use_state(Page::default);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"CDC Data Reconciliation"}</h1>
                <Navbar current={*page} {on_navigate} />
            </header>

            <main class="app-main">
                {
                    match *page {
                        Page::Home => html! { <Home /> },
                        Page::Settings => html! { <Settings /> },
                    }
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
