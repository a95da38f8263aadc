use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Settings,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Settings => "Settings",
        }
    }

    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::Settings]
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="navbar">
            {
                Page::all().iter().map(|page| {
                    let page = *page;
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_navigate.emit(page);
                        })
                    };
                    let class = if page == props.current { "nav-link active" } else { "nav-link" };
                    html! {
                        <a href="#" {class} {onclick}>{page.title()}</a>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
