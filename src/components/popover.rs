use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PopoverProps {
    /// Trigger element
    #[prop_or_default]
    pub children: Html,
    /// Shown next to the trigger while open
    pub content: Html,
}

/// Click-toggled popover that closes on any mousedown outside of it and
/// whenever its content is clicked.
#[function_component(Popover)]
pub fn popover(props: &PopoverProps) -> Html {
    let show = use_state(|| false);
    let wrapper_ref = use_node_ref();

    {
        let show = show.clone();
        let wrapper_ref = wrapper_ref.clone();

        use_effect_with(*show, move |is_open| {
            let listener = if *is_open {
                web_sys::window()
                    .and_then(|w| w.document())
                    .map(|document| {
                        EventListener::new(&document, "mousedown", move |event| {
                            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                            if let Some(wrapper) = wrapper_ref.cast::<Node>() {
                                if !wrapper.contains(target.as_ref()) {
                                    show.set(false);
                                }
                            }
                        })
                    })
            } else {
                None
            };

            move || drop(listener)
        });
    }

    let on_toggle = {
        let show = show.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            show.set(!*show);
        })
    };

    // Choosing anything in the panel closes it; the click goes no further
    let on_choose = {
        let show = show.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            show.set(false);
        })
    };

    html! {
        <div class="popover" ref={wrapper_ref}>
            <div class="popover-trigger" onclick={on_toggle}>
                {props.children.clone()}
            </div>
            <div class="popover-panel" hidden={!*show} onclick={on_choose}>
                {props.content.clone()}
            </div>
        </div>
    }
}
