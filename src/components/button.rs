use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_else(|| AttrValue::from("button"))]
    pub button_type: AttrValue,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={props.button_type.clone()}
            class={classes!("btn", props.class.clone())}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            {&props.text}
        </button>
    }
}
