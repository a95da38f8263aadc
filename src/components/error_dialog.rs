use super::button::Button;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDialogProps {
    pub title: AttrValue,
    pub message: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(ErrorDialog)]
pub fn error_dialog(props: &ErrorDialogProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            <div class="error-overlay" />
            <div class="error-dialog" role="alertdialog">
                <h3>{&props.title}</h3>
                <p>{&props.message}</p>
                <Button text="Close" {onclick} />
            </div>
        </>
    }
}
