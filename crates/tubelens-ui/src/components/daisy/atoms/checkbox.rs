use crate::core::ui::{Tone, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CheckboxProps {
    #[prop_or_default]
    pub(crate) caption: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) id: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) name: Option<AttrValue>,
    // Initial state only; the browser owns the control afterwards.
    #[prop_or_default]
    pub(crate) default_checked: bool,
    #[prop_or_default]
    pub(crate) tone: Option<Tone>,
    #[prop_or_default]
    pub(crate) disabled: bool,
    #[prop_or_default]
    pub(crate) input_ref: NodeRef,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onchange: Callback<bool>,
}

#[function_component(Checkbox)]
pub(crate) fn checkbox(props: &CheckboxProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.checked());
            }
        })
    };

    let mut classes = classes!("checkbox", props.class.clone());
    if let Some(tone) = tone_class("checkbox", props.tone) {
        classes.push(tone);
    }

    html! {
        <label class="label cursor-pointer justify-start gap-2">
            <input
                type="checkbox"
                id={props.id.clone()}
                name={props.name.clone()}
                class={classes}
                checked={props.default_checked}
                disabled={props.disabled}
                onchange={onchange}
                ref={props.input_ref.clone()}
            />
            {props.caption.clone().map(|text| html! { <span class="label-text">{text}</span> }).unwrap_or_default()}
        </label>
    }
}
