use crate::core::ui::{Tone, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub(crate) tone: Option<Tone>,
    #[prop_or_default]
    pub(crate) r#type: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) disabled: bool,
    // Forwarded so callers can write the label imperatively.
    #[prop_or_default]
    pub(crate) node_ref: NodeRef,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let mut classes = classes!("btn", props.class.clone());
    if let Some(tone) = tone_class("btn", props.tone) {
        classes.push(tone);
    }

    html! {
        <button
            class={classes}
            r#type={props.r#type.clone()}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
            ref={props.node_ref.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
