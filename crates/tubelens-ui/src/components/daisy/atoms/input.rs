use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TextInputProps {
    #[prop_or_default]
    pub(crate) id: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) name: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) input_type: Option<AttrValue>,
    // Initial value only; the form submits whatever the user typed.
    #[prop_or_default]
    pub(crate) default_value: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) min: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(TextInput)]
pub(crate) fn text_input(props: &TextInputProps) -> Html {
    html! {
        <input
            class={classes!("input", "input-bordered", "w-full", props.class.clone())}
            type={props.input_type.clone().unwrap_or_else(|| AttrValue::from("text"))}
            id={props.id.clone()}
            name={props.name.clone()}
            value={props.default_value.clone()}
            placeholder={props.placeholder.clone()}
            min={props.min.clone()}
        />
    }
}
