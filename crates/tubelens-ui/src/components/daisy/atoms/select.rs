use crate::core::options::SelectChoice;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectProps {
    #[prop_or_default]
    pub(crate) id: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) name: Option<AttrValue>,
    pub(crate) choices: Vec<SelectChoice>,
    #[prop_or_default]
    pub(crate) selected: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(Select)]
pub(crate) fn select(props: &SelectProps) -> Html {
    html! {
        <select
            class={classes!("select", "select-bordered", "w-full", props.class.clone())}
            id={props.id.clone()}
            name={props.name.clone()}
        >
            {for props.choices.iter().map(|choice| {
                let selected = props
                    .selected
                    .as_ref()
                    .is_some_and(|value| value.as_str() == choice.value);
                html! {
                    <option value={choice.value} selected={selected}>{choice.label.clone()}</option>
                }
            })}
        </select>
    }
}
