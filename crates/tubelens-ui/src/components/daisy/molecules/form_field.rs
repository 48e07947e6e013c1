use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FormFieldProps {
    pub(crate) caption: AttrValue,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Children,
}

/// Caption-over-control row used for every labelled form input.
#[function_component(FormField)]
pub(crate) fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <label class={classes!("form-control", "w-full", props.class.clone())}>
            <span class="label">
                <span class="label-text">{props.caption.clone()}</span>
            </span>
            { for props.children.iter() }
        </label>
    }
}
