//! Search form hosting the export-mode toggle.
//!
//! The form posts natively to the search endpoint; the only scripted
//! behavior is the submit label tracking the spreadsheet checkbox.

use crate::components::daisy::atoms::{Button, Checkbox, Select, TextInput};
use crate::components::daisy::molecules::FormField;
use crate::components::dom::{CheckedInput, TextContent};
use crate::core::label_sync::{ToggleLabelSync, submit_label};
use crate::core::options::{order_choices, submit_labels, video_type_choices};
use crate::core::ui::Tone;
use crate::i18n::TranslationBundle;
use gloo::console;
use tubelens_api_models::{DEFAULT_MAX_RESULTS, SearchOrder, VideoType, fields};
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchFormProps {
    pub(crate) bundle: TranslationBundle,
}

#[function_component(SearchForm)]
pub(crate) fn search_form(props: &SearchFormProps) -> Html {
    let checkbox_ref = use_node_ref();
    let submit_ref = use_node_ref();
    let sync = use_mut_ref(|| None::<ToggleLabelSync<TextContent>>);

    let labels = submit_labels(&props.bundle);

    {
        let checkbox_ref = checkbox_ref.clone();
        let submit_ref = submit_ref.clone();
        let sync = sync.clone();
        let labels = labels.clone();
        use_effect_with_deps(
            move |_| {
                let source = checkbox_ref.cast::<HtmlInputElement>().map(CheckedInput::new);
                let target = submit_ref.cast::<Element>().map(TextContent::new);
                match ToggleLabelSync::initialize(source.as_ref(), target, labels) {
                    Ok(controller) => *sync.borrow_mut() = Some(controller),
                    Err(err) => console::error!("submit label sync unavailable", err.to_string()),
                }
                || ()
            },
            (),
        );
    }

    let on_toggle = {
        let sync = sync.clone();
        Callback::from(move |checked: bool| {
            if let Some(controller) = sync.borrow_mut().as_mut() {
                controller.set_enabled(checked);
            }
        })
    };

    let bundle = &props.bundle;
    html! {
        <form
            method="post"
            action="/search"
            class="card bg-base-100 shadow-xl w-full max-w-2xl"
        >
            <fieldset class="fieldset card-body gap-4">
                <legend class="fieldset-legend">{bundle.text("form.legend", "Video search")}</legend>
                <FormField caption={bundle.text("form.genre", "Genre")}>
                    <TextInput
                        name={fields::GENRE}
                        placeholder={bundle.text("form.genre_placeholder", "Let AI pick keywords for a genre")}
                    />
                </FormField>
                <FormField caption={bundle.text("form.query", "Search keywords")}>
                    <TextInput
                        name={fields::QUERY}
                        placeholder={bundle.text("form.query_placeholder", "Keywords to search for")}
                    />
                </FormField>
                <div class="grid grid-cols-2 gap-4">
                    <FormField caption={bundle.text("form.video_type", "Video type")}>
                        <Select
                            name={fields::VIDEO_TYPE}
                            choices={video_type_choices(bundle)}
                            selected={VideoType::Any.as_str()}
                        />
                    </FormField>
                    <FormField caption={bundle.text("form.order", "Sort order")}>
                        <Select
                            name={fields::ORDER}
                            choices={order_choices(bundle)}
                            selected={SearchOrder::Relevance.as_str()}
                        />
                    </FormField>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <FormField caption={bundle.text("form.published_after", "Published after")}>
                        <TextInput name={fields::PUBLISHED_AFTER} input_type="date" />
                    </FormField>
                    <FormField caption={bundle.text("form.published_before", "Published before")}>
                        <TextInput name={fields::PUBLISHED_BEFORE} input_type="date" />
                    </FormField>
                </div>
                <FormField caption={bundle.text("form.max_results", "Max results per keyword")}>
                    <TextInput
                        name={fields::MAX_RESULTS}
                        input_type="number"
                        min="1"
                        default_value={DEFAULT_MAX_RESULTS.to_string()}
                    />
                </FormField>
                <Checkbox
                    id="use_sheets_integration"
                    name={fields::USE_SHEETS}
                    caption={bundle.text("form.use_sheets", "Export results to Google Sheets")}
                    tone={Tone::Primary}
                    input_ref={checkbox_ref}
                    onchange={on_toggle}
                />
                // Unchecked is the first-paint state; initialize rewrites
                // the text if the restored control disagrees.
                <Button
                    r#type="submit"
                    tone={Tone::Primary}
                    node_ref={submit_ref}
                    class="w-full"
                >
                    { submit_label(false, &labels).to_string() }
                </Button>
            </fieldset>
        </form>
    }
}
