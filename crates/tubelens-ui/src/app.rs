//! Application shell and wasm entry point.

use crate::components::search_form::SearchForm;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use gloo::utils::window;
use yew::prelude::*;

#[function_component(TubelensApp)]
fn tubelens_app() -> Html {
    let locale = use_memo(|_| detect_locale(), ());
    let bundle = use_memo(|locale: &LocaleCode| TranslationBundle::new(*locale), *locale);

    html! {
        <main class="min-h-screen bg-base-200 flex flex-col items-center gap-6 p-8">
            <header class="text-center">
                <h1 class="text-3xl font-bold">{bundle.text("app.title", "Tubelens")}</h1>
                <p class="text-base-content/70">
                    {bundle.text("app.tagline", "Search YouTube videos and export the results")}
                </p>
            </header>
            <SearchForm bundle={(*bundle).clone()} />
        </main>
    }
}

fn detect_locale() -> LocaleCode {
    window()
        .navigator()
        .language()
        .and_then(|tag| LocaleCode::from_lang_tag(&tag))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Mount the application at `#root`, falling back to `<body>`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<TubelensApp>::with_root(root).render();
    } else {
        yew::Renderer::<TubelensApp>::new().render();
    }
}
