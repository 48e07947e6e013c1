//! Pure helpers that shape form option lists for the search view.

use crate::core::label_sync::LabelPair;
use crate::i18n::TranslationBundle;
use tubelens_api_models::{SearchOrder, VideoType};

/// Value/label pair rendered as a `<select>` option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectChoice {
    /// Wire value posted by the form.
    pub value: &'static str,
    /// Localized caption shown to the user.
    pub label: String,
}

/// Localized option list for the video-type select.
#[must_use]
pub fn video_type_choices(bundle: &TranslationBundle) -> Vec<SelectChoice> {
    VideoType::all()
        .iter()
        .map(|kind| SelectChoice {
            value: kind.as_str(),
            label: bundle.text(&format!("video_type.{}", kind.as_str()), kind.as_str()),
        })
        .collect()
}

/// Localized option list for the result-order select.
#[must_use]
pub fn order_choices(bundle: &TranslationBundle) -> Vec<SelectChoice> {
    SearchOrder::all()
        .iter()
        .map(|order| SelectChoice {
            value: order.as_str(),
            label: bundle.text(&format!("order.{}", order.as_str()), order.as_str()),
        })
        .collect()
}

/// Submit-button labels for the current locale.
#[must_use]
pub fn submit_labels(bundle: &TranslationBundle) -> LabelPair {
    LabelPair {
        text_on: bundle.text("form.submit_sheets", "Export to spreadsheet"),
        text_off: bundle.text("form.submit_csv", "Download CSV"),
    }
}
