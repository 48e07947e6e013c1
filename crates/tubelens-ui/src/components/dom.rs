//! Adapters bridging the label-sync core onto live DOM elements.

use crate::core::label_sync::{LabelTarget, ToggleSource};
use web_sys::{Element, HtmlInputElement};

/// Toggle handle backed by a real `<input type="checkbox">`.
pub(crate) struct CheckedInput(HtmlInputElement);

impl CheckedInput {
    pub(crate) const fn new(input: HtmlInputElement) -> Self {
        Self(input)
    }
}

impl ToggleSource for CheckedInput {
    fn is_checked(&self) -> bool {
        self.0.checked()
    }
}

/// Label handle writing through the element's `textContent`.
pub(crate) struct TextContent(Element);

impl TextContent {
    pub(crate) const fn new(element: Element) -> Self {
        Self(element)
    }
}

impl LabelTarget for TextContent {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}
