//! Yew components for the search page.
pub(crate) mod daisy;
pub(crate) mod dom;
pub(crate) mod search_form;
