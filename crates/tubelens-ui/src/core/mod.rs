//! Core, DOM-free primitives and helpers for the search page.
pub mod label_sync;
pub mod options;
pub mod ui;
