//! Keeps the submit button's label in sync with the export-mode toggle.
//!
//! The page previously carried two competing renditions of this behavior
//! (a framework binding and a direct DOM listener); this module is the
//! single remaining implementation. Element handles are injected through
//! [`ToggleLabelSync::initialize`], so the controller can be exercised
//! without a live page.

use thiserror::Error;

/// Read side of a boolean toggle control (an element with a checked state).
pub trait ToggleSource {
    /// Current checked state of the control.
    fn is_checked(&self) -> bool;
}

/// Write side of a text-displaying element.
pub trait LabelTarget {
    /// Replace the element's visible text.
    fn set_text(&mut self, text: &str);
}

/// Fixed label strings for the two toggle states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelPair {
    /// Label shown while the toggle is checked.
    pub text_on: String,
    /// Label shown while the toggle is unchecked.
    pub text_off: String,
}

/// Failures resolving the controls backing the sync.
///
/// A missing control would leave stale button text with no recovery path,
/// so callers must surface this rather than drop it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The toggle control reference was absent.
    #[error("toggle control is missing")]
    MissingToggle,
    /// The label target reference was absent.
    #[error("label target is missing")]
    MissingLabel,
}

/// Derive the label for a toggle state.
#[must_use]
pub fn submit_label(enabled: bool, labels: &LabelPair) -> &str {
    if enabled {
        &labels.text_on
    } else {
        &labels.text_off
    }
}

/// Controller that owns the label target and mirrors the toggle state into
/// it. The written label always matches the last observed state; the
/// initial write and every update happen synchronously.
#[derive(Debug)]
pub struct ToggleLabelSync<T> {
    enabled: bool,
    labels: LabelPair,
    target: T,
}

impl<T: LabelTarget> ToggleLabelSync<T> {
    /// Build the controller from injected element handles.
    ///
    /// The initial state is read from the toggle control itself, so a
    /// pre-checked control (restored page state, browser autofill) is
    /// honoured instead of assuming unchecked. The derived label is
    /// written to the target before this returns.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] when either handle is absent; the
    /// target is left untouched in that case.
    pub fn initialize<S: ToggleSource>(
        source: Option<&S>,
        target: Option<T>,
        labels: LabelPair,
    ) -> Result<Self, ConfigurationError> {
        let source = source.ok_or(ConfigurationError::MissingToggle)?;
        let target = target.ok_or(ConfigurationError::MissingLabel)?;
        let mut sync = Self {
            enabled: source.is_checked(),
            labels,
            target,
        };
        sync.write_label();
        Ok(sync)
    }

    /// Mirror a change of the toggle into the label, synchronously.
    ///
    /// Repeating a value rewrites the same label; no listeners or state
    /// accumulate across calls.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.write_label();
    }

    /// Last state observed from the toggle.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Label corresponding to the current state.
    #[must_use]
    pub fn label(&self) -> &str {
        submit_label(self.enabled, &self.labels)
    }

    fn write_label(&mut self) {
        let text = submit_label(self.enabled, &self.labels).to_owned();
        self.target.set_text(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct ToggleBox {
        checked: bool,
    }

    impl ToggleSource for ToggleBox {
        fn is_checked(&self) -> bool {
            self.checked
        }
    }

    /// Test target writing into a shared cell so the text stays readable
    /// after the controller takes ownership.
    #[derive(Clone, Default)]
    struct SharedSink(Rc<RefCell<Option<String>>>);

    impl SharedSink {
        fn text(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    impl LabelTarget for SharedSink {
        fn set_text(&mut self, text: &str) {
            *self.0.borrow_mut() = Some(text.to_string());
        }
    }

    fn labels() -> LabelPair {
        LabelPair {
            text_on: "Export to spreadsheet".to_string(),
            text_off: "Download CSV".to_string(),
        }
    }

    #[test]
    fn initial_label_matches_unchecked_control() {
        let sink = SharedSink::default();
        let sync = ToggleLabelSync::initialize(
            Some(&ToggleBox { checked: false }),
            Some(sink.clone()),
            labels(),
        )
        .unwrap();
        assert!(!sync.is_enabled());
        assert_eq!(sink.text().as_deref(), Some("Download CSV"));
    }

    #[test]
    fn prechecked_control_is_honoured() {
        let sink = SharedSink::default();
        let sync = ToggleLabelSync::initialize(
            Some(&ToggleBox { checked: true }),
            Some(sink.clone()),
            labels(),
        )
        .unwrap();
        assert!(sync.is_enabled());
        assert_eq!(sink.text().as_deref(), Some("Export to spreadsheet"));
    }

    #[test]
    fn changes_rewrite_the_label_both_ways() {
        let sink = SharedSink::default();
        let mut sync = ToggleLabelSync::initialize(
            Some(&ToggleBox { checked: false }),
            Some(sink.clone()),
            labels(),
        )
        .unwrap();

        sync.set_enabled(true);
        assert_eq!(sink.text().as_deref(), Some("Export to spreadsheet"));
        assert_eq!(sync.label(), "Export to spreadsheet");

        sync.set_enabled(false);
        assert_eq!(sink.text().as_deref(), Some("Download CSV"));
        assert_eq!(sync.label(), "Download CSV");
    }

    #[test]
    fn repeated_changes_are_idempotent() {
        let sink = SharedSink::default();
        let mut sync = ToggleLabelSync::initialize(
            Some(&ToggleBox { checked: false }),
            Some(sink.clone()),
            labels(),
        )
        .unwrap();

        sync.set_enabled(true);
        let once = sink.text();
        sync.set_enabled(true);
        assert_eq!(sink.text(), once);
        assert!(sync.is_enabled());
    }

    #[test]
    fn missing_toggle_errors_and_leaves_target_untouched() {
        let sink = SharedSink::default();
        let result = ToggleLabelSync::initialize::<ToggleBox>(None, Some(sink.clone()), labels());
        assert_eq!(result.unwrap_err(), ConfigurationError::MissingToggle);
        assert_eq!(sink.text(), None);
    }

    #[test]
    fn missing_label_target_errors() {
        let result = ToggleLabelSync::<SharedSink>::initialize(
            Some(&ToggleBox { checked: false }),
            None,
            labels(),
        );
        assert_eq!(result.unwrap_err(), ConfigurationError::MissingLabel);
    }

    #[test]
    fn label_derivation_is_a_pure_two_way_branch() {
        let pair = labels();
        assert_eq!(submit_label(true, &pair), "Export to spreadsheet");
        assert_eq!(submit_label(false, &pair), "Download CSV");
    }
}
