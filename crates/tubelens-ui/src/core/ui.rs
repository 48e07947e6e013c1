//! Design tokens shared by the DaisyUI-styled form controls.

/// Color tokens mapped onto DaisyUI tone class suffixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Brand-primary controls (the submit path).
    Primary,
    /// Subdued secondary controls.
    Neutral,
    /// Error surfaces and validation accents.
    Error,
}

impl Tone {
    /// Class suffix (e.g. `"primary"`) for the tone.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Neutral => "neutral",
            Self::Error => "error",
        }
    }
}

/// Compose a `{prefix}-{tone}` DaisyUI class for toned controls.
#[must_use]
pub fn tone_class(prefix: &str, tone: Option<Tone>) -> Option<String> {
    tone.map(|tone| format!("{prefix}-{}", tone.as_str()))
}
