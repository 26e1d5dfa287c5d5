//! Error type for the few fallible operations the site performs.
//!
//! Rendering never fails. What can fail is talking to the browser (window,
//! location, history) and reading the embedded site configuration.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong outside of rendering.
#[derive(Debug, Error)]
pub enum SiteError {
    /// `window` is missing (not running inside a browser document).
    #[error("browser window is not available")]
    NoWindow,

    /// `history.pushState` rejected the update.
    #[error("history update failed: {0}")]
    History(String),

    /// `window.location` could not be read.
    #[error("could not read the current location: {0}")]
    Location(String),

    /// `site.json` is not valid JSON or has mistyped fields.
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The configured log level is not one tracing understands.
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Renders a thrown JS value for an error message.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub type Result<T> = std::result::Result<T, SiteError>;
