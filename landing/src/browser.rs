//! Thin wrappers over the browser APIs the site touches: location, history
//! and the clock. Only event handlers and `main` call into here, so the
//! components stay renderable outside a browser.

use leptos::ev;
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::JsValue;

use crate::error::{Result, SiteError, describe_js};
use crate::router::Navigator;

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

/// `location.pathname` of the current document.
pub fn current_path() -> Result<String> {
    window()?
        .location()
        .pathname()
        .map_err(|err| SiteError::Location(describe_js(&err)))
}

/// Adds a history entry for `path` without reloading.
pub fn push_path(path: &str) -> Result<()> {
    window()?
        .history()
        .map_err(|err| SiteError::History(describe_js(&err)))?
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(|err| SiteError::History(describe_js(&err)))
}

/// Year of the visitor's clock, for the footer.
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Commits back/forward navigation (`popstate`) to `navigator`.
///
/// The site root lives as long as the page, so the listener is never removed.
pub fn watch_history(navigator: Navigator) {
    let _listener = window_event_listener(ev::popstate, move |_| match current_path() {
        Ok(path) => {
            navigator.commit(&path);
        }
        Err(err) => warn!(%err, "history change ignored"),
    });
}
