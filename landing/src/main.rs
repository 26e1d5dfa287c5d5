// ACGIL Landing Page - Leptos 0.8 Edition
// Developed by the ACGIL Web Team (c)2025

use acgil_landing::{App, Navigator, SiteConfig, browser, telemetry};
use leptos::prelude::*;
use tracing::{Level, info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (site, config_error) = match SiteConfig::embedded() {
        Ok(site) => (site, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    match site.max_level() {
        Ok(level) => telemetry::init(level),
        Err(err) => {
            telemetry::init(Level::INFO);
            warn!(%err, "using info log level");
        }
    }
    if let Some(err) = config_error {
        warn!(%err, "falling back to built-in site configuration");
    }

    let initial_path = browser::current_path().unwrap_or_else(|err| {
        warn!(%err, "starting at /");
        "/".to_string()
    });
    let year = site.copyright_year.unwrap_or_else(browser::current_year);
    info!(path = %initial_path, "mounting landing page");

    leptos::mount::mount_to_body(move || {
        let navigator = Navigator::new(&initial_path);
        browser::watch_history(navigator);
        view! { <App navigator=navigator site=site year=year /> }
    });
}
