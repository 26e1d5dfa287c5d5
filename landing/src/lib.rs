//! # acgil-landing
//!
//! Company landing site for ACGIL, rendered client-side with
//! [Leptos](https://leptos.dev/) 0.8 and compiled to WebAssembly.
//!
//! ## Architecture
//!
//! - [`router`] - route table, the [`Navigator`](router::Navigator) that owns
//!   the current location, and in-site [`Link`](router::Link)s
//! - [`transition`] - enter/exit page transitions keyed by path
//! - [`sections`] - header, navigation, mobile menu, hero, features, footer
//! - [`pages`] - routed pages and the not-found fallback
//! - [`config`], [`telemetry`], [`browser`], [`error`] - startup plumbing
//!
//! The `Navigator` is created once at mount and passed down as a prop;
//! there is no global location state. Components never call browser APIs
//! while rendering, so every view also renders to a string:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html = view! {
//!     <App navigator=Navigator::new("/services") site=SiteConfig::default() year=2025 />
//! }
//! .to_html();
//! assert!(html.contains("This is the Services Page"));
//! ```
//!
//! ---
//!
//! Developed by the ACGIL Web Team (c)2025

#![recursion_limit = "256"]

pub mod browser;
pub mod config;
pub mod error;
pub mod pages;
pub mod router;
pub mod sections;
pub mod styles;
pub mod telemetry;
pub mod transition;

use leptos::prelude::*;

pub use config::SiteConfig;
pub use error::SiteError;
pub use router::Navigator;

use sections::{Footer, Header};
use transition::TransitionLayer;

/// Layout shell: header and footer around the routed content area.
#[component]
pub fn App(navigator: Navigator, site: SiteConfig, year: i32) -> impl IntoView {
    let company = site.company.clone();

    view! {
        <style>{styles::SITE_CSS}</style>
        <div class="site">
            <Header navigator=navigator company=company.clone() />
            <TransitionLayer navigator=navigator site=site />
            <Footer company=company year=year />
        </div>
    }
}
