// Routed pages
// Developed by the ACGIL Web Team (c)2025

mod content;
mod home;
mod not_found;

pub use content::{AboutPage, ContactPage, ProductsPage, ServicesPage, SimplePage};
pub use home::HomePage;
pub use not_found::NotFoundPage;

use crate::config::SiteConfig;
use crate::router::{Navigator, Route};
use leptos::prelude::*;

/// The page for `path`; unknown paths get the not-found page.
pub fn render(path: &str, navigator: Navigator, site: &SiteConfig) -> AnyView {
    match Route::recognize(path) {
        Route::Home => view! { <HomePage navigator=navigator /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Services => view! { <ServicesPage /> }.into_any(),
        Route::Products => view! { <ProductsPage /> }.into_any(),
        Route::Contact => view! { <ContactPage email=site.contact_email.clone() /> }.into_any(),
        Route::NotFound => {
            view! { <NotFoundPage navigator=navigator path=path.to_string() /> }.into_any()
        }
    }
}
