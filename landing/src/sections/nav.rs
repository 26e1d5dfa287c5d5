use leptos::prelude::*;

use super::{Logo, MobileMenu};
use crate::config::Company;
use crate::router::{Link, Navigator, Route};

/// One entry of the site navigation.
pub struct NavItem {
    pub route: Route,
    /// Desktop bar label.
    pub label: &'static str,
    /// Mobile menu label.
    pub short_label: &'static str,
}

/// Navigation entries, in display order.
pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { route: Route::Home, label: "Home", short_label: "Home" },
    NavItem { route: Route::About, label: "About Us", short_label: "About" },
    NavItem { route: Route::Services, label: "Services", short_label: "Services" },
    NavItem { route: Route::Products, label: "Products", short_label: "Products" },
    NavItem { route: Route::Contact, label: "Contact", short_label: "Contact" },
];

#[component]
pub fn Header(navigator: Navigator, company: Company) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="header-inner">
                <Logo company=company />
                <NavBar navigator=navigator />
                <div class="header-actions">
                    <Link navigator=navigator to=Route::Contact class="btn btn-primary header-cta">
                        "Get a Quote"
                    </Link>
                    <MobileMenu navigator=navigator />
                </div>
            </div>
        </header>
    }
}

/// Desktop navigation; the link for the current path gets `active`.
#[component]
pub fn NavBar(navigator: Navigator) -> impl IntoView {
    view! {
        <nav class="nav-links">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    view! {
                        <Link navigator=navigator to=item.route class="nav-link" highlight_active=true>
                            {item.label}
                        </Link>
                    }
                })
                .collect_view()}
        </nav>
    }
}
