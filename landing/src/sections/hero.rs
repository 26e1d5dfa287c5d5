use leptos::prelude::*;

use crate::router::{Link, Navigator, Route};

#[component]
pub fn Hero(navigator: Navigator) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title rise-in">{Route::Home.title()}</h1>
                    <p class="hero-description rise-in delay-1">
                        "Empowering businesses with technology, strategy, and design to unlock "
                        "sustainable growth and measurable results."
                    </p>
                    <div class="hero-actions">
                        <Link navigator=navigator to=Route::Services class="btn btn-primary">
                            "Explore Services"
                        </Link>
                        <Link navigator=navigator to=Route::Contact class="btn btn-secondary">
                            "Get in touch"
                        </Link>
                    </div>
                </div>
                <Illustration />
            </div>
        </section>
    }
}

#[component]
fn Illustration() -> impl IntoView {
    view! {
        <div class="hero-illustration scale-in">
            <svg viewBox="0 0 200 200" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
                <rect x="10" y="10" width="180" height="180" rx="20" fill="#6366f1" opacity="0.18"></rect>
                <g fill="#0f172a" opacity="0.85">
                    <circle cx="80" cy="86" r="10"></circle>
                    <rect x="98" y="60" width="50" height="50" rx="8"></rect>
                </g>
            </svg>
        </div>
    }
}
