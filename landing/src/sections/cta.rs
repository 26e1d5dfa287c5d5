use leptos::prelude::*;

use crate::router::{Link, Navigator, Route};

/// Mid-page banner pointing at the contact and services pages.
#[component]
pub fn CallToAction(navigator: Navigator) -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container">
                <div class="cta-banner">
                    <div>
                        <h3 class="cta-title">"Ready to transform your product?"</h3>
                        <p class="cta-description">
                            "Let’s talk about how we can help you ship faster and scale safely."
                        </p>
                    </div>
                    <div class="cta-actions">
                        <Link navigator=navigator to=Route::Contact class="btn btn-light">
                            "Get a Quote"
                        </Link>
                        <Link navigator=navigator to=Route::Services class="btn btn-outline">
                            "Explore Services"
                        </Link>
                    </div>
                </div>
            </div>
        </section>
    }
}
