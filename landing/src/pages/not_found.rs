// Fallback for paths outside the route table
use crate::router::{Link, Navigator, Route};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage(navigator: Navigator, path: String) -> impl IntoView {
    view! {
        <article class="simple-page container not-found">
            <h1 class="page-title">{Route::NotFound.title()}</h1>
            <div class="page-body">
                <p>"Nothing lives at " <code>{path}</code> "."</p>
                <Link navigator=navigator to=Route::Home class="btn btn-primary">
                    "Back to home"
                </Link>
            </div>
        </article>
    }
}
