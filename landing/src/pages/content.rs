// Static content pages - About, Services, Products, Contact
use crate::router::Route;
use leptos::prelude::*;

/// Shared article layout: title plus body copy.
#[component]
pub fn SimplePage(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <article class="simple-page container">
            <h1 class="page-title">{title}</h1>
            <div class="page-body">{children()}</div>
        </article>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <SimplePage title=Route::About.title()>
            <p>
                "ACGIL is a conceptual product & engineering partner focused on modern web and "
                "data-driven solutions."
            </p>
        </SimplePage>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <SimplePage title=Route::Services.title()>
            <p>"Explore our services: Product Development, Analytics, Security, Strategy."</p>
        </SimplePage>
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <SimplePage title=Route::Products.title()>
            <p>"Product listing placeholder."</p>
        </SimplePage>
    }
}

#[component]
pub fn ContactPage(email: String) -> impl IntoView {
    view! {
        <SimplePage title=Route::Contact.title()>
            <p>"Contact form placeholder. Email: " {email}</p>
        </SimplePage>
    }
}
