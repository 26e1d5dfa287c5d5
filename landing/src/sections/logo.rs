use leptos::prelude::*;

use crate::config::Company;

#[component]
pub fn Logo(company: Company) -> impl IntoView {
    view! {
        <div class="logo">
            <svg
                class="logo-mark"
                viewBox="0 0 24 24"
                fill="none"
                xmlns="http://www.w3.org/2000/svg"
                aria-hidden="true"
            >
                <rect x="3" y="3" width="18" height="18" rx="4" fill="currentColor"></rect>
                <path
                    d="M7 12h10M7 16h6"
                    stroke="#fff"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                ></path>
            </svg>
            <div class="logo-text">
                <span class="logo-name">{company.short_name}</span>
                <div class="logo-legal">{company.legal_name}</div>
            </div>
        </div>
    }
}
