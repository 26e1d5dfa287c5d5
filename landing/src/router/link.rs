use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::{Navigator, Route};

/// In-site anchor. A plain click navigates client-side; modified clicks
/// (new tab, new window, download) are left to the browser.
#[component]
pub fn Link(
    navigator: Navigator,
    to: Route,
    #[prop(optional)] class: &'static str,
    /// Adds `active` to the class list while `to` is the current path.
    #[prop(optional)]
    highlight_active: bool,
    /// Runs after the navigation, e.g. to close the menu the link sits in.
    #[prop(optional)]
    on_select: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let target = to.path();
    let active = move || highlight_active && navigator.is_active(target);

    let on_click = move |ev: MouseEvent| {
        if is_modified_click(&ev) {
            return;
        }
        ev.prevent_default();
        navigator.navigate(target);
        if let Some(on_select) = on_select {
            on_select.run(());
        }
    };

    view! {
        <a
            href=target
            class=move || link_class(class, active())
            aria-current=move || active().then_some("page")
            on:click=on_click
        >
            {children()}
        </a>
    }
}

fn link_class(base: &str, active: bool) -> String {
    match (base.is_empty(), active) {
        (_, false) => base.to_string(),
        (true, true) => "active".to_string(),
        (false, true) => format!("{base} active"),
    }
}

fn is_modified_click(ev: &MouseEvent) -> bool {
    ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key()
}
