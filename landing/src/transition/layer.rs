use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::pages;
use crate::router::Navigator;

/// Routed content area. Shows the transition's displayed page, not the
/// location: during an exit the old page stays until its animation ends.
/// A cancelled page animation counts as ended.
#[component]
pub fn TransitionLayer(navigator: Navigator, site: SiteConfig) -> impl IntoView {
    let transition = navigator.transition();
    // Page content only re-renders when the key changes, not on every phase.
    let displayed = Memo::new(move |_| transition.with(|t| t.displayed().to_string()));

    view! {
        <main
            class=move || transition.with(|t| t.phase().class())
            data-page=move || displayed.get()
            on:animationend=move |ev| navigator.animation_ended(&ev.animation_name())
            on:animationcancel=move |ev| navigator.animation_ended(&ev.animation_name())
        >
            {move || pages::render(&displayed.get(), navigator, &site)}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{ENTER_ANIMATION, EXIT_ANIMATION};
    use leptos::tachys::view::RenderHtml;

    fn render(navigator: Navigator) -> String {
        view! { <TransitionLayer navigator=navigator site=SiteConfig::default() /> }.to_html()
    }

    #[test]
    fn initial_page_is_entering() {
        let html = render(Navigator::new("/products"));
        assert!(html.contains(r#"class="page page-entering""#), "{html}");
        assert!(html.contains(r#"data-page="/products""#), "{html}");
        assert!(html.contains("This is the Products Page"));
    }

    #[test]
    fn old_page_stays_while_exiting() {
        let navigator = Navigator::new("/products");
        navigator.animation_ended(ENTER_ANIMATION);
        navigator.commit("/contact");

        let html = render(navigator);
        assert!(html.contains(r#"class="page page-exiting""#), "{html}");
        assert!(html.contains("This is the Products Page"));
        assert!(!html.contains("This is the Contact Page"));
    }

    #[test]
    fn new_page_enters_after_exit() {
        let navigator = Navigator::new("/products");
        navigator.animation_ended(ENTER_ANIMATION);
        navigator.commit("/contact");
        navigator.animation_ended(EXIT_ANIMATION);

        let html = render(navigator);
        assert!(html.contains(r#"class="page page-entering""#), "{html}");
        assert!(html.contains("This is the Contact Page"));
    }
}
