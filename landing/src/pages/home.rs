// Home page - hero + feature grid + call to action
use crate::router::Navigator;
use crate::sections::{CallToAction, Features, Hero};
use leptos::prelude::*;

#[component]
pub fn HomePage(navigator: Navigator) -> impl IntoView {
    view! {
        <div class="home">
            <Hero navigator=navigator />
            <Features />
            <CallToAction navigator=navigator />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::FEATURES;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render() -> String {
        let navigator = Navigator::new("/");
        view! { <HomePage navigator=navigator /> }.to_html()
    }

    #[test]
    fn three_sections_in_order() {
        let html = render();
        assert_eq!(html.matches("<section").count(), 3, "{html}");

        let hero = html.find(r#"<section class="hero""#).expect("hero");
        let features = html.find(r#"<section id="features" class="features""#).expect("features");
        let cta = html.find(r#"<section class="cta""#).expect("cta");
        assert!(hero < features && features < cta);
    }

    #[test]
    fn four_features_with_title_and_description() {
        let html = render();
        assert_eq!(html.matches(r#"class="feature-card""#).count(), 4);
        assert_eq!(html.matches(r#"class="feature-title""#).count(), 4);
        assert_eq!(html.matches(r#"class="feature-description""#).count(), 4);

        for feature in &FEATURES {
            assert!(!feature.title.is_empty() && !feature.description.is_empty());
        }
        for text in ["Custom Software", "Analytics", "Compliance", "Growth"] {
            assert!(html.contains(text), "missing {text}");
        }
    }

    #[test]
    fn hero_links_to_services_and_contact() {
        let html = render();
        assert!(html.contains("Innovating Solutions for Tomorrow"));
        assert!(html.contains(r#"href="/services""#));
        assert!(html.contains(r#"href="/contact""#));
    }
}
