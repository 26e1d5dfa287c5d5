use leptos::prelude::*;

use super::icons::{ICON_BAR_CHART, ICON_COG, ICON_SHIELD_CHECK, ICON_TARGET, Icon};

/// One card of the "What we do" grid.
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 4] = [
    Feature {
        icon: ICON_COG,
        title: "Custom Software",
        description: "End-to-end product development tailored to your business needs.",
    },
    Feature {
        icon: ICON_BAR_CHART,
        title: "Data & Analytics",
        description: "Turn data into decisions with robust analytics and dashboards.",
    },
    Feature {
        icon: ICON_SHIELD_CHECK,
        title: "Security & Compliance",
        description: "Security-first systems engineered for scale and trust.",
    },
    Feature {
        icon: ICON_TARGET,
        title: "Strategy & Growth",
        description: "Product & go-to-market strategy to accelerate adoption.",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"What we do"</h2>
                    <p class="section-description">
                        "Modular offerings to solve complex business problems."
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <FeatureCard
                                    icon=feature.icon
                                    title=feature.title
                                    description=feature.description
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">
                <Icon path=icon />
            </div>
            <div>
                <h3 class="feature-title">{title}</h3>
                <p class="feature-description">{description}</p>
            </div>
        </article>
    }
}
