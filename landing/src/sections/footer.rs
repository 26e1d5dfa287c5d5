use leptos::prelude::*;

use super::Logo;
use super::icons::{ICON_FACEBOOK, ICON_LINKEDIN, ICON_TWITTER, Icon};
use crate::config::Company;

#[component]
pub fn Footer(company: Company, year: i32) -> impl IntoView {
    let copyright = format!("© {year} {}. All rights reserved.", company.short_name);

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <Logo company=company />
                    <p class="footer-copyright">{copyright}</p>
                </div>
                <div class="footer-links">
                    <a href="#" class="footer-link">"Privacy Policy"</a>
                    <a href="#" class="footer-link">"Terms of Service"</a>
                    // Decorative; no social accounts yet
                    <div class="footer-social">
                        <Icon path=ICON_FACEBOOK size="20" class="social-icon" />
                        <Icon path=ICON_TWITTER size="20" class="social-icon" />
                        <Icon path=ICON_LINKEDIN size="20" class="social-icon" />
                    </div>
                </div>
            </div>
        </footer>
    }
}
