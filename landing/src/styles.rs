//! Site stylesheet, injected by [`App`](crate::App).
//!
//! The keyframes named `page-enter` and `page-exit` must keep those names:
//! the transition state machine advances when an animation with exactly
//! that name ends on the page wrapper (see [`crate::transition`]).

/// Complete CSS for the site.
pub const SITE_CSS: &str = r#"
:root {
    --indigo: #4f46e5;
    --indigo-soft: #eef2ff;
    --cyan: #06b6d4;
    --ink: #0f172a;
    --slate: #475569;
    --muted: #64748b;
    --line: #f1f5f9;
    --radius: 16px;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    color: var(--ink);
    background: #f8fafc;
}

a { color: inherit; text-decoration: none; }

.site { min-height: 100vh; display: flex; flex-direction: column; }
.container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 40;
    background: rgba(255, 255, 255, 0.7);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--line);
}
.header-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.header-actions { display: flex; align-items: center; gap: 0.75rem; }

.logo { display: flex; align-items: center; gap: 0.75rem; }
.logo-mark {
    width: 2.5rem;
    height: 2.5rem;
    padding: 0.25rem;
    border-radius: 0.375rem;
    color: #fff;
    background: linear-gradient(135deg, var(--indigo), var(--cyan));
}
.logo-name { font-weight: 700; font-size: 1.125rem; line-height: 1; }
.logo-legal { font-size: 0.75rem; color: var(--muted); }

.nav-links { display: flex; gap: 1.5rem; align-items: center; }
.nav-link { color: #334155; transition: color 0.2s; }
.nav-link:hover { color: var(--indigo); }
.nav-link.active { color: var(--indigo); font-weight: 600; }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    padding: 0.75rem 1.25rem;
    border-radius: 0.5rem;
    font-weight: 600;
    transition: transform 0.2s;
}
.btn:hover { transform: scale(1.05); }
.btn-primary { background: var(--indigo); color: #fff; }
.btn-secondary { background: #fff; border: 1px solid #e2e8f0; color: #334155; }
.btn-light { background: #fff; color: #4338ca; }
.btn-outline { border: 1px solid rgba(255, 255, 255, 0.3); }

/* Mobile menu */
.mobile-menu { display: none; position: relative; }
.menu-toggle { padding: 0.5rem; border: 0; border-radius: 0.375rem; background: var(--line); }
.menu-panel {
    position: absolute;
    right: 0;
    margin-top: 0.75rem;
    width: 12rem;
    padding: 0.75rem 0;
    background: #fff;
    border: 1px solid #e2e8f0;
    border-radius: 0.5rem;
    box-shadow: 0 10px 15px rgba(15, 23, 42, 0.1);
    animation: menu-drop 0.2s ease-out;
}
.menu-panel.closing { animation: menu-lift 0.15s ease-in forwards; }
.menu-link { display: block; padding: 0.5rem 1rem; }
.menu-link:hover { background: #f8fafc; }

@media (max-width: 768px) {
    .nav-links, .header-cta { display: none; }
    .mobile-menu { display: block; }
}

/* Page transition */
.page { flex: 1; }
.page-entering { animation: page-enter 0.35s ease-out both; }
.page-exiting { animation: page-exit 0.35s ease-in both; }

@keyframes page-enter {
    from { opacity: 0; transform: translateY(8px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes page-exit {
    from { opacity: 1; transform: translateY(0); }
    to { opacity: 0; transform: translateY(-6px); }
}
@keyframes menu-drop {
    from { opacity: 0; transform: translateY(-10px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes menu-lift {
    from { opacity: 1; transform: translateY(0); }
    to { opacity: 0; transform: translateY(-10px); }
}
@keyframes rise-in {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes scale-in {
    from { opacity: 0; transform: scale(0.95); }
    to { opacity: 1; transform: scale(1); }
}

/* Reduced motion still fires animationend, just immediately */
@media (prefers-reduced-motion: reduce) {
    .page-entering, .page-exiting, .rise-in, .scale-in, .menu-panel, .menu-panel.closing {
        animation-duration: 1ms;
    }
}

/* Hero */
.hero { background: linear-gradient(135deg, var(--indigo-soft), #ecfeff); }
.hero-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
    gap: 3rem;
    align-items: center;
    padding-top: 5rem;
    padding-bottom: 5rem;
}
.hero-title { font-size: 3rem; font-weight: 800; line-height: 1.1; margin: 0; }
.hero-description { margin-top: 1.25rem; font-size: 1.125rem; color: var(--slate); }
.hero-actions { margin-top: 2rem; display: flex; gap: 1rem; }
.hero-illustration {
    height: 22rem;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #fff;
    border: 1px solid var(--line);
    border-radius: var(--radius);
    box-shadow: 0 10px 15px rgba(15, 23, 42, 0.08);
}
.hero-illustration svg { width: 11rem; height: 11rem; }
.rise-in { animation: rise-in 0.5s ease-out both 0.05s; }
.rise-in.delay-1 { animation-delay: 0.12s; }
.scale-in { animation: scale-in 0.5s ease-out both 0.15s; }

/* Features */
.features { padding: 4rem 0; }
.section-header { text-align: center; }
.section-title { font-size: 1.5rem; font-weight: 700; margin: 0; }
.section-description { margin-top: 0.5rem; color: var(--muted); }
.features-grid {
    margin-top: 2.5rem;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
    gap: 1.5rem;
}
.feature-card {
    display: flex;
    gap: 1rem;
    padding: 1.5rem;
    background: #fff;
    border: 1px solid var(--line);
    border-radius: var(--radius);
    transition: transform 0.2s;
}
.feature-card:hover { transform: translateY(-6px); }
.feature-icon {
    flex: none;
    width: 3rem;
    height: 3rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 0.5rem;
    background: var(--indigo-soft);
    color: var(--indigo);
}
.feature-title { margin: 0; font-weight: 600; font-size: 1rem; }
.feature-description { margin: 0.25rem 0 0; font-size: 0.875rem; color: var(--muted); }

/* Call to action */
.cta { padding: 4rem 0; }
.cta-banner {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
    padding: 3rem;
    color: #fff;
    border-radius: var(--radius);
    background: linear-gradient(90deg, var(--indigo), var(--cyan));
}
.cta-title { margin: 0; font-size: 1.25rem; font-weight: 700; }
.cta-description { margin-top: 0.5rem; color: #e0e7ff; }
.cta-actions { display: flex; gap: 0.75rem; }

/* Content pages */
.simple-page { max-width: 72rem; padding-top: 4rem; padding-bottom: 4rem; }
.page-title { font-size: 1.875rem; font-weight: 700; margin: 0; }
.page-body { margin-top: 1.5rem; color: var(--slate); }

/* Footer */
.footer { margin-top: 3rem; background: #fff; border-top: 1px solid #e2e8f0; }
.footer-inner {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
    padding-top: 2rem;
    padding-bottom: 2rem;
}
.footer-brand { display: flex; align-items: center; gap: 1rem; }
.footer-copyright { font-size: 0.875rem; color: var(--muted); }
.footer-links { display: flex; align-items: center; gap: 1.5rem; }
.footer-link { font-size: 0.875rem; color: var(--slate); }
.footer-link:hover { text-decoration: underline; }
.footer-social { display: flex; gap: 0.75rem; color: var(--muted); }
.social-icon { cursor: pointer; }
.social-icon:hover { color: var(--indigo); }
"#;
