use leptos::prelude::*;
use tracing::debug;

use super::NAV_ITEMS;
use super::icons::{ICON_MENU, Icon};
use crate::router::{Link, Navigator};

/// Keyframes the dropdown plays on its way out.
pub const MENU_CLOSE_ANIMATION: &str = "menu-lift";

/// Open/closed state of the mobile menu.
///
/// An open menu remembers the navigation generation it was opened in and
/// reads as closed once any navigation has happened since.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open {
        generation: u64,
    },
}

impl MenuState {
    pub fn is_open(self, generation: u64) -> bool {
        matches!(self, MenuState::Open { generation: opened } if opened == generation)
    }

    pub fn toggle(self, generation: u64) -> Self {
        if self.is_open(generation) {
            MenuState::Closed
        } else {
            MenuState::Open { generation }
        }
    }

    /// Choosing a link always closes the menu.
    pub fn select_link(self) -> Self {
        MenuState::Closed
    }
}

fn panel_class(open: bool) -> &'static str {
    if open { "menu-panel" } else { "menu-panel closing" }
}

/// Whether a closed dropdown stays mounted once `animation` has finished
/// on it. Only the closing animation removes it.
fn keeps_panel(open: bool, animation: &str) -> bool {
    open || animation != MENU_CLOSE_ANIMATION
}

#[component]
pub fn MobileMenu(navigator: Navigator) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    // Dropdown still in the DOM, open or playing its closing animation.
    let mounted = RwSignal::new(false);
    let is_open = move || menu.get().is_open(navigator.generation());

    let toggle = move |_| {
        let generation = navigator.location().with_untracked(|location| location.generation());
        menu.update(|state| *state = state.toggle(generation));
        let open = menu.get_untracked().is_open(generation);
        if open {
            mounted.set(true);
        }
        debug!(open, "mobile menu toggled");
    };
    let close = Callback::new(move |_: ()| menu.update(|state| *state = state.select_link()));
    let animation_done = move |animation: String| {
        let open = menu.with_untracked(|state| {
            state.is_open(navigator.location().with_untracked(|location| location.generation()))
        });
        if !keeps_panel(open, &animation) {
            mounted.set(false);
        }
    };

    view! {
        <div class="mobile-menu">
            <button
                class="menu-toggle"
                aria-label="toggle menu"
                aria-expanded=move || is_open().to_string()
                on:click=toggle
            >
                <Icon path=ICON_MENU size="20" />
            </button>
            <Show when=move || is_open() || mounted.get()>
                <div
                    class=move || panel_class(is_open())
                    on:animationend=move |ev| animation_done(ev.animation_name())
                    on:animationcancel=move |ev| animation_done(ev.animation_name())
                >
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <Link navigator=navigator to=item.route class="menu-link" on_select=close>
                                    {item.short_label}
                                </Link>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn toggled(times: usize) -> MenuState {
        (0..times).fold(MenuState::default(), |state, _| state.toggle(0))
    }

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open(0));
    }

    #[test]
    fn odd_toggles_open_even_toggles_close() {
        for times in 0..8 {
            assert_eq!(toggled(times).is_open(0), times % 2 == 1, "{times} toggles");
        }
    }

    #[test]
    fn selecting_a_link_closes() {
        for times in 0..4 {
            let state = toggled(times).select_link();
            assert!(!state.is_open(0));
            assert_eq!(state, MenuState::Closed);
        }
    }

    #[test]
    fn navigation_elsewhere_closes_open_menu() {
        let open = MenuState::Closed.toggle(3);
        assert!(open.is_open(3));
        assert!(!open.is_open(4));
        assert!(!open.is_open(5), "stays closed after further navigation");
    }

    #[test]
    fn toggle_after_navigation_reopens() {
        let stale = MenuState::Closed.toggle(1);
        let reopened = stale.toggle(2);
        assert!(reopened.is_open(2));
    }

    #[test]
    fn closing_panel_has_its_own_class() {
        assert_eq!(panel_class(true), "menu-panel");
        assert_eq!(panel_class(false), "menu-panel closing");
    }

    #[test]
    fn closed_panel_unmounts_only_after_closing_animation() {
        assert!(keeps_panel(false, "menu-drop"));
        assert!(!keeps_panel(false, MENU_CLOSE_ANIMATION));
    }

    #[test]
    fn open_panel_is_never_unmounted() {
        assert!(keeps_panel(true, "menu-drop"));
        assert!(keeps_panel(true, MENU_CLOSE_ANIMATION));
    }

    #[test]
    fn renders_closed_with_toggle_only() {
        let navigator = Navigator::new("/");
        let html = view! { <MobileMenu navigator=navigator /> }.to_html();

        assert!(html.contains(r#"aria-label="toggle menu""#), "{html}");
        assert!(html.contains(r#"aria-expanded="false""#), "{html}");
        assert!(!html.contains("menu-panel"), "{html}");
    }
}
