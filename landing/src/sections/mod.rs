// Landing page sections
// Developed by the ACGIL Web Team (c)2025

mod cta;
mod features;
mod footer;
mod hero;
mod icons;
mod logo;
mod mobile_menu;
mod nav;

pub use cta::CallToAction;
pub use features::{FEATURES, Feature, Features};
pub use footer::Footer;
pub use hero::Hero;
pub use logo::Logo;
pub use mobile_menu::{MENU_CLOSE_ANIMATION, MenuState, MobileMenu};
pub use nav::{Header, NAV_ITEMS, NavBar, NavItem};
