// Client-side routing: route table, location owner, in-site links
// Developed by the ACGIL Web Team (c)2025

mod link;
mod navigator;
mod route;

pub use link::Link;
pub use navigator::{Location, Navigator, is_active};
pub use route::{Route, canonical_path};
