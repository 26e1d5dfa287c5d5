//! The one owner of "where are we": current location plus the page
//! transition it drives.
//!
//! A [`Navigator`] is created once at mount and passed down as a prop to
//! every component that reads or changes the location. It is `Copy` (two
//! arena signals), so handing it around costs nothing.

use leptos::prelude::*;
use tracing::{debug, info, warn};

use super::route::{Route, canonical_path};
use crate::browser;
use crate::transition::{Transition, TransitionEvent};

/// Current path and the number of committed navigations so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    path: String,
    generation: u64,
}

impl Location {
    pub fn new(path: &str) -> Self {
        Self {
            path: canonical_path(path),
            generation: 0,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Bumped by every committed navigation; local UI state remembers the
    /// generation it was created in to reset itself afterwards.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn route(&self) -> Route {
        Route::recognize(&self.path)
    }

    fn advance(&mut self, path: String) {
        self.path = path;
        self.generation += 1;
    }
}

/// Exact, case-sensitive comparison of a link target with the current path.
pub fn is_active(target: &str, current: &str) -> bool {
    target == current
}

#[derive(Clone, Copy, Debug)]
pub struct Navigator {
    location: RwSignal<Location>,
    transition: RwSignal<Transition>,
}

impl Navigator {
    pub fn new(initial_path: &str) -> Self {
        let location = Location::new(initial_path);
        let transition = Transition::new(location.path());
        Self {
            location: RwSignal::new(location),
            transition: RwSignal::new(transition),
        }
    }

    pub fn location(&self) -> ReadSignal<Location> {
        self.location.read_only()
    }

    pub fn transition(&self) -> ReadSignal<Transition> {
        self.transition.read_only()
    }

    /// Current path (tracked).
    pub fn path(&self) -> String {
        self.location.with(|location| location.path().to_string())
    }

    /// Navigation generation (tracked).
    pub fn generation(&self) -> u64 {
        self.location.with(Location::generation)
    }

    /// Whether a link to `target` is the active one (tracked).
    pub fn is_active(&self, target: &str) -> bool {
        self.location.with(|location| is_active(target, location.path()))
    }

    /// Client-side navigation from a link click: new history entry, then
    /// commit. A failed history update is logged; the page still changes.
    pub fn navigate(&self, path: &str) {
        let path = canonical_path(path);
        if self.location.with_untracked(|location| location.path() == path) {
            return;
        }
        if let Err(err) = browser::push_path(&path) {
            warn!(%err, %path, "history entry not recorded");
        }
        self.commit(&path);
    }

    /// Makes `path` the current location without touching browser history
    /// (back/forward already moved it). Returns `false` when `path` is
    /// already current.
    pub fn commit(&self, path: &str) -> bool {
        let path = canonical_path(path);
        if self.location.with_untracked(|location| location.path() == path) {
            return false;
        }

        info!(%path, route = ?Route::recognize(&path), "navigate");
        self.location.update(|location| location.advance(path.clone()));
        let event = self
            .transition
            .try_update(|transition| transition.navigate(&path))
            .flatten();
        log_transition(event);
        true
    }

    /// Feeds a finished CSS animation on the page wrapper into the
    /// transition state machine.
    pub fn animation_ended(&self, animation: &str) {
        let event = self
            .transition
            .try_update(|transition| transition.animation_ended(animation))
            .flatten();
        log_transition(event);
    }
}

fn log_transition(event: Option<TransitionEvent>) {
    match event {
        Some(TransitionEvent::ExitStarted(key)) => debug!(%key, "page exit started"),
        Some(TransitionEvent::EnterStarted(key)) => debug!(%key, "page enter started"),
        Some(TransitionEvent::Settled(key)) => debug!(%key, "page settled"),
        None => {}
    }
}
