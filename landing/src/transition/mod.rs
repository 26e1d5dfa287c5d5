//! Page transitions keyed by path.
//!
//! The displayed page leaves with an exit animation before the next one
//! enters; the two never overlap. The state machine below only knows keys
//! and CSS animation names, the [`TransitionLayer`] component wires it to
//! the DOM.
//!
//! ```text
//! Entering(A) --page-enter ends--> Entered(A)
//! Entered(A)  --navigate B-------> Exiting(A, pending B)
//! Exiting(A)  --page-exit ends---> Entering(B)
//! ```

mod layer;

pub use layer::TransitionLayer;

/// CSS animation played by a page as it is inserted.
pub const ENTER_ANIMATION: &str = "page-enter";
/// CSS animation played by a page before it is removed.
pub const EXIT_ANIMATION: &str = "page-exit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Entered,
    Exiting,
}

impl Phase {
    /// Class list for the element wrapping the displayed page.
    pub const fn class(self) -> &'static str {
        match self {
            Phase::Entering => "page page-entering",
            Phase::Entered => "page page-entered",
            Phase::Exiting => "page page-exiting",
        }
    }
}

/// What a state change started, for logging and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionEvent {
    ExitStarted(String),
    EnterStarted(String),
    Settled(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    displayed: String,
    pending: Option<String>,
    phase: Phase,
}

impl Transition {
    /// First page of a visit; it animates in.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            displayed: key.into(),
            pending: None,
            phase: Phase::Entering,
        }
    }

    /// Key of the page currently in the DOM.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Key waiting for the exit animation to finish.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Requests `key` as the next page.
    ///
    /// Returns `None` when nothing starts: navigating to the displayed key
    /// while it is on screen, or retargeting an exit that is already running.
    pub fn navigate(&mut self, key: &str) -> Option<TransitionEvent> {
        match self.phase {
            Phase::Exiting => {
                self.pending = Some(key.to_string());
                None
            }
            Phase::Entering | Phase::Entered if self.displayed == key => None,
            Phase::Entering | Phase::Entered => {
                self.phase = Phase::Exiting;
                self.pending = Some(key.to_string());
                Some(TransitionEvent::ExitStarted(self.displayed.clone()))
            }
        }
    }

    /// Reports that the CSS animation `name` finished on the page wrapper.
    ///
    /// Names that do not belong to the current phase are ignored, which
    /// covers animations bubbling up from inside the page.
    pub fn animation_ended(&mut self, name: &str) -> Option<TransitionEvent> {
        match self.phase {
            Phase::Exiting if name == EXIT_ANIMATION => {
                if let Some(next) = self.pending.take() {
                    self.displayed = next;
                }
                self.phase = Phase::Entering;
                Some(TransitionEvent::EnterStarted(self.displayed.clone()))
            }
            Phase::Entering if name == ENTER_ANIMATION => {
                self.phase = Phase::Entered;
                Some(TransitionEvent::Settled(self.displayed.clone()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use super::TransitionEvent::*;

    fn settled(key: &str) -> Transition {
        let mut transition = Transition::new(key);
        transition.animation_ended(ENTER_ANIMATION);
        transition
    }

    #[test]
    fn first_page_enters_then_settles() {
        let mut transition = Transition::new("/");
        assert_eq!(transition.phase(), Phase::Entering);
        assert_eq!(
            transition.animation_ended(ENTER_ANIMATION),
            Some(Settled("/".into()))
        );
        assert_eq!(transition.phase(), Phase::Entered);
    }

    #[test]
    fn navigation_exits_old_key_before_entering_new_one() {
        let mut transition = settled("/");
        let mut events = Vec::new();

        events.extend(transition.navigate("/services"));
        assert_eq!(transition.displayed(), "/", "old page stays while exiting");
        events.extend(transition.animation_ended(EXIT_ANIMATION));
        assert_eq!(transition.displayed(), "/services");
        events.extend(transition.animation_ended(ENTER_ANIMATION));

        assert_eq!(
            events,
            vec![
                ExitStarted("/".into()),
                EnterStarted("/services".into()),
                Settled("/services".into()),
            ]
        );
    }

    #[test]
    fn same_key_is_a_no_op() {
        let mut transition = settled("/contact");
        assert_eq!(transition.navigate("/contact"), None);
        assert_eq!(transition.phase(), Phase::Entered);

        let mut entering = Transition::new("/contact");
        assert_eq!(entering.navigate("/contact"), None);
        assert_eq!(entering.phase(), Phase::Entering);
    }

    #[test]
    fn navigating_while_exiting_retargets_pending_key() {
        let mut transition = settled("/");
        transition.navigate("/services");
        assert_eq!(transition.navigate("/products"), None);
        assert_eq!(transition.pending(), Some("/products"));

        assert_eq!(
            transition.animation_ended(EXIT_ANIMATION),
            Some(EnterStarted("/products".into()))
        );
    }

    #[test]
    fn returning_to_exiting_key_re_enters_it() {
        let mut transition = settled("/");
        transition.navigate("/services");
        transition.navigate("/");

        assert_eq!(
            transition.animation_ended(EXIT_ANIMATION),
            Some(EnterStarted("/".into()))
        );
    }

    #[test]
    fn navigating_while_entering_starts_exit() {
        let mut transition = Transition::new("/");
        assert_eq!(transition.navigate("/aboutus"), Some(ExitStarted("/".into())));
        assert_eq!(transition.phase(), Phase::Exiting);
    }

    #[test]
    fn unrelated_animations_are_ignored() {
        let mut transition = settled("/");
        assert_eq!(transition.animation_ended(EXIT_ANIMATION), None);
        assert_eq!(transition.animation_ended("rise-in"), None);

        transition.navigate("/services");
        assert_eq!(transition.animation_ended(ENTER_ANIMATION), None);
        assert_eq!(transition.animation_ended("menu-drop"), None);
        assert_eq!(transition.phase(), Phase::Exiting);
        assert_eq!(transition.displayed(), "/");
    }

    #[test]
    fn phase_classes() {
        assert_eq!(Phase::Entering.class(), "page page-entering");
        assert_eq!(Phase::Entered.class(), "page page-entered");
        assert_eq!(Phase::Exiting.class(), "page page-exiting");
    }
}
