//! Navigation — open/closed state machine for the mobile menu panel.
//!
//! The state itself lives in the page (panel class, toggle ARIA attribute).
//! This module only decides, given the current state and an incoming event,
//! which state the page must be rendered into.

use crate::layout::Viewport;

/// Whether the mobile menu panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    #[must_use]
    pub fn from_open(is_open: bool) -> Self {
        if is_open { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Decide the reaction to `event`.
    ///
    /// Returns `Some(state)` when the page must be rendered into `state`,
    /// `None` when the event changes nothing. A load in a wide viewport always
    /// renders [`Closed`](Self::Closed), even if already closed, so markup left
    /// over from a narrow layout is corrected.
    #[must_use]
    pub fn on(self, event: NavEvent) -> Option<Self> {
        match (self, event) {
            (_, NavEvent::Click(ClickTarget::Toggle)) => Some(self.flipped()),
            (Self::Open, NavEvent::Click(ClickTarget::Outside) | NavEvent::Key(Key::Escape)) => {
                Some(Self::Closed)
            }
            (Self::Open, NavEvent::ViewportChanged(Viewport::Wide))
            | (_, NavEvent::Loaded(Viewport::Wide)) => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Where a click landed relative to the navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Toggle,
    Panel,
    Outside,
}

/// Keys the navigation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Page events that drive the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Click(ClickTarget),
    Key(Key),
    /// The breakpoint media condition changed state.
    ViewportChanged(Viewport),
    /// Initial run after the document is ready.
    Loaded(Viewport),
}

/// Which phrasing the toggle control's label uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLabel {
    Open,
    Close,
}

/// Everything the page must show for a navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavView {
    pub panel_open: bool,
    pub aria_expanded: bool,
    pub label: NavLabel,
    pub scroll_locked: bool,
}

impl NavView {
    #[must_use]
    pub fn for_state(state: NavState) -> Self {
        let open = state.is_open();
        Self {
            panel_open: open,
            aria_expanded: open,
            label: if open { NavLabel::Close } else { NavLabel::Open },
            scroll_locked: open,
        }
    }
}
