//! Navigation controller — drives the mobile menu from page events.

use siteui_domain::layout::Viewport;
use siteui_domain::nav::{NavEvent, NavState, NavView};

use crate::ports::{MediaSignal, NavSurface};

/// Application service for the mobile navigation panel.
///
/// The open state is read back from the page on every event rather than
/// cached, so it never drifts from what the user sees.
pub struct NavController<N, W> {
    surface: N,
    wide: W,
}

impl<N, W> NavController<N, W>
where
    N: NavSurface,
    W: MediaSignal,
{
    /// `wide` reports whether the viewport is at or above the breakpoint.
    pub fn new(surface: N, wide: W) -> Self {
        Self { surface, wide }
    }

    pub fn state(&self) -> NavState {
        NavState::from_open(self.surface.is_open())
    }

    /// Feed one event through the state machine and render the outcome.
    ///
    /// Returns the state rendered, or `None` when the event was a no-op.
    pub fn handle(&self, event: NavEvent) -> Option<NavState> {
        let current = self.state();
        let next = current.on(event)?;
        self.surface.render(&NavView::for_state(next));
        tracing::debug!(?event, from = ?current, to = ?next, "navigation rendered");
        Some(next)
    }

    /// Initial pass once the document is ready.
    pub fn load(&self) -> Option<NavState> {
        self.handle(NavEvent::Loaded(self.viewport()))
    }

    /// The breakpoint media condition fired a change.
    pub fn viewport_changed(&self) -> Option<NavState> {
        self.handle(NavEvent::ViewportChanged(self.viewport()))
    }

    fn viewport(&self) -> Viewport {
        Viewport::from_wide(self.wide.matches())
    }
}
