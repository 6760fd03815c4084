//! Event-listener guards.
//!
//! A `Closure` handed to the browser must outlive every dispatch. Guards own
//! the closure together with its target and detach it on drop, so the page
//! controls listener lifetime through ownership.

use siteui_domain::error::DomError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, MediaQueryList};

/// A `addEventListener` registration, removed on drop.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Attach `callback` to `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Listener`] when the browser refuses the listener.
    pub fn new<F>(
        target: &EventTarget,
        event: &'static str,
        callback: F,
    ) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|_| DomError::Listener {
                event: event.to_string(),
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// A legacy `MediaQueryList.addListener` registration, removed on drop.
pub struct LegacyMediaListener {
    list: MediaQueryList,
    callback: Closure<dyn FnMut(Event)>,
}

impl LegacyMediaListener {
    /// # Errors
    ///
    /// Returns [`DomError::Listener`] when the browser refuses the listener.
    pub fn new<F>(list: &MediaQueryList, callback: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        list.add_listener_with_opt_callback(Some(callback.as_ref().unchecked_ref()))
            .map_err(|_| DomError::Listener {
                event: "change".to_string(),
            })?;
        Ok(Self {
            list: list.clone(),
            callback,
        })
    }
}

impl Drop for LegacyMediaListener {
    fn drop(&mut self) {
        let _ = self
            .list
            .remove_listener_with_opt_callback(Some(self.callback.as_ref().unchecked_ref()));
    }
}

/// Any listener registration kept alive by a [`Mount`].
pub enum Subscription {
    Event(EventListener),
    LegacyMedia(LegacyMediaListener),
}

impl From<EventListener> for Subscription {
    fn from(listener: EventListener) -> Self {
        Self::Event(listener)
    }
}

impl From<LegacyMediaListener> for Subscription {
    fn from(listener: LegacyMediaListener) -> Self {
        Self::LegacyMedia(listener)
    }
}

/// Registry of every listener a page installed.
///
/// Dropping the mount detaches them all.
#[derive(Default)]
pub struct Mount {
    subscriptions: Vec<Subscription>,
}

impl Mount {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keep(&mut self, subscription: impl Into<Subscription>) {
        self.subscriptions.push(subscription.into());
    }

    /// Keep the listener on success, log and drop the error otherwise.
    pub fn keep_or_log<S: Into<Subscription>>(&mut self, result: Result<S, DomError>) {
        match result {
            Ok(subscription) => self.keep(subscription),
            Err(err) => tracing::warn!(error = %err, "listener not installed"),
        }
    }

    /// Take over every subscription of `other`.
    pub fn merge(&mut self, other: Mount) {
        self.subscriptions.extend(other.subscriptions);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
