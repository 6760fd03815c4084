//! Media query signals with capability probing.

use siteui_app::ports::MediaSignal;
use siteui_domain::error::DomError;
use wasm_bindgen::JsValue;
use web_sys::{MediaQueryList, Window};

use crate::listener::{EventListener, LegacyMediaListener, Subscription};

/// How change notifications are attached to a media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStrategy {
    /// `MediaQueryList` is an `EventTarget` (`addEventListener("change")`).
    EventTarget,
    /// Only the deprecated `addListener` exists.
    Legacy,
    /// `matchMedia` is unavailable: constant `false`, never fires.
    Unsupported,
}

/// A `matchMedia` condition, probed once at construction.
pub struct MediaQuery {
    list: Option<MediaQueryList>,
    strategy: ChangeStrategy,
}

impl MediaQuery {
    /// Evaluate `query` and detect which listener API the browser offers.
    #[must_use]
    pub fn probe(window: &Window, query: &str) -> Self {
        let list = window.match_media(query).ok().flatten();
        let strategy = match &list {
            None => ChangeStrategy::Unsupported,
            Some(list) => {
                let has_event_target =
                    js_sys::Reflect::has(list.as_ref(), &JsValue::from_str("addEventListener"))
                        .unwrap_or(false);
                if has_event_target {
                    ChangeStrategy::EventTarget
                } else {
                    ChangeStrategy::Legacy
                }
            }
        };
        tracing::debug!(query, ?strategy, "media query probed");
        Self {
            list,
            strategy,
        }
    }

    /// Call `callback` whenever the condition flips.
    ///
    /// Returns `Ok(None)` when the browser cannot notify changes.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Listener`] when the browser refuses the listener.
    pub fn on_change<F>(&self, mut callback: F) -> Result<Option<Subscription>, DomError>
    where
        F: FnMut() + 'static,
    {
        let Some(list) = &self.list else {
            return Ok(None);
        };
        let subscription = match self.strategy {
            ChangeStrategy::EventTarget => {
                EventListener::new(list.as_ref(), "change", move |_| callback())?.into()
            }
            ChangeStrategy::Legacy => LegacyMediaListener::new(list, move |_| callback())?.into(),
            ChangeStrategy::Unsupported => return Ok(None),
        };
        Ok(Some(subscription))
    }
}

impl MediaSignal for MediaQuery {
    fn matches(&self) -> bool {
        self.list.as_ref().is_some_and(MediaQueryList::matches)
    }
}
