//! Document lookups and boot timing.

use siteui_domain::error::DomError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, EventTarget, NodeList};

use crate::listener::EventListener;

/// Element by id, or [`DomError::MissingElement`].
///
/// # Errors
///
/// Returns [`DomError::MissingElement`] when no element has `id`.
pub fn by_id(document: &Document, id: &str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement {
            what: format!("#{id}"),
        })
}

/// Element by id, cast to a concrete element type.
///
/// # Errors
///
/// Returns [`DomError::MissingElement`] when absent, or
/// [`DomError::UnexpectedElement`] when the element is of another type.
pub fn typed_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, DomError> {
    by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|_| DomError::UnexpectedElement {
            what: format!("#{id}"),
        })
}

/// Every element matching `selector` under `document`.
///
/// # Errors
///
/// Returns [`DomError::InvalidSelector`] when the browser rejects `selector`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| invalid_selector(selector))?;
    Ok(elements(&nodes))
}

/// Every element matching `selector` under `scope`.
///
/// # Errors
///
/// Returns [`DomError::InvalidSelector`] when the browser rejects `selector`.
pub fn query_all_in(scope: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = scope
        .query_selector_all(selector)
        .map_err(|_| invalid_selector(selector))?;
    Ok(elements(&nodes))
}

/// First element matching `selector` under `scope`, if any.
#[must_use]
pub fn query_in(scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).ok().flatten()
}

fn elements(nodes: &NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn invalid_selector(selector: &str) -> DomError {
    DomError::InvalidSelector {
        selector: selector.to_string(),
    }
}

/// Run `init` once the document has been parsed.
///
/// Runs immediately when parsing is already done; otherwise waits for
/// `DOMContentLoaded` and returns the pending listener, which must be kept
/// alive until it fires.
///
/// # Errors
///
/// Returns [`DomError::Listener`] when the listener cannot be attached.
pub fn on_dom_ready<F>(document: &Document, init: F) -> Result<Option<EventListener>, DomError>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        init();
        return Ok(None);
    }
    let mut init = Some(init);
    let target: &EventTarget = document.as_ref();
    let listener = EventListener::new(target, "DOMContentLoaded", move |_| {
        if let Some(init) = init.take() {
            init();
        }
    })?;
    Ok(Some(listener))
}

/// Run `callback` once web fonts have finished loading.
///
/// Returns `false` when the browser has no `document.fonts`, in which case
/// `callback` is dropped without running.
pub fn when_fonts_ready<F>(document: &Document, callback: F) -> bool
where
    F: FnOnce() + 'static,
{
    let supported = js_sys::Reflect::has(document.as_ref(), &JsValue::from_str("fonts"))
        .unwrap_or(false);
    if !supported {
        return false;
    }
    let Ok(ready) = document.fonts().ready() else {
        return false;
    };
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(ready).await {
            Ok(_) => callback(),
            Err(err) => tracing::debug!(error = ?err, "font loading failed"),
        }
    });
    true
}
