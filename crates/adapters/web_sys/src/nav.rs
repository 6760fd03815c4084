//! Mobile navigation panel and navigation anchors.

use siteui_app::ports::{NavLinks, NavSurface};
use siteui_domain::error::DomError;
use siteui_domain::nav::{ClickTarget, NavLabel, NavView};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node};

use crate::dom;
use crate::options::NavOptions;
use crate::theme::bool_attr;

/// [`NavSurface`] over the toggle button, the panel and `<body>`.
pub struct DomNav {
    toggle: Element,
    panel: HtmlElement,
    body: HtmlElement,
    open_class: String,
    scroll_lock_class: String,
    open_label: String,
    close_label: String,
}

impl DomNav {
    /// # Errors
    ///
    /// Returns [`DomError::MissingElement`] when the toggle, the panel or the
    /// body is absent; the page then has no mobile navigation.
    pub fn find(document: &Document, options: &NavOptions) -> Result<Self, DomError> {
        let toggle = dom::by_id(document, &options.toggle_id)?;
        let panel = dom::typed_by_id::<HtmlElement>(document, &options.panel_id)?;
        let body = document.body().ok_or_else(|| DomError::MissingElement {
            what: "<body>".to_string(),
        })?;
        Ok(Self {
            toggle,
            panel,
            body,
            open_class: options.open_class.clone(),
            scroll_lock_class: options.scroll_lock_class.clone(),
            open_label: options.open_label.clone(),
            close_label: options.close_label.clone(),
        })
    }

    /// Where a click landed relative to the toggle and the panel.
    #[must_use]
    pub fn classify_click(&self, event: &Event) -> ClickTarget {
        let node = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let Some(node) = node else {
            return ClickTarget::Outside;
        };
        if self.toggle.contains(Some(&node)) {
            ClickTarget::Toggle
        } else if self.panel.contains(Some(&node)) {
            ClickTarget::Panel
        } else {
            ClickTarget::Outside
        }
    }
}

impl NavSurface for DomNav {
    fn is_open(&self) -> bool {
        self.panel.class_list().contains(&self.open_class)
    }

    fn render(&self, view: &NavView) {
        let _ = self
            .panel
            .class_list()
            .toggle_with_force(&self.open_class, view.panel_open);
        if let Some(hidden) = hidden_update(view) {
            self.panel.set_hidden(hidden);
        }
        let _ = self
            .toggle
            .set_attribute("aria-expanded", bool_attr(view.aria_expanded));
        let label = match view.label {
            NavLabel::Open => &self.open_label,
            NavLabel::Close => &self.close_label,
        };
        let _ = self.toggle.set_attribute("aria-label", label);
        let _ = self
            .body
            .class_list()
            .toggle_with_force(&self.scroll_lock_class, view.scroll_locked);
    }
}

/// Change to the panel's `hidden` attribute for `view`, if any.
///
/// Opening clears a `hidden` left in the markup for script-less visitors.
/// Closing never sets it: above the breakpoint the panel is the desktop menu,
/// and stylesheet rules keyed on the open class decide its visibility.
fn hidden_update(view: &NavView) -> Option<bool> {
    view.panel_open.then_some(false)
}

/// [`NavLinks`] over the anchors matched by the link selector.
pub struct DomNavLinks {
    anchors: Vec<Element>,
    active_class: String,
}

impl DomNavLinks {
    /// # Errors
    ///
    /// Returns [`DomError::InvalidSelector`] when the link selector is rejected.
    pub fn find(document: &Document, options: &NavOptions) -> Result<Self, DomError> {
        Ok(Self {
            anchors: dom::query_all(document, &options.link_selector)?,
            active_class: options.active_class.clone(),
        })
    }
}

impl NavLinks for DomNavLinks {
    fn hrefs(&self) -> Vec<String> {
        self.anchors
            .iter()
            .map(|anchor| anchor.get_attribute("href").unwrap_or_default())
            .collect()
    }

    fn mark_active(&self, index: usize) {
        if let Some(anchor) = self.anchors.get(index) {
            let _ = anchor.class_list().add_1(&self.active_class);
        }
    }
}
