//! Root `data-theme` attribute and the theme toggle control.

use siteui_app::ports::ThemeSurface;
use siteui_domain::error::DomError;
use siteui_domain::theme::{ThemePreference, ToggleVisuals};
use web_sys::{Document, Element};

use crate::dom;
use crate::options::ThemeOptions;

/// The toggle button and its optional icon/text children.
pub struct ToggleControl {
    button: Element,
    icon: Option<Element>,
    text: Option<Element>,
}

impl ToggleControl {
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.button
    }
}

/// [`ThemeSurface`] over the document root and the toggle, when present.
pub struct DomThemeSurface {
    root: Element,
    attribute: String,
    toggle: Option<ToggleControl>,
}

impl DomThemeSurface {
    /// A page without a toggle still gets the root attribute managed.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::MissingElement`] when the document has no root
    /// element.
    pub fn find(document: &Document, options: &ThemeOptions) -> Result<Self, DomError> {
        let root = document
            .document_element()
            .ok_or_else(|| DomError::MissingElement {
                what: "<html>".to_string(),
            })?;
        let toggle = match dom::by_id(document, &options.toggle_id) {
            Ok(button) => Some(ToggleControl {
                icon: dom::query_in(&button, &options.icon_selector),
                text: dom::query_in(&button, &options.text_selector),
                button,
            }),
            Err(err) => {
                tracing::debug!(error = %err, "theme toggle not on this page");
                None
            }
        };
        Ok(Self {
            root,
            attribute: options.attribute.clone(),
            toggle,
        })
    }

    #[must_use]
    pub fn toggle(&self) -> Option<&ToggleControl> {
        self.toggle.as_ref()
    }
}

impl ThemeSurface for DomThemeSurface {
    fn applied_preference(&self) -> ThemePreference {
        ThemePreference::from_stored(self.root.get_attribute(&self.attribute).as_deref())
    }

    fn set_preference(&self, preference: ThemePreference) {
        let _ = match preference.attribute_value() {
            Some(value) => self.root.set_attribute(&self.attribute, value),
            None => self.root.remove_attribute(&self.attribute),
        };
    }

    fn render_toggle(&self, visuals: &ToggleVisuals) {
        let Some(toggle) = &self.toggle else {
            return;
        };
        if let Some(icon) = &toggle.icon {
            icon.set_text_content(Some(visuals.icon));
        }
        if let Some(text) = &toggle.text {
            text.set_text_content(Some(visuals.text));
        }
        let _ = toggle.button.set_attribute("aria-label", &visuals.aria_label);
        let _ = toggle
            .button
            .set_attribute("aria-pressed", bool_attr(visuals.aria_pressed));
    }
}

pub(crate) fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
