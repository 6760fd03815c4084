//! Footer text slots.

use siteui_app::ports::TextSlot;
use siteui_domain::error::DomError;
use web_sys::{Document, Element};

use crate::dom;

pub struct DomTextSlot(Element);

impl DomTextSlot {
    /// # Errors
    ///
    /// Returns [`DomError::MissingElement`] when no element has `id`.
    pub fn find(document: &Document, id: &str) -> Result<Self, DomError> {
        dom::by_id(document, id).map(Self)
    }
}

impl TextSlot for DomTextSlot {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}
