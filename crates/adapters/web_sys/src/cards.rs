//! Card grids.

use siteui_app::ports::CardGrid;
use siteui_domain::card::CardWidth;
use siteui_domain::error::DomError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::options::CardOptions;

/// [`CardGrid`] over the direct card children of one grid container.
pub struct DomCardGrid {
    cards: Vec<HtmlElement>,
}

impl DomCardGrid {
    /// Direct children of `grid` matching `card_selector`.
    #[must_use]
    pub fn from_container(grid: &Element, card_selector: &str) -> Self {
        let children = grid.children();
        let cards = (0..children.length())
            .filter_map(|index| children.item(index))
            .filter(|child| child.matches(card_selector).unwrap_or(false))
            .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
            .collect();
        Self { cards }
    }

    /// One entry per grid container on the page.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidSelector`] when the grid selector is rejected.
    pub fn find_all(document: &Document, options: &CardOptions) -> Result<Vec<Self>, DomError> {
        Ok(dom::query_all(document, &options.grid_selector)?
            .iter()
            .map(|grid| Self::from_container(grid, &options.card_selector))
            .filter(|grid| grid.card_count() > 0)
            .collect())
    }
}

impl CardGrid for DomCardGrid {
    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn clear_widths(&self) {
        for card in &self.cards {
            let _ = card.style().remove_property("width");
        }
    }

    fn natural_widths(&self) -> Vec<f64> {
        self.cards
            .iter()
            .map(|card| card.get_bounding_client_rect().width())
            .collect()
    }

    fn force_width(&self, width: CardWidth) {
        let css = width.to_css();
        for card in &self.cards {
            let _ = card.style().set_property("width", &css);
        }
    }
}
