//! Accordion lists of `<details>` elements.

use siteui_app::ports::AccordionList;
use siteui_domain::error::DomError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDetailsElement};

use crate::dom;
use crate::options::AccordionOptions;

/// [`AccordionList`] over the disclosure items of one list container.
pub struct DomAccordionList {
    items: Vec<HtmlDetailsElement>,
}

impl DomAccordionList {
    /// Collect the items of `list`, leaving out those of lists nested inside it.
    #[must_use]
    pub fn from_container(list: &Element, options: &AccordionOptions) -> Self {
        let candidates = dom::query_all_in(list, &options.item_selector).unwrap_or_default();
        let items = owned_items(candidates, list, |item| {
            item.parent_element()
                .and_then(|parent| parent.closest(&options.list_selector).ok().flatten())
        })
        .into_iter()
        .filter_map(|item| item.dyn_into::<HtmlDetailsElement>().ok())
        .collect();
        Self { items }
    }

    /// # Errors
    ///
    /// Returns [`DomError::InvalidSelector`] when the list selector is rejected.
    pub fn find_all(
        document: &Document,
        options: &AccordionOptions,
    ) -> Result<Vec<Self>, DomError> {
        Ok(dom::query_all(document, &options.list_selector)?
            .iter()
            .map(|list| Self::from_container(list, options))
            .filter(|list| !list.items.is_empty())
            .collect())
    }

    #[must_use]
    pub fn items(&self) -> &[HtmlDetailsElement] {
        &self.items
    }
}

/// Keep the items whose nearest enclosing list is `list`.
fn owned_items<T, L, F>(items: Vec<T>, list: &L, nearest_list: F) -> Vec<T>
where
    L: PartialEq,
    F: Fn(&T) -> Option<L>,
{
    items
        .into_iter()
        .filter(|item| nearest_list(item).as_ref() == Some(list))
        .collect()
}

impl AccordionList for DomAccordionList {
    fn open_flags(&self) -> Vec<bool> {
        self.items.iter().map(HtmlDetailsElement::open).collect()
    }

    fn close(&self, index: usize) {
        if let Some(item) = self.items.get(index) {
            item.set_open(false);
        }
    }
}
