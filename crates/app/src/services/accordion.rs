//! Accordion controller — keeps at most one item open per list.

use siteui_domain::accordion::items_to_close;

use crate::ports::AccordionList;

/// Stateless: every decision is made from the list's current open flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccordionController;

impl AccordionController {
    /// Item `index` of `list` just changed state. Returns how many siblings
    /// were closed.
    pub fn on_toggled<L: AccordionList + ?Sized>(self, list: &L, index: usize) -> usize {
        let to_close = items_to_close(index, &list.open_flags());
        for &other in &to_close {
            list.close(other);
        }
        if !to_close.is_empty() {
            tracing::debug!(opened = index, closed = ?to_close, "accordion siblings closed");
        }
        to_close.len()
    }
}
