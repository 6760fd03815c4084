//! Accordion — at most one open disclosure item per list.

/// Indices of the items that must close after item `toggled` changed state.
///
/// `open_flags` is the open state of every item in the same list, read after
/// the toggle. Closing an item never cascades, so an empty list is returned
/// when `toggled` is now closed.
#[must_use]
pub fn items_to_close(toggled: usize, open_flags: &[bool]) -> Vec<usize> {
    if !open_flags.get(toggled).copied().unwrap_or(false) {
        return Vec::new();
    }
    open_flags
        .iter()
        .enumerate()
        .filter(|&(index, &open)| open && index != toggled)
        .map(|(index, _)| index)
        .collect()
}
