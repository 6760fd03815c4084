//! Card — uniform width selection for sibling cards in a grid.

/// Width forced on every card of a grid, in whole CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CardWidth(u32);

impl CardWidth {
    #[must_use]
    pub fn px(self) -> u32 {
        self.0
    }

    /// Inline style value, e.g. `180px`.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("{}px", self.0)
    }
}

/// Pick the width every card of a grid should share.
///
/// Takes the widest natural width, rounded up so no card's content wraps.
/// Non-finite and non-positive measurements (detached or hidden cards) are
/// ignored; `None` when nothing measurable remains.
#[must_use]
pub fn uniform_width<I>(natural_widths: I) -> Option<CardWidth>
where
    I: IntoIterator<Item = f64>,
{
    let max = natural_widths
        .into_iter()
        .filter(|w| w.is_finite() && *w > 0.0)
        .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |m| m.max(w))))?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let px = max.ceil().min(f64::from(u32::MAX)) as u32;
    Some(CardWidth(px))
}
