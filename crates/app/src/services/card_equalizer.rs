//! Card equalizer — gives sibling cards in a grid one shared width.

use siteui_domain::card::{CardWidth, uniform_width};

use crate::ports::{CardGrid, MediaSignal};

/// Equalizes card widths above a breakpoint, restores natural sizing below.
///
/// Every grid is handled on its own; widths never leak across grids.
pub struct CardEqualizer<W> {
    wide: W,
}

impl<W: MediaSignal> CardEqualizer<W> {
    /// `wide` reports whether the viewport is at or above the equalization
    /// breakpoint.
    pub fn new(wide: W) -> Self {
        Self { wide }
    }

    /// Recompute one grid. Returns the width forced, if any.
    pub fn equalize<G: CardGrid + ?Sized>(&self, grid: &G) -> Option<CardWidth> {
        if grid.card_count() == 0 {
            return None;
        }
        // Natural widths must be measured without a previous forced width.
        grid.clear_widths();
        if !self.wide.matches() {
            return None;
        }
        let width = uniform_width(grid.natural_widths())?;
        grid.force_width(width);
        Some(width)
    }

    /// Recompute every grid of the page.
    pub fn equalize_all<G: CardGrid>(&self, grids: &[G]) {
        for (index, grid) in grids.iter().enumerate() {
            let width = self.equalize(grid);
            tracing::trace!(grid = index, width = ?width.map(CardWidth::px), "grid equalized");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Cards whose natural width shrinks to `natural` once the forced width is cleared.
    struct FakeGrid {
        natural: Vec<f64>,
        forced: RefCell<Option<CardWidth>>,
        measured_while_forced: Cell<bool>,
    }

    impl FakeGrid {
        fn new(natural: &[f64]) -> Self {
            Self {
                natural: natural.to_vec(),
                forced: RefCell::new(None),
                measured_while_forced: Cell::new(false),
            }
        }
    }

    impl CardGrid for FakeGrid {
        fn card_count(&self) -> usize {
            self.natural.len()
        }

        fn clear_widths(&self) {
            *self.forced.borrow_mut() = None;
        }

        fn natural_widths(&self) -> Vec<f64> {
            if self.forced.borrow().is_some() {
                self.measured_while_forced.set(true);
            }
            self.natural.clone()
        }

        fn force_width(&self, width: CardWidth) {
            *self.forced.borrow_mut() = Some(width);
        }
    }

    #[test]
    fn should_force_widest_natural_width_above_breakpoint() {
        let grid = FakeGrid::new(&[120.0, 180.0, 150.0]);
        let width = CardEqualizer::new(true).equalize(&grid);
        assert_eq!(width.map(CardWidth::px), Some(180));
        assert_eq!(grid.forced.borrow().map(CardWidth::px), Some(180));
    }

    #[test]
    fn should_clear_widths_below_breakpoint() {
        let grid = FakeGrid::new(&[120.0, 180.0, 150.0]);
        CardEqualizer::new(true).equalize(&grid);
        assert_eq!(CardEqualizer::new(false).equalize(&grid), None);
        assert!(grid.forced.borrow().is_none());
    }

    #[test]
    fn should_measure_after_clearing_previous_width() {
        let grid = FakeGrid::new(&[100.0, 90.0]);
        let equalizer = CardEqualizer::new(true);
        equalizer.equalize(&grid);
        equalizer.equalize(&grid);
        assert!(!grid.measured_while_forced.get());
    }

    #[test]
    fn should_skip_grid_without_cards() {
        let grid = FakeGrid::new(&[]);
        assert_eq!(CardEqualizer::new(true).equalize(&grid), None);
    }

    #[test]
    fn should_equalize_each_grid_independently() {
        let grids = [FakeGrid::new(&[100.0, 200.0]), FakeGrid::new(&[50.0, 60.0])];
        CardEqualizer::new(true).equalize_all(&grids);
        assert_eq!(grids[0].forced.borrow().map(CardWidth::px), Some(200));
        assert_eq!(grids[1].forced.borrow().map(CardWidth::px), Some(60));
    }
}
