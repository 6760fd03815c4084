//! Layout — viewport breakpoints shared by the navigation and card modules.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default width, in CSS pixels, at which the layout switches to wide mode.
pub const DEFAULT_BREAKPOINT: u32 = 760;

/// Which side of a breakpoint the viewport is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// Strictly below the breakpoint.
    Narrow,
    /// At or above the breakpoint.
    Wide,
}

impl Viewport {
    #[must_use]
    pub fn from_wide(is_wide: bool) -> Self {
        if is_wide { Self::Wide } else { Self::Narrow }
    }

    #[must_use]
    pub fn is_wide(self) -> bool {
        matches!(self, Self::Wide)
    }
}

/// A viewport-width threshold in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Breakpoint(u32);

impl Breakpoint {
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroBreakpoint`] when `px` is zero.
    pub fn new(px: u32) -> Result<Self, ValidationError> {
        if px == 0 {
            return Err(ValidationError::ZeroBreakpoint);
        }
        Ok(Self(px))
    }

    #[must_use]
    pub fn px(self) -> u32 {
        self.0
    }

    /// Media condition that matches when the viewport is wide.
    #[must_use]
    pub fn media_query(self) -> String {
        format!("(min-width: {}px)", self.0)
    }

    #[must_use]
    pub fn classify(self, width: f64) -> Viewport {
        Viewport::from_wide(width >= f64::from(self.0))
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(DEFAULT_BREAKPOINT)
    }
}

impl TryFrom<u32> for Breakpoint {
    type Error = ValidationError;

    fn try_from(px: u32) -> Result<Self, Self::Error> {
        Self::new(px)
    }
}

impl From<Breakpoint> for u32 {
    fn from(bp: Breakpoint) -> Self {
        bp.0
    }
}
