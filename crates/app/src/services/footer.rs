//! Footer — copyright year stamping.

use siteui_domain::time::{Timestamp, footer_year};

use crate::ports::TextSlot;

/// Write the calendar year of `now` into `slot`.
pub fn stamp_footer_year<T: TextSlot + ?Sized>(slot: &T, now: Timestamp) -> i32 {
    let year = footer_year(now);
    slot.set_text(&year.to_string());
    year
}
