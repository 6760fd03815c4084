//! Time and timestamp helpers.

use chrono::{DateTime, Datelike, Utc};

/// UTC timestamp used for footer stamping.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Calendar year shown in the page footer.
#[must_use]
pub fn footer_year(at: Timestamp) -> i32 {
    at.year()
}
