//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the page.
//! Every use-case receives the specific elements it drives through these
//! traits instead of querying a global document, so tests can hand it fakes.

pub mod signal;
pub mod storage;
pub mod surface;

pub use signal::MediaSignal;
pub use storage::PreferenceStore;
pub use surface::{AccordionList, CardGrid, NavLinks, NavSurface, TextSlot, ThemeSurface};
