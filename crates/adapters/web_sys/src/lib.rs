//! # siteui-adapter-web
//!
//! Browser adapter — implements the `siteui-app` ports with `web-sys`.
//!
//! ## Responsibilities
//! - Locate the elements each use-case needs, reporting missing ones as
//!   [`DomError`](siteui_domain::error::DomError) so callers can skip them
//! - Probe browser capabilities once (`localStorage`, `MediaQueryList`
//!   listeners, `document.fonts`) and pick a strategy up front
//! - Hold event-listener closures in guards that detach on drop
//!
//! ## Dependency rule
//! Depends on `siteui-domain` and `siteui-app`. No decision logic lives here:
//! every handler translates a DOM event into a domain event and hands it to a
//! service.

pub mod accordion;
pub mod cards;
pub mod dom;
pub mod footer;
pub mod listener;
pub mod media;
pub mod nav;
pub mod options;
pub mod storage;
pub mod theme;

pub use listener::{EventListener, Mount, Subscription};
pub use media::MediaQuery;
pub use storage::BrowserStorage;
