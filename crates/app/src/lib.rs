//! # siteui-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `PreferenceStore` — client-local key-value persistence
//!   - `MediaSignal` — observable boolean environment conditions
//!     (prefers dark, viewport above breakpoint)
//!   - `ThemeSurface`, `NavSurface`, `NavLinks`, `CardGrid`,
//!     `AccordionList`, `TextSlot` — the page elements each use-case drives
//! - Define **use-cases** as services:
//!   - `ThemeService` — init, toggle, follow OS changes
//!   - `NavController` — react to clicks, keys and breakpoint crossings
//!   - `ActiveLinkHighlighter`, `CardEqualizer`, `AccordionController`
//! - Recover from non-fatal failures (unreachable storage) locally
//!
//! ## Dependency rule
//! Depends on `siteui-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
