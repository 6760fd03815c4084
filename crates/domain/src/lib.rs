//! # siteui-domain
//!
//! Pure decision logic for the siteui page enhancements.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, breakpoints
//! - Resolve the **effective theme** from a stored preference and the OS signal
//! - Describe **toggle visuals** for the next theme a user would switch to
//! - Drive the **navigation state machine** (open/closed) from page events
//! - Normalize link targets for **active-link** highlighting
//! - Pick a uniform **card width** from measured natural widths
//! - Enforce **accordion** exclusivity (at most one open item per list)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod accordion;
pub mod active_link;
pub mod card;
pub mod layout;
pub mod nav;
pub mod theme;
