//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod accordion;
pub mod active_link;
pub mod card_equalizer;
pub mod footer;
pub mod nav_controller;
pub mod theme_service;
