//! Element ids, selectors, class names and labels the adapter looks for.
//!
//! Every field has a default matching the stock page markup, so a page only
//! needs to declare what it changes.

use serde::Deserialize;

/// Theme toggle markup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    /// Key used in `localStorage`.
    pub storage_key: String,
    /// Root attribute receiving `light`/`dark`.
    pub attribute: String,
    /// Id of the toggle button.
    pub toggle_id: String,
    /// Selector of the icon inside the toggle.
    pub icon_selector: String,
    /// Selector of the text inside the toggle.
    pub text_selector: String,
}

/// Mobile navigation markup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavOptions {
    pub toggle_id: String,
    pub panel_id: String,
    /// Class on the panel while open.
    pub open_class: String,
    /// Class on `<body>` while the menu locks scrolling.
    pub scroll_lock_class: String,
    /// Toggle `aria-label` while closed.
    pub open_label: String,
    /// Toggle `aria-label` while open.
    pub close_label: String,
    /// Anchors considered for active-link highlighting.
    pub link_selector: String,
    pub active_class: String,
}

/// Card grid markup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CardOptions {
    pub grid_selector: String,
    /// Matched against direct children of each grid only.
    pub card_selector: String,
}

/// Accordion markup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccordionOptions {
    pub list_selector: String,
    /// Matched against `<details>` descendants of each list.
    pub item_selector: String,
}

/// Footer markup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FooterOptions {
    pub year_id: String,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            storage_key: siteui_domain::theme::STORAGE_KEY.to_string(),
            attribute: "data-theme".to_string(),
            toggle_id: "themeToggle".to_string(),
            icon_selector: ".theme-toggle__icon".to_string(),
            text_selector: ".theme-toggle__text".to_string(),
        }
    }
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            toggle_id: "navToggle".to_string(),
            panel_id: "navPanel".to_string(),
            open_class: "is-open".to_string(),
            scroll_lock_class: "nav-open".to_string(),
            open_label: "Open menu".to_string(),
            close_label: "Close menu".to_string(),
            link_selector: "nav a[href]".to_string(),
            active_class: "is-active".to_string(),
        }
    }
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            grid_selector: ".card-grid".to_string(),
            card_selector: ".card".to_string(),
        }
    }
}

impl Default for AccordionOptions {
    fn default() -> Self {
        Self {
            list_selector: ".accordion".to_string(),
            item_selector: "details".to_string(),
        }
    }
}

impl Default for FooterOptions {
    fn default() -> Self {
        Self {
            year_id: "year".to_string(),
        }
    }
}
