//! Configuration loading — optional JSON block with a root-attribute override.
//!
//! Looks for `<script type="application/json" id="siteui-config">` in the
//! page. Every field has a sensible default so the block is optional. The
//! `data-siteui-log` attribute on `<html>` takes precedence over the logging
//! filter from the block.

use serde::Deserialize;
use siteui_adapter_web::options::{
    AccordionOptions, CardOptions, FooterOptions, NavOptions, ThemeOptions,
};
use siteui_domain::error::ValidationError;
use siteui_domain::layout::Breakpoint;
use web_sys::Document;

/// Id of the element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "siteui-config";

/// Root attribute overriding the logging filter.
pub const LOG_ATTRIBUTE: &str = "data-siteui-log";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Viewport thresholds.
    pub breakpoints: BreakpointConfig,
    /// Theme toggle markup and storage key.
    pub theme: ThemeOptions,
    /// Mobile navigation markup.
    pub nav: NavOptions,
    /// Card grid markup.
    pub cards: CardOptions,
    /// Accordion markup.
    pub accordion: AccordionOptions,
    /// Footer markup.
    pub footer: FooterOptions,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Viewport thresholds, in CSS pixels.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BreakpointConfig {
    /// Width at which the mobile menu is force-closed.
    pub nav: Breakpoint,
    /// Width from which card widths are equalized.
    pub cards: Breakpoint,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "siteui=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the page, then apply the root-attribute
    /// override.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration block exists but is malformed
    /// or fails validation.
    pub fn load(document: &Document) -> Result<Self, ConfigError> {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());
        let mut config = Self::from_json(raw.as_deref())?;
        let log = document
            .document_element()
            .and_then(|root| root.get_attribute(LOG_ATTRIBUTE));
        config.apply_overrides(log);
        config.validate()?;
        Ok(config)
    }

    fn from_json(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(content) => serde_json::from_str(content).map_err(ConfigError::Parse),
        }
    }

    fn apply_overrides(&mut self, log: Option<String>) {
        if let Some(filter) = log.filter(|value| !value.trim().is_empty()) {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.storage_key.is_empty() {
            return Err(ValidationError::EmptyStorageKey.into());
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure (including zero breakpoints).
    #[error("failed to parse config block: {0}")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}
