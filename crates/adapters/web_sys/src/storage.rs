//! `localStorage` adapter with a one-time availability probe.

use siteui_app::ports::PreferenceStore;
use siteui_domain::error::{SiteUiError, StorageError};
use web_sys::{Storage, Window};

const PROBE_KEY: &str = "__siteui_probe__";

/// Client-local store, or a placeholder when the browser denies access.
pub enum BrowserStorage {
    Local(Storage),
    Unavailable,
}

impl BrowserStorage {
    /// Detect whether `localStorage` is reachable and writable.
    ///
    /// Private browsing and disabled storage either throw on access or reject
    /// writes; both settle on [`Unavailable`](Self::Unavailable).
    #[must_use]
    pub fn probe(window: &Window) -> Self {
        let Some(storage) = window.local_storage().ok().flatten() else {
            tracing::debug!("localStorage unavailable");
            return Self::Unavailable;
        };
        if storage.set_item(PROBE_KEY, PROBE_KEY).is_err() {
            tracing::debug!("localStorage rejects writes");
            return Self::Unavailable;
        }
        let _ = storage.remove_item(PROBE_KEY);
        Self::Local(storage)
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SiteUiError> {
        match self {
            Self::Local(storage) => storage.get_item(key).map_err(|_| {
                StorageError::Read {
                    key: key.to_string(),
                }
                .into()
            }),
            Self::Unavailable => Err(StorageError::Unavailable.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteUiError> {
        match self {
            Self::Local(storage) => storage.set_item(key, value).map_err(|_| {
                StorageError::Write {
                    key: key.to_string(),
                }
                .into()
            }),
            Self::Unavailable => Err(StorageError::Unavailable.into()),
        }
    }
}
