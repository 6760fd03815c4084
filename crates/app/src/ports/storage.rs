//! Storage port — client-local key-value persistence.

use std::rc::Rc;

use siteui_domain::error::SiteUiError;

/// A persistent string store scoped to the client (e.g. `localStorage`).
///
/// Implementations report failures instead of panicking; the services decide
/// how to recover.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`SiteUiError::Storage`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SiteUiError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteUiError::Storage`] when the write is rejected.
    fn set(&self, key: &str, value: &str) -> Result<(), SiteUiError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, SiteUiError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteUiError> {
        (**self).set(key, value)
    }
}
