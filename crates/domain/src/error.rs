//! Common error types used across the workspace.
//!
//! Port-level failures surface as [`SiteUiError`]; component lookups and
//! configuration report [`DomError`] and [`ValidationError`] directly. None
//! of these conditions is fatal for a page: callers recover locally and keep
//! the page interactive.

/// Top-level error for siteui operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteUiError {
    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// Failures reaching the client-local key-value store.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    /// The store is not reachable at all (disabled, sandboxed, private mode).
    #[error("storage is unavailable")]
    Unavailable,

    /// A read was rejected by the store.
    #[error("failed to read key {key:?}")]
    Read { key: String },

    /// A write was rejected by the store (quota exceeded, blocked).
    #[error("failed to write key {key:?}")]
    Write { key: String },
}

/// An element the page was expected to contain could not be used.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomError {
    #[error("missing element {what}")]
    MissingElement { what: String },

    #[error("element {what} has an unexpected type")]
    UnexpectedElement { what: String },

    #[error("invalid selector {selector:?}")]
    InvalidSelector { selector: String },

    #[error("failed to attach {event} listener")]
    Listener { event: String },
}

/// Domain invariant violations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("breakpoint must be a non-zero width")]
    ZeroBreakpoint,

    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_storage_error_with_from() {
        let err: SiteUiError = StorageError::Unavailable.into();
        assert!(matches!(err, SiteUiError::Storage(StorageError::Unavailable)));
    }

    #[test]
    fn should_include_element_name_in_dom_error_message() {
        let err = DomError::MissingElement {
            what: "#navToggle".to_string(),
        };
        assert_eq!(err.to_string(), "missing element #navToggle");
    }

    #[test]
    fn should_include_key_in_write_error_message() {
        let err = StorageError::Write {
            key: "theme".to_string(),
        };
        assert_eq!(err.to_string(), "failed to write key \"theme\"");
    }
}
