//! Active link — matching navigation anchors against the current document.

/// File name assumed when a path ends in a directory.
pub const INDEX_FILE: &str = "index.html";

/// Reduce a path or href to the file it points at.
///
/// Strips the query string and fragment, a leading `./`, and every directory
/// segment. An empty result means the directory index.
#[must_use]
pub fn normalize_target(target: &str) -> String {
    let path = target.split(['?', '#']).next().unwrap_or_default();
    let path = path.strip_prefix("./").unwrap_or(path);
    match path.rsplit('/').next() {
        Some(file) if !file.is_empty() => file.to_string(),
        _ => INDEX_FILE.to_string(),
    }
}

/// Matches anchors against the normalized current document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLinkMatcher {
    current: String,
}

impl ActiveLinkMatcher {
    #[must_use]
    pub fn new(current_path: &str) -> Self {
        Self {
            current: normalize_target(current_path),
        }
    }

    #[must_use]
    pub fn current_file(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        normalize_target(href) == self.current
    }
}
