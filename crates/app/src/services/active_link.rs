//! Active link highlighter — one pass per page load.

use siteui_domain::active_link::ActiveLinkMatcher;

use crate::ports::NavLinks;

/// Marks every navigation anchor that points at the current document.
#[derive(Debug, Clone)]
pub struct ActiveLinkHighlighter {
    matcher: ActiveLinkMatcher,
}

impl ActiveLinkHighlighter {
    #[must_use]
    pub fn new(current_path: &str) -> Self {
        Self {
            matcher: ActiveLinkMatcher::new(current_path),
        }
    }

    /// Returns how many anchors were marked.
    pub fn highlight<L: NavLinks + ?Sized>(&self, links: &L) -> usize {
        let mut marked = 0;
        for (index, href) in links.hrefs().iter().enumerate() {
            if self.matcher.is_active(href) {
                links.mark_active(index);
                marked += 1;
            }
        }
        tracing::debug!(current = self.matcher.current_file(), marked, "active links highlighted");
        marked
    }
}
