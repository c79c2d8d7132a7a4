use log::debug;

use crate::viewport::Viewport;

/// `#id` fragment used as the href of in-page links.
pub fn anchor_href(id: &str) -> String {
    format!("#{}", id)
}

/// Starts a smooth scroll to the section's top edge. A missing section is a
/// no-op. The active section is left for the tracker to pick up.
pub fn scroll_to_section<V: Viewport + ?Sized>(viewport: &V, id: &str) -> bool {
    if !viewport.has_region(id) {
        debug!("no region for #{}, skipping scroll", id);
        return false;
    }
    debug!("scrolling to #{}", id);
    viewport.scroll_to_region(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::fake::FakeViewport;

    #[test]
    fn test_scroll_to_existing_section() {
        let viewport = FakeViewport::with_regions(&["home", "pricing"]);
        assert!(scroll_to_section(&viewport, "pricing"));
        assert_eq!(viewport.scrolls(), vec!["pricing".to_string()]);
    }

    #[test]
    fn test_scroll_to_missing_section_is_noop() {
        let viewport = FakeViewport::with_regions(&["home"]);
        assert!(!scroll_to_section(&viewport, "faq"));
        assert!(viewport.scrolls().is_empty());
    }

    #[test]
    fn test_anchor_href() {
        assert_eq!(anchor_href("why"), "#why");
    }
}
