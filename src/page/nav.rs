//! Navigation links
//!
//! Exactly one link is active at a time. Clicking a link activates it and
//! yields a scroll target; scrolling re-derives the active link from the
//! section under an anchor point below the top of the viewport.

use super::{PageMetrics, Section};

/// Href of the link back to the top of the page
pub const HOME_LINK: &str = "#home";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    links: Vec<String>,
    active: usize,
    metrics: PageMetrics,
}

impl Navigation {
    /// Links for home plus one per section id, home active
    #[must_use]
    pub fn new<I, S>(section_ids: I, metrics: PageMetrics) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let links = std::iter::once(HOME_LINK.to_string())
            .chain(section_ids.into_iter().map(|id| format!("#{}", id.as_ref())))
            .collect();
        Self {
            links,
            active: 0,
            metrics,
        }
    }

    #[must_use]
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Href of the active link
    #[must_use]
    pub fn active(&self) -> &str {
        &self.links[self.active]
    }

    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        self.active() == href
    }

    /// Follow a link
    ///
    /// Returns the scroll position to move to: `0` for home, otherwise the
    /// section top minus the header and gap. `None` when no section matches;
    /// the link still becomes active if it exists.
    pub fn click(&mut self, href: &str, sections: &[Section]) -> Option<u32> {
        if let Some(index) = self.position(href) {
            self.active = index;
        }

        if href == HOME_LINK {
            return Some(0);
        }

        let id = href.strip_prefix('#').unwrap_or(href);
        let section = sections.iter().find(|s| s.id == id)?;
        Some(
            section
                .top
                .saturating_sub(self.metrics.header_height + self.metrics.header_gap),
        )
    }

    /// Update the active link for a new scroll offset
    pub fn on_scroll(&mut self, scroll_y: u32, sections: &[Section]) {
        if scroll_y < self.metrics.home_threshold {
            self.active = 0;
            return;
        }

        let anchor = scroll_y.saturating_add(self.metrics.anchor_offset);
        // Later sections win, matching document order on overlap
        let current = sections
            .iter()
            .filter(|s| s.contains(anchor))
            .filter_map(|s| self.position(&format!("#{}", s.id)))
            .last();
        if let Some(index) = current {
            self.active = index;
        }
    }

    /// Activate the next or previous link, wrapping around
    pub fn step(&mut self, forward: bool) -> &str {
        let len = self.links.len();
        self.active = if forward {
            (self.active + 1) % len
        } else {
            (self.active + len - 1) % len
        };
        self.active()
    }

    fn position(&self, href: &str) -> Option<usize> {
        self.links.iter().position(|l| l == href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("post-1", 600, 400),
            Section::new("post-2", 1000, 400),
            Section::new("post-3", 1400, 400),
        ]
    }

    fn nav() -> Navigation {
        Navigation::new(["post-1", "post-2", "post-3"], PageMetrics::PIXELS)
    }

    #[test]
    fn test_home_active_initially() {
        let nav = nav();
        assert_eq!(nav.active(), HOME_LINK);
        assert_eq!(nav.links().len(), 4);
    }

    #[test]
    fn test_click_home_scrolls_to_top() {
        let mut nav = nav();
        nav.click("#post-2", &sections());
        assert_eq!(nav.click(HOME_LINK, &sections()), Some(0));
        assert!(nav.is_active(HOME_LINK));
    }

    #[test]
    fn test_click_section_offsets_by_header() {
        let mut nav = nav();
        // 1000 - 70 header - 20 gap
        assert_eq!(nav.click("#post-2", &sections()), Some(910));
        assert_eq!(nav.active(), "#post-2");
    }

    #[test]
    fn test_click_target_clamped_at_zero() {
        let mut nav = Navigation::new(["top"], PageMetrics::PIXELS);
        assert_eq!(nav.click("#top", &[Section::new("top", 50, 100)]), Some(0));
    }

    #[test]
    fn test_click_unknown_target() {
        let mut nav = nav();
        assert_eq!(nav.click("#missing", &sections()), None);
        assert_eq!(nav.active(), HOME_LINK);
    }

    #[test]
    fn test_scroll_near_top_activates_home() {
        let mut nav = nav();
        nav.click("#post-3", &sections());
        nav.on_scroll(299, &sections());
        assert_eq!(nav.active(), HOME_LINK);
    }

    #[test]
    fn test_scroll_activates_section_under_anchor() {
        let mut nav = nav();
        // anchor at 1000 + 200 = 1200, inside post-2
        nav.on_scroll(1000, &sections());
        assert_eq!(nav.active(), "#post-2");

        // anchor at 1400, the first unit of post-3
        nav.on_scroll(1200, &sections());
        assert_eq!(nav.active(), "#post-3");
    }

    #[test]
    fn test_scroll_past_every_section_keeps_active() {
        let mut nav = nav();
        nav.on_scroll(1000, &sections());
        nav.on_scroll(5000, &sections());
        assert_eq!(nav.active(), "#post-2");
    }

    #[test]
    fn test_step_wraps() {
        let mut nav = nav();
        assert_eq!(nav.step(false), "#post-3");
        assert_eq!(nav.step(true), HOME_LINK);
        assert_eq!(nav.step(true), "#post-1");
    }
}
