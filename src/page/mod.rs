//! Page chrome behaviour
//!
//! State for the parts of the page around the post list: the mobile menu,
//! the navigation links that follow scrolling, the reveal-on-scroll effect
//! and the scroll-to-top button. Everything works on plain layout numbers
//! supplied by the surface, so the HTML page (pixels) and the terminal
//! reader (rows) share the same rules with different [`PageMetrics`].

pub mod menu;
pub mod nav;
pub mod scroll;

pub use menu::{MenuIcon, MobileMenu};
pub use nav::{HOME_LINK, Navigation};
pub use scroll::{Reveal, ScrollEffects, ScrollTopButton};

/// Layout box of one section, in surface units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub top: u32,
    pub height: u32,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, top: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// One past the last unit covered by the section
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }

    #[must_use]
    pub const fn contains(&self, pos: u32) -> bool {
        pos >= self.top && pos < self.bottom()
    }
}

/// Visible window of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_y: u32,
    pub height: u32,
}

/// Distances that drive the scroll rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetrics {
    /// Below this scroll offset the home link is active
    pub home_threshold: u32,
    /// Offset added to the scroll position when looking for the current section
    pub anchor_offset: u32,
    /// Extra space left above a section scrolled to from the menu
    pub header_gap: u32,
    /// Height of the fixed header
    pub header_height: u32,
    /// Scroll offset beyond which the scroll-to-top button shows
    pub scroll_top_threshold: u32,
    /// Bottom margin subtracted from the viewport for reveal checks
    pub reveal_margin: u32,
}

impl PageMetrics {
    /// Metrics of the HTML page, in CSS pixels
    pub const PIXELS: Self = Self {
        home_threshold: 300,
        anchor_offset: 200,
        header_gap: 20,
        header_height: 70,
        scroll_top_threshold: 300,
        reveal_margin: 50,
    };

    /// Metrics of the terminal reader, in rows
    pub const ROWS: Self = Self {
        home_threshold: 1,
        anchor_offset: 0,
        header_gap: 0,
        header_height: 0,
        scroll_top_threshold: 8,
        reveal_margin: 1,
    };
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self::PIXELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_contains_is_half_open() {
        let section = Section::new("post-1", 100, 50);
        assert!(!section.contains(99));
        assert!(section.contains(100));
        assert!(section.contains(149));
        assert!(!section.contains(150));
    }

    #[test]
    fn test_section_bottom_saturates() {
        let section = Section::new("huge", u32::MAX - 1, 10);
        assert_eq!(section.bottom(), u32::MAX);
    }
}
