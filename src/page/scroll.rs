//! Scroll effects
//!
//! Posts fade in the first time they scroll into view, staggered by their
//! position in the list. A scroll-to-top button shows once the page has been
//! scrolled past a threshold.

use super::{PageMetrics, Section, Viewport};
use std::time::Duration;

/// Stagger between consecutive posts
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);
/// Length of the fade-in transition
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);
/// Vertical offset of a post before it is revealed
pub const REVEAL_OFFSET: u32 = 30;
/// Fraction of a post that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Reveal state of one post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    index: usize,
    revealed: bool,
}

impl Reveal {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            revealed: false,
        }
    }

    #[must_use]
    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Transition delay, `index * 100ms`
    #[must_use]
    pub fn delay(self) -> Duration {
        REVEAL_STAGGER * u32::try_from(self.index).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn opacity(self) -> f32 {
        if self.revealed { 1.0 } else { 0.0 }
    }

    /// Current vertical offset
    #[must_use]
    pub const fn offset(self) -> u32 {
        if self.revealed { 0 } else { REVEAL_OFFSET }
    }

    /// Reveal if enough of `section` is inside the viewport
    ///
    /// Returns `true` only on the call that reveals. Revealed posts stay
    /// revealed.
    pub fn observe(&mut self, section: &Section, viewport: Viewport, bottom_margin: u32) -> bool {
        if self.revealed || !intersects(section, viewport, bottom_margin) {
            return false;
        }
        self.revealed = true;
        true
    }
}

fn intersects(section: &Section, viewport: Viewport, bottom_margin: u32) -> bool {
    let root_top = viewport.scroll_y;
    let root_bottom = viewport
        .scroll_y
        .saturating_add(viewport.height.saturating_sub(bottom_margin));

    if section.height == 0 {
        return section.top >= root_top && section.top <= root_bottom;
    }

    let overlap_top = section.top.max(root_top);
    let overlap_bottom = section.bottom().min(root_bottom);
    if overlap_bottom <= overlap_top {
        return false;
    }
    f64::from(overlap_bottom - overlap_top) / f64::from(section.height) >= REVEAL_THRESHOLD
}

/// Reveal states of every post on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollEffects {
    reveals: Vec<Reveal>,
    metrics: PageMetrics,
}

impl ScrollEffects {
    #[must_use]
    pub fn new(count: usize, metrics: PageMetrics) -> Self {
        Self {
            reveals: (0..count).map(Reveal::new).collect(),
            metrics,
        }
    }

    #[must_use]
    pub fn reveals(&self) -> &[Reveal] {
        &self.reveals
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.reveals.get(index).is_some_and(|r| r.is_revealed())
    }

    /// Check every post against the viewport; returns indices revealed now
    ///
    /// `sections` is parallel to the posts; hidden posts have no layout box
    /// and are skipped.
    pub fn on_scroll(&mut self, sections: &[Option<Section>], viewport: Viewport) -> Vec<usize> {
        let margin = self.metrics.reveal_margin;
        self.reveals
            .iter_mut()
            .zip(sections)
            .enumerate()
            .filter_map(|(i, (reveal, section))| {
                let section = section.as_ref()?;
                reveal.observe(section, viewport, margin).then_some(i)
            })
            .collect()
    }
}

/// The floating scroll-to-top button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTopButton {
    threshold: u32,
}

impl ScrollTopButton {
    /// Scroll position the button returns to
    pub const TARGET: u32 = 0;

    #[must_use]
    pub const fn new(metrics: &PageMetrics) -> Self {
        Self {
            threshold: metrics.scroll_top_threshold,
        }
    }

    #[must_use]
    pub const fn is_visible(self, scroll_y: u32) -> bool {
        scroll_y > self.threshold
    }
}

impl Default for ScrollTopButton {
    fn default() -> Self {
        Self::new(&PageMetrics::PIXELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        scroll_y: 0,
        height: 800,
    };

    #[test]
    fn test_reveal_initial_state() {
        let reveal = Reveal::new(3);
        assert!(!reveal.is_revealed());
        assert_eq!(reveal.opacity(), 0.0);
        assert_eq!(reveal.offset(), 30);
        assert_eq!(reveal.delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_reveal_needs_ten_percent_above_margin() {
        let mut reveal = Reveal::new(0);
        // Effective bottom is 750; 9 of 100 units visible
        let section = Section::new("p", 741, 100);
        assert!(!reveal.observe(&section, VIEWPORT, 50));

        let section = Section::new("p", 740, 100);
        assert!(reveal.observe(&section, VIEWPORT, 50));
        assert_eq!(reveal.offset(), 0);
    }

    #[test]
    fn test_reveal_is_sticky() {
        let mut reveal = Reveal::new(0);
        let section = Section::new("p", 100, 100);
        assert!(reveal.observe(&section, VIEWPORT, 50));

        let away = Viewport {
            scroll_y: 5000,
            height: 800,
        };
        assert!(!reveal.observe(&section, away, 50));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_scroll_effects_reports_newly_revealed() {
        let sections = vec![
            Some(Section::new("a", 100, 300)),
            Some(Section::new("b", 400, 300)),
            Some(Section::new("c", 1200, 300)),
        ];
        let mut effects = ScrollEffects::new(3, PageMetrics::PIXELS);

        assert_eq!(effects.on_scroll(&sections, VIEWPORT), vec![0, 1]);
        assert!(effects.on_scroll(&sections, VIEWPORT).is_empty());

        let lower = Viewport {
            scroll_y: 800,
            height: 800,
        };
        assert_eq!(effects.on_scroll(&sections, lower), vec![2]);
        assert!(effects.is_revealed(0));
    }

    #[test]
    fn test_hidden_posts_are_not_revealed() {
        let sections = vec![None, Some(Section::new("b", 0, 100))];
        let mut effects = ScrollEffects::new(2, PageMetrics::PIXELS);

        assert_eq!(effects.on_scroll(&sections, VIEWPORT), vec![1]);
        assert!(!effects.is_revealed(0));
    }

    #[test]
    fn test_scroll_top_button() {
        let button = ScrollTopButton::default();
        assert!(!button.is_visible(300));
        assert!(button.is_visible(301));
        assert_eq!(ScrollTopButton::TARGET, 0);
    }
}
