//! Scroll-driven page state
//!
//! Pure policies for what the page does as the reader scrolls: header
//! styling, back-to-top visibility, scroll-depth analytics and reveal
//! timing. The browser layer only feeds in measurements.

use std::collections::BTreeSet;

/// Header switches to its compact style past this offset (px)
pub const HEADER_SCROLLED_AFTER_PX: f64 = 18.0;

/// Back-to-top button appears past this offset (px)
pub const BACK_TO_TOP_AFTER_PX: f64 = 480.0;

/// Depth marks reported to analytics, in percent
pub const DEPTH_MARKS: [u8; 4] = [25, 50, 75, 100];

/// Reveal delay step between neighbouring cards (ms)
pub const STAGGER_STEP_MS: u32 = 90;

/// Cards per stagger cycle
pub const STAGGER_GROUP: usize = 4;

/// Visual state derived from the vertical scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollChrome {
    pub header_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ScrollChrome {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            header_scrolled: scroll_y > HEADER_SCROLLED_AFTER_PX,
            back_to_top_visible: scroll_y > BACK_TO_TOP_AFTER_PX,
        }
    }
}

/// Reports each depth mark at most once per page load
#[derive(Debug, Clone, Default)]
pub struct ScrollDepthTracker {
    sent: BTreeSet<u8>,
}

impl ScrollDepthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one scroll measurement, returning the marks crossed for the
    /// first time.
    ///
    /// Pages that do not scroll report nothing.
    pub fn observe(&mut self, scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Vec<u8> {
        let max_scroll = scroll_height - viewport_height;
        if max_scroll <= 0.0 {
            return Vec::new();
        }

        let depth = (scroll_top / max_scroll * 100.0).round();
        DEPTH_MARKS
            .iter()
            .copied()
            .filter(|mark| depth >= f64::from(*mark))
            .filter(|mark| self.sent.insert(*mark))
            .collect()
    }

    pub fn sent(&self) -> impl Iterator<Item = u8> + '_ {
        self.sent.iter().copied()
    }
}

/// Reveal transition delay for the `index`-th staggered card
pub fn stagger_delay_ms(index: usize) -> u32 {
    (index % STAGGER_GROUP) as u32 * STAGGER_STEP_MS
}

/// Options for an intersection observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Elements fade in once, when 14% of them is visible
pub const REVEAL_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.14,
    root_margin: "0px",
};

/// A section counts as current once 55% of it sits in the middle band
pub const SECTION_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.55,
    root_margin: "-20% 0px -20% 0px",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_chrome_thresholds() {
        assert_eq!(ScrollChrome::at(0.0), ScrollChrome::default());
        assert_eq!(
            ScrollChrome::at(18.0),
            ScrollChrome {
                header_scrolled: false,
                back_to_top_visible: false
            }
        );
        assert!(ScrollChrome::at(19.0).header_scrolled);
        assert!(!ScrollChrome::at(480.0).back_to_top_visible);
        assert!(ScrollChrome::at(481.0).back_to_top_visible);
    }

    #[test]
    fn test_depth_marks_sent_once() {
        let mut tracker = ScrollDepthTracker::new();

        assert_eq!(tracker.observe(500.0, 3000.0, 1000.0), vec![25]);
        assert!(tracker.observe(520.0, 3000.0, 1000.0).is_empty());
        assert_eq!(tracker.observe(1500.0, 3000.0, 1000.0), vec![50, 75]);
        assert!(tracker.observe(0.0, 3000.0, 1000.0).is_empty());
        assert_eq!(tracker.observe(2000.0, 3000.0, 1000.0), vec![100]);
        assert!(tracker.observe(2000.0, 3000.0, 1000.0).is_empty());
        assert_eq!(tracker.sent().collect::<Vec<_>>(), vec![25, 50, 75, 100]);
    }

    #[test]
    fn test_jump_to_bottom_reports_every_mark() {
        let mut tracker = ScrollDepthTracker::new();
        assert_eq!(tracker.observe(900.0, 1800.0, 900.0), vec![25, 50, 75, 100]);
    }

    #[test]
    fn test_depth_rounds_to_nearest_percent() {
        let mut tracker = ScrollDepthTracker::new();
        // 24.6% rounds up to 25
        assert_eq!(tracker.observe(246.0, 2000.0, 1000.0), vec![25]);
    }

    #[test]
    fn test_short_page_reports_nothing() {
        let mut tracker = ScrollDepthTracker::new();
        assert!(tracker.observe(0.0, 800.0, 900.0).is_empty());
        assert!(tracker.observe(0.0, 900.0, 900.0).is_empty());
        assert_eq!(tracker.sent().count(), 0);
    }

    #[test]
    fn test_stagger_delay_cycles_every_four() {
        let delays: Vec<u32> = (0..6).map(stagger_delay_ms).collect();
        assert_eq!(delays, vec![0, 90, 180, 270, 0, 90]);
    }
}
