//! Auto-advancing carousel
//!
//! A [`Carousel`] owns the position of one slider on the page, the handle of
//! its repeating autoplay timer and the transient state of a touch gesture.
//! It never touches the DOM or a clock directly: timers go through a
//! [`Scheduler`] and rendering reads [`Carousel::current_index`],
//! [`Carousel::dots`] and [`Carousel::track_transform`].
//!
//! # Navigation rules
//!
//! - Every user-initiated move (dot click, swipe) repositions the slide and
//!   restarts the autoplay countdown.
//! - A timer tick advances one slide and leaves the timer alone.
//! - Carousels with fewer than two slides never arm a timer.
//!
//! ```
//! use landing_enhancer::core::carousel::{Carousel, CarouselConfig, Scheduler};
//! use std::time::Duration;
//!
//! struct Noop;
//! impl Scheduler for Noop {
//!     type Handle = ();
//!     fn schedule_repeating(&mut self, _every: Duration) {}
//!     fn cancel(&mut self, _handle: ()) {}
//! }
//!
//! let mut carousel = Carousel::new(CarouselConfig::default(), 3).unwrap();
//! carousel.start_autoplay(&mut Noop);
//! assert!(carousel.is_autoplaying());
//!
//! carousel.go_to_slide(-1);
//! assert_eq!(carousel.current_index(), 2);
//! ```

mod config;
mod registry;

pub use config::*;
pub use registry::{CarouselId, CarouselRegistry, SliderMarkup};

use std::time::Duration;

/// Source of repeating timers.
///
/// `schedule_repeating` hands back an owned handle; passing it to `cancel`
/// must stop the timer for good.
pub trait Scheduler {
    type Handle;

    /// Arm a timer that fires every `every` until cancelled
    fn schedule_repeating(&mut self, every: Duration) -> Self::Handle;

    /// Stop a timer previously returned by `schedule_repeating`
    fn cancel(&mut self, handle: Self::Handle);
}

/// Input delivered to a carousel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// The autoplay timer fired
    Tick,
    /// The dot for this slide index was activated
    DotClicked(usize),
    /// A touch began at this horizontal coordinate
    TouchStart(f64),
    /// A touch ended at this horizontal coordinate
    TouchEnd(f64),
}

/// Result of finishing a touch gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Leftward swipe, moved one slide forward
    Next,
    /// Rightward swipe, moved one slide back
    Previous,
    /// Travel at or below the threshold, or no gesture in progress
    Ignored,
}

/// Render model of one dot indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

/// Accessible name of the dot for `index` (zero-based)
pub fn dot_label(label: &str, index: usize) -> String {
    format!("Lihat {} {}", label, index + 1)
}

/// CSS transform that brings slide `index` fully into view
pub fn track_transform(index: usize) -> String {
    format!("translateX(-{}%)", index * 100)
}

/// State of one carousel instance
#[derive(Debug)]
pub struct Carousel<H> {
    config: CarouselConfig,
    slide_count: usize,
    current_index: usize,
    timer: Option<H>,
    touch_start_x: Option<f64>,
}

impl<H> Carousel<H> {
    /// Create a carousel positioned on the first slide.
    ///
    /// Returns `None` when there are no slides; such containers are left
    /// untouched.
    pub fn new(config: CarouselConfig, slide_count: usize) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }

        Some(Self {
            config,
            slide_count,
            current_index: 0,
            timer: None,
            touch_start_x: None,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether an autoplay timer is currently armed
    pub fn is_autoplaying(&self) -> bool {
        self.timer.is_some()
    }

    /// Move to `index`, wrapping in both directions.
    ///
    /// Does not touch the timer.
    pub fn go_to_slide(&mut self, index: isize) {
        let count = self.slide_count as isize;
        self.current_index = index.rem_euclid(count) as usize;
    }

    fn step(&mut self, delta: isize) {
        self.go_to_slide(self.current_index as isize + delta);
    }

    /// Arm the autoplay timer, replacing any existing one.
    pub fn start_autoplay<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.cancel_timer(scheduler);
        if self.slide_count < 2 {
            return;
        }
        self.timer = Some(scheduler.schedule_repeating(self.config.interval));
    }

    /// Cancel the running timer and arm a fresh one
    pub fn restart_autoplay<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.cancel_timer(scheduler);
        self.start_autoplay(scheduler);
    }

    /// Cancel autoplay without rearming
    pub fn stop<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.cancel_timer(scheduler);
    }

    fn cancel_timer<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }

    /// Advance one slide on a timer tick
    pub fn on_tick(&mut self) {
        self.step(1);
    }

    /// Jump straight to a dot's slide and restart the countdown
    pub fn activate_dot<S>(&mut self, index: usize, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        self.go_to_slide(index as isize);
        self.restart_autoplay(scheduler);
    }

    /// Record where a touch began
    pub fn touch_start(&mut self, x: f64) {
        self.touch_start_x = Some(x);
    }

    /// Finish a touch gesture.
    ///
    /// Only the start and end points are compared. A swipe moves one slide
    /// and restarts the countdown; anything shorter changes nothing.
    pub fn touch_end<S>(&mut self, x: f64, scheduler: &mut S) -> SwipeOutcome
    where
        S: Scheduler<Handle = H>,
    {
        let Some(start) = self.touch_start_x.take() else {
            return SwipeOutcome::Ignored;
        };

        let delta = x - start;
        if delta.abs() <= self.config.swipe_threshold_px {
            return SwipeOutcome::Ignored;
        }

        let outcome = if delta < 0.0 {
            self.step(1);
            SwipeOutcome::Next
        } else {
            self.step(-1);
            SwipeOutcome::Previous
        };
        self.restart_autoplay(scheduler);
        outcome
    }

    /// Deliver an event and return the resulting slide index
    pub fn dispatch<S>(&mut self, event: CarouselEvent, scheduler: &mut S) -> usize
    where
        S: Scheduler<Handle = H>,
    {
        match event {
            CarouselEvent::Tick => self.on_tick(),
            CarouselEvent::DotClicked(index) => self.activate_dot(index, scheduler),
            CarouselEvent::TouchStart(x) => self.touch_start(x),
            CarouselEvent::TouchEnd(x) => {
                self.touch_end(x, scheduler);
            }
        }
        self.current_index
    }

    /// One dot per slide, exactly one of them active
    pub fn dots(&self) -> Vec<Dot> {
        (0..self.slide_count)
            .map(|index| Dot {
                index,
                label: dot_label(&self.config.label, index),
                active: index == self.current_index,
            })
            .collect()
    }

    pub fn track_transform(&self) -> String {
        track_transform(self.current_index)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Scheduler;
    use std::time::Duration;

    /// Handle issued by [`FakeScheduler`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TimerId(pub u64);

    /// Scheduler that only records which timers are pending
    #[derive(Debug, Default)]
    pub struct FakeScheduler {
        next_id: u64,
        pub pending: Vec<(TimerId, Duration)>,
        pub cancelled: Vec<TimerId>,
    }

    impl Scheduler for FakeScheduler {
        type Handle = TimerId;

        fn schedule_repeating(&mut self, every: Duration) -> TimerId {
            let id = TimerId(self.next_id);
            self.next_id += 1;
            self.pending.push((id, every));
            id
        }

        fn cancel(&mut self, handle: TimerId) {
            self.pending.retain(|(id, _)| *id != handle);
            self.cancelled.push(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FakeScheduler, TimerId};
    use super::*;
    use proptest::prelude::*;

    fn carousel(slides: usize) -> Carousel<TimerId> {
        Carousel::new(CarouselConfig::default(), slides).unwrap()
    }

    #[test]
    fn test_empty_carousel_is_skipped() {
        assert!(Carousel::<TimerId>::new(CarouselConfig::default(), 0).is_none());
    }

    #[test]
    fn test_go_to_slide_wraps_both_ways() {
        let mut c = carousel(4);
        c.go_to_slide(5);
        assert_eq!(c.current_index(), 1);
        c.go_to_slide(-1);
        assert_eq!(c.current_index(), 3);
        c.go_to_slide(-9);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_go_to_slide_leaves_timer_alone() {
        let mut sched = FakeScheduler::default();
        let mut c = carousel(3);
        c.start_autoplay(&mut sched);
        c.go_to_slide(2);
        c.go_to_slide(2);
        assert_eq!(c.current_index(), 2);
        assert_eq!(sched.pending.len(), 1);
        assert!(sched.cancelled.is_empty());
    }

    #[test]
    fn test_dots_track_current_index() {
        let mut c = carousel(4);
        c.go_to_slide(2);
        let active: Vec<bool> = c.dots().iter().map(|d| d.active).collect();
        assert_eq!(active, vec![false, false, true, false]);
        assert_eq!(c.dots()[0].label, "Lihat slide 1");
        assert_eq!(c.track_transform(), "translateX(-200%)");
    }

    #[test]
    fn test_single_slide_never_arms_timer() {
        let mut sched = FakeScheduler::default();
        let mut c = carousel(1);
        c.start_autoplay(&mut sched);
        c.restart_autoplay(&mut sched);
        assert!(sched.pending.is_empty());
        assert!(!c.is_autoplaying());
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_repeated_restarts_keep_one_timer() {
        let mut sched = FakeScheduler::default();
        let mut c = carousel(3);
        c.start_autoplay(&mut sched);
        for i in 0..10 {
            c.activate_dot(i % 3, &mut sched);
        }
        assert_eq!(sched.pending.len(), 1);
        assert_eq!(sched.cancelled.len(), 10);
    }

    #[test]
    fn test_tick_advances_without_rescheduling() {
        let mut sched = FakeScheduler::default();
        let mut c = carousel(3);
        c.start_autoplay(&mut sched);
        let armed = sched.pending.clone();

        c.on_tick();
        c.on_tick();
        c.on_tick();

        assert_eq!(c.current_index(), 0);
        assert_eq!(sched.pending, armed);
    }

    #[test]
    fn test_swipe_left_advances() {
        let mut sched = FakeScheduler::default();
        let mut c = carousel(3);
        c.touch_start(200.0);
        assert_eq!(c.touch_end(150.0, &mut sched), SwipeOutcome::Next);
        assert_eq!(c.current_index(), 1);
        assert_eq!(sched.pending.len(), 1);
    }

    #[test]
    fn test_swipe_right_wraps_backwards() {
        let mut sched = FakeScheduler::default();
        let mut c = carousel(3);
        c.touch_start(100.0);
        assert_eq!(c.touch_end(150.0, &mut sched), SwipeOutcome::Previous);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let mut sched = FakeScheduler::default();
        let mut c = carousel(3);
        c.start_autoplay(&mut sched);

        c.touch_start(100.0);
        assert_eq!(c.touch_end(70.0, &mut sched), SwipeOutcome::Ignored);
        c.touch_start(100.0);
        assert_eq!(c.touch_end(144.0, &mut sched), SwipeOutcome::Ignored);

        assert_eq!(c.current_index(), 0);
        assert!(sched.cancelled.is_empty());
    }

    #[test]
    fn test_touch_end_without_start_is_ignored() {
        let mut sched = FakeScheduler::default();
        let mut c = carousel(3);
        assert_eq!(c.touch_end(0.0, &mut sched), SwipeOutcome::Ignored);

        c.touch_start(300.0);
        c.touch_end(100.0, &mut sched);
        // the gesture is consumed
        assert_eq!(c.touch_end(0.0, &mut sched), SwipeOutcome::Ignored);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_custom_swipe_threshold() {
        let mut sched = FakeScheduler::default();
        let mut c =
            Carousel::new(CarouselConfig::default().with_swipe_threshold(80.0), 3).unwrap();
        c.touch_start(0.0);
        assert_eq!(c.touch_end(-60.0, &mut sched), SwipeOutcome::Ignored);
        c.touch_start(0.0);
        assert_eq!(c.touch_end(-90.0, &mut sched), SwipeOutcome::Next);
    }

    #[test]
    fn test_dispatch_routes_events() {
        let mut sched = FakeScheduler::default();
        let mut c = carousel(5);
        c.start_autoplay(&mut sched);

        assert_eq!(c.dispatch(CarouselEvent::Tick, &mut sched), 1);
        assert_eq!(c.dispatch(CarouselEvent::DotClicked(4), &mut sched), 4);
        assert_eq!(c.dispatch(CarouselEvent::TouchStart(10.0), &mut sched), 4);
        assert_eq!(c.dispatch(CarouselEvent::TouchEnd(-40.0), &mut sched), 0);
        assert_eq!(sched.pending.len(), 1);
        assert_eq!(sched.cancelled.len(), 2);
    }

    #[test]
    fn test_stop_cancels_timer() {
        let mut sched = FakeScheduler::default();
        let mut c = carousel(2);
        c.start_autoplay(&mut sched);
        c.stop(&mut sched);
        assert!(sched.pending.is_empty());
        assert!(!c.is_autoplaying());
    }

    proptest! {
        #[test]
        fn prop_go_to_slide_matches_euclidean_mod(count in 1usize..50, index in -1000isize..1000) {
            let mut c = carousel(count);
            c.go_to_slide(index);
            let n = count as isize;
            prop_assert_eq!(c.current_index() as isize, ((index % n) + n) % n);
            prop_assert_eq!(c.dots().iter().filter(|d| d.active).count(), 1);
        }
    }
}
