//! Page-wide table of carousel instances
//!
//! Each slider container discovered on the page gets a [`CarouselId`]; DOM
//! callbacks carry only that id and hand their event to
//! [`CarouselRegistry::dispatch`].

use std::collections::HashMap;

use super::{Carousel, CarouselConfig, CarouselEvent, Scheduler};

/// Identity of a registered carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarouselId(u32);

/// What discovery found inside a slider container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliderMarkup {
    /// Slide count of the track, `None` when the track element is missing
    pub track_slides: Option<usize>,
    /// Whether the dot indicator host element exists
    pub has_dots_host: bool,
    /// Raw autoplay speed attribute
    pub speed: Option<String>,
    /// Raw label attribute
    pub label: Option<String>,
}

impl SliderMarkup {
    /// Markup rendered by the page itself: track and dot host always exist
    pub fn rendered(slides: usize, speed: Option<String>, label: Option<String>) -> Self {
        Self {
            track_slides: Some(slides),
            has_dots_host: true,
            speed,
            label,
        }
    }
}

/// Carousel instances keyed by identity
#[derive(Debug)]
pub struct CarouselRegistry<H> {
    next_id: u32,
    carousels: HashMap<CarouselId, Carousel<H>>,
}

impl<H> Default for CarouselRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> CarouselRegistry<H> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            carousels: HashMap::new(),
        }
    }

    /// Register a container if it is usable.
    ///
    /// A missing track, a missing dot host or an empty track skip the
    /// container silently.
    pub fn discover(&mut self, markup: &SliderMarkup) -> Option<CarouselId> {
        if !markup.has_dots_host {
            return None;
        }
        let slides = markup.track_slides?;

        let config =
            CarouselConfig::from_attributes(markup.speed.as_deref(), markup.label.as_deref());
        let carousel = Carousel::new(config, slides)?;

        let id = CarouselId(self.next_id);
        self.next_id += 1;
        self.carousels.insert(id, carousel);
        Some(id)
    }

    pub fn get(&self, id: CarouselId) -> Option<&Carousel<H>> {
        self.carousels.get(&id)
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    /// Arm autoplay for a freshly discovered carousel
    pub fn start<S>(&mut self, id: CarouselId, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        if let Some(carousel) = self.carousels.get_mut(&id) {
            carousel.start_autoplay(scheduler);
        }
    }

    /// Route an event to its carousel, returning the new slide index.
    ///
    /// Unknown ids are ignored.
    pub fn dispatch<S>(
        &mut self,
        id: CarouselId,
        event: CarouselEvent,
        scheduler: &mut S,
    ) -> Option<usize>
    where
        S: Scheduler<Handle = H>,
    {
        self.carousels
            .get_mut(&id)
            .map(|carousel| carousel.dispatch(event, scheduler))
    }

    /// Drop a carousel and cancel its timer
    pub fn remove<S>(&mut self, id: CarouselId, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        if let Some(mut carousel) = self.carousels.remove(&id) {
            carousel.stop(scheduler);
        }
    }
}
