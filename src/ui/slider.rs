//! Auto-playing slider component
//!
//! Rendering is driven by a single `index` signal. In the browser every
//! slider also registers a [`Carousel`](crate::core::Carousel) in a
//! page-wide registry; timer ticks, dot clicks and touches are dispatched to
//! it by id and the resulting index is written back to the signal.

use leptos::prelude::*;

use crate::core::carousel::{CarouselConfig, CarouselEvent, dot_label, track_transform};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

#[cfg(feature = "hydrate")]
use crate::core::carousel::{CarouselId, CarouselRegistry, Scheduler, SliderMarkup};

#[cfg(feature = "hydrate")]
thread_local! {
    static SLIDERS: RefCell<CarouselRegistry<Interval>> = RefCell::new(CarouselRegistry::new());
}

/// Scheduler backed by `setInterval`
#[cfg(feature = "hydrate")]
pub struct IntervalScheduler<F> {
    on_tick: F,
}

#[cfg(feature = "hydrate")]
impl<F> IntervalScheduler<F>
where
    F: Fn() + Clone + 'static,
{
    pub fn new(on_tick: F) -> Self {
        Self { on_tick }
    }
}

#[cfg(feature = "hydrate")]
impl<F> Scheduler for IntervalScheduler<F>
where
    F: Fn() + Clone + 'static,
{
    type Handle = Interval;

    fn schedule_repeating(&mut self, every: std::time::Duration) -> Interval {
        let millis = u32::try_from(every.as_millis()).unwrap_or(i32::MAX as u32);
        Interval::new(millis, self.on_tick.clone())
    }

    fn cancel(&mut self, handle: Interval) {
        drop(handle.cancel());
    }
}

/// Connects one rendered slider to its registry entry
#[derive(Clone, Copy)]
struct SliderController {
    index: RwSignal<usize>,
    #[cfg(feature = "hydrate")]
    id: CarouselId,
}

impl SliderController {
    #[cfg(feature = "hydrate")]
    fn register(markup: &SliderMarkup, index: RwSignal<usize>) -> Option<Self> {
        let id = SLIDERS.with(|sliders| sliders.borrow_mut().discover(markup))?;
        let controller = Self { index, id };

        let mut scheduler = controller.scheduler();
        SLIDERS.with(|sliders| sliders.borrow_mut().start(id, &mut scheduler));
        Some(controller)
    }

    #[cfg(feature = "hydrate")]
    fn scheduler(self) -> IntervalScheduler<impl Fn() + Clone + 'static> {
        IntervalScheduler::new(move || self.send(CarouselEvent::Tick))
    }

    fn send(self, event: CarouselEvent) {
        #[cfg(feature = "hydrate")]
        {
            let mut scheduler = self.scheduler();
            let index =
                SLIDERS.with(|sliders| sliders.borrow_mut().dispatch(self.id, event, &mut scheduler));
            if let Some(index) = index {
                self.index.set(index);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.index, event);
        }
    }

    fn release(self) {
        #[cfg(feature = "hydrate")]
        {
            let mut scheduler = self.scheduler();
            SLIDERS.with(|sliders| sliders.borrow_mut().remove(self.id, &mut scheduler));
        }
    }
}

/// Horizontal position of the touch that changed
fn touch_x(ev: &leptos::ev::TouchEvent) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        ev.changed_touches()
            .get(0)
            .map(|touch| f64::from(touch.client_x()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

/// Slider with autoplay, dot indicators and swipe navigation.
///
/// Renders nothing when `slides` is empty.
#[component]
pub fn Slider(
    /// Slide contents, in display order
    slides: Vec<AnyView>,
    /// Noun used in dot labels ("Lihat {label} 2")
    #[prop(optional, into)]
    label: Option<String>,
    /// Autoplay interval in milliseconds, as written in markup
    #[prop(optional, into)]
    speed: Option<String>,
    /// Extra classes for the outer container
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let slide_count = slides.len();
    if slide_count == 0 {
        return ().into_any();
    }

    let config = CarouselConfig::from_attributes(speed.as_deref(), label.as_deref());
    let index = RwSignal::new(0usize);

    #[cfg(feature = "hydrate")]
    let controller = {
        let markup = SliderMarkup::rendered(slide_count, speed.clone(), label.clone());
        SliderController::register(&markup, index)
    };
    #[cfg(not(feature = "hydrate"))]
    let controller = Some(SliderController { index });

    let Some(controller) = controller else {
        return ().into_any();
    };
    on_cleanup(move || controller.release());

    let dots = (0..slide_count)
        .map(|i| {
            view! {
                <button
                    type="button"
                    class="slider-dot"
                    class:active=move || index.get() == i
                    aria-label=dot_label(&config.label, i)
                    aria-current=move || (index.get() == i).then_some("true")
                    on:click=move |_| controller.send(CarouselEvent::DotClicked(i))
                ></button>
            }
        })
        .collect_view();

    let slides = slides
        .into_iter()
        .map(|slide| view! { <div class="slider-slide">{slide}</div> })
        .collect_view();

    view! {
        <div class=format!("slider {class}") data-slider-label=config.label.clone()>
            <div class="slider-viewport">
                <div
                    class="slider-track"
                    style:transform=move || track_transform(index.get())
                    on:touchstart=move |ev: leptos::ev::TouchEvent| {
                        if let Some(x) = touch_x(&ev) {
                            controller.send(CarouselEvent::TouchStart(x));
                        }
                    }
                    on:touchend=move |ev: leptos::ev::TouchEvent| {
                        if let Some(x) = touch_x(&ev) {
                            controller.send(CarouselEvent::TouchEnd(x));
                        }
                    }
                >
                    {slides}
                </div>
            </div>
            <div class="slider-dots">{dots}</div>
        </div>
    }
    .into_any()
}
