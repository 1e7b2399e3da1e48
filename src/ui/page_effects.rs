//! Page-wide reactions to scrolling
//!
//! Installs, once per page load:
//! - scroll listener updating [`ScrollChrome`] and reporting scroll depth
//! - one-shot reveal of `.reveal` elements as they enter the viewport
//! - highlighting of the navigation link whose section is in view

use leptos::prelude::*;

use crate::core::ScrollChrome;

/// Reactive page state shared by the header and the back-to-top button
#[derive(Clone, Copy, Debug)]
pub struct PageState {
    pub chrome: RwSignal<ScrollChrome>,
    /// Id of the section currently in view (without `#`)
    pub active_section: RwSignal<Option<String>>,
}

/// Provide page state to the component tree
///
/// Starts from the top-of-page state so server and client render alike;
/// the scroll listener corrects it once installed.
pub fn provide_page_state() -> PageState {
    let state = PageState {
        chrome: RwSignal::new(ScrollChrome::default()),
        active_section: RwSignal::new(None),
    };
    provide_context(state);
    state
}

/// Use page state, creating a detached one when none was provided
pub fn use_page_state() -> PageState {
    use_context::<PageState>().unwrap_or_else(|| PageState {
        chrome: RwSignal::new(ScrollChrome::default()),
        active_section: RwSignal::new(None),
    })
}

/// Selector of elements that fade in on first sight
pub const REVEAL_SELECTOR: &str = ".reveal";

/// Install all scroll-driven behaviors
///
/// `sections` are the element ids the navigation links point at.
#[cfg(feature = "hydrate")]
pub fn install(state: PageState, analytics: super::analytics::AnalyticsContext, sections: &[&str]) {
    if let Err(err) = install_scroll_listener(state, analytics) {
        leptos::logging::warn!("scroll tracking disabled: {err}");
    }
    if let Err(err) = install_reveal_observer() {
        leptos::logging::warn!("reveal on scroll disabled: {err}");
    }
    if let Err(err) = install_section_observer(state, sections) {
        leptos::logging::warn!("section highlighting disabled: {err}");
    }
}

#[cfg(feature = "hydrate")]
fn install_scroll_listener(
    state: PageState,
    analytics: super::analytics::AnalyticsContext,
) -> crate::core::EnhanceResult<()> {
    use crate::core::{ScrollDepthTracker, TrackedEvent};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let window = web_sys::window().ok_or(crate::core::EnhanceError::NoWindow)?;
    let mut depth = ScrollDepthTracker::new();

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let chrome = ScrollChrome::at(super::browser::scroll_y());
        if state.chrome.get_untracked() != chrome {
            state.chrome.set(chrome);
        }

        let Ok(metrics) = super::browser::scroll_metrics() else {
            return;
        };
        for percent in depth.observe(
            metrics.scroll_top,
            metrics.scroll_height,
            metrics.viewport_height,
        ) {
            analytics.track(TrackedEvent::ScrollDepth { percent });
        }
    });

    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    // Lives as long as the page
    on_scroll.forget();

    state.chrome.set(ScrollChrome::at(super::browser::scroll_y()));
    Ok(())
}

#[cfg(feature = "hydrate")]
fn observe(
    targets: Vec<web_sys::Element>,
    options: crate::core::scroll::ObserverOptions,
    mut on_visible: impl FnMut(&web_sys::Element, &web_sys::IntersectionObserver) + 'static,
) -> crate::core::EnhanceResult<()> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible(&entry.target(), &observer);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn install_reveal_observer() -> crate::core::EnhanceResult<()> {
    use crate::core::scroll::REVEAL_OBSERVER;
    use wasm_bindgen::JsCast;

    let nodes = super::browser::document()?.query_selector_all(REVEAL_SELECTOR)?;
    let targets = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect();

    observe(targets, REVEAL_OBSERVER, |element, observer| {
        let _ = element.class_list().add_1("show");
        observer.unobserve(element);
    })
}

#[cfg(feature = "hydrate")]
fn install_section_observer(state: PageState, sections: &[&str]) -> crate::core::EnhanceResult<()> {
    use crate::core::scroll::SECTION_OBSERVER;

    let document = super::browser::document()?;
    let targets = sections
        .iter()
        .filter_map(|id| document.get_element_by_id(id))
        .collect();

    observe(targets, SECTION_OBSERVER, move |element, _| {
        state.active_section.set(Some(element.id()));
    })
}
