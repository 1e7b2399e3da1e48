//! Tracked call-to-action links and the back-to-top button

use leptos::prelude::*;

use crate::core::TrackedEvent;
use crate::ui::analytics::use_analytics;
use crate::ui::browser;
use crate::ui::icon::{Icon, icons};
use crate::ui::page_effects::use_page_state;

/// Link that reports a `cta_click` with its id before following `href`
#[component]
pub fn TrackedLink(
    #[prop(into)]
    href: String,
    /// Identifier reported as `cta_id`
    #[prop(into)]
    track_id: String,
    #[prop(default = "btn btn-primary")]
    class: &'static str,
    /// Open in a new tab
    #[prop(optional)]
    external: bool,
    children: Children,
) -> impl IntoView {
    let analytics = use_analytics();
    let cta_id = track_id.clone();

    view! {
        <a
            href=href
            class=class
            data-track=track_id
            target=external.then_some("_blank")
            rel=external.then_some("noopener")
            on:click=move |_| {
                analytics.track(TrackedEvent::CtaClick {
                    cta_id: cta_id.clone(),
                })
            }
        >
            {children()}
        </a>
    }
}

/// Floating button returning to the top of the page
///
/// Shown once the reader has scrolled past the fold.
#[component]
pub fn BackToTop() -> impl IntoView {
    let page = use_page_state();
    let analytics = use_analytics();

    view! {
        <button
            id="backToTop"
            type="button"
            class="back-to-top"
            class:show=move || page.chrome.get().back_to_top_visible
            aria-label="Kembali ke atas"
            on:click=move |_| {
                if let Err(err) = browser::scroll_to_top() {
                    leptos::logging::warn!("back to top: {err}");
                }
                analytics.track(TrackedEvent::BackToTopClick);
            }
        >
            <Icon name=icons::ARROW_UP />
        </button>
    }
}
