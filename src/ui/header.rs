//! Site header with in-page navigation
//!
//! Navigation links scroll smoothly to their section instead of jumping,
//! close the mobile menu and report a `nav_click`. The link of the section
//! in view is highlighted.

use leptos::prelude::*;

use crate::core::TrackedEvent;
use crate::ui::analytics::use_analytics;
use crate::ui::browser;
use crate::ui::icon::{Icon, icons};
use crate::ui::page_effects::use_page_state;

/// In-page navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Fragment including `#`
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// Element id the link points at
    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

/// Header component with mobile menu support
#[component]
pub fn Header(
    /// Brand shown on the left
    brand: &'static str,
    links: &'static [NavLink],
) -> impl IntoView {
    let page = use_page_state();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="header" class:scrolled=move || page.chrome.get().header_scrolled>
            <div class="container header-inner">
                <a href="#beranda" class="brand">{brand}</a>

                <button
                    id="menuToggle"
                    class="menu-toggle"
                    class:active=move || menu_open.get()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    aria-label="Buka menu"
                    aria-controls="navLinks"
                    aria-expanded=move || menu_open.get().to_string()
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon name=icons::X /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU /> }.into_any()
                        }
                    }}
                </button>

                <nav id="navLinks" class="nav-links" class:open=move || menu_open.get()>
                    {links
                        .iter()
                        .map(|link| view! { <NavAnchor link=*link on_navigate=set_menu_open /> })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

/// Single navigation link
#[component]
fn NavAnchor(link: NavLink, on_navigate: WriteSignal<bool>) -> impl IntoView {
    let page = use_page_state();
    let analytics = use_analytics();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();

        match browser::scroll_into_view(link.href) {
            Ok(()) => analytics.track(TrackedEvent::NavClick {
                target: link.href.to_string(),
            }),
            Err(err) => leptos::logging::warn!("nav: {err}"),
        }
        on_navigate.set(false);
    };

    view! {
        <a
            href=link.href
            class:active=move || {
                page.active_section.with(|active| active.as_deref() == Some(link.section_id()))
            }
            on:click=on_click
        >
            {link.label}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_strips_hash() {
        let link = NavLink {
            href: "#paket",
            label: "Paket",
        };
        assert_eq!(link.section_id(), "paket");
    }
}
