use leptos::prelude::*;

/// Inline stroke icon
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icons::path(name) />
        </svg>
    }
}

/// Icon names used on the page
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const ARROW_UP: &str = "arrow-up";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHAT: &str = "chat";
    pub const CHECK: &str = "check";

    /// SVG path data for `name`; unknown names draw nothing
    pub fn path(name: &str) -> &'static str {
        match name {
            MENU => "M4 6h16M4 12h16M4 18h16",
            X => "M6 18L18 6M6 6l12 12",
            ARROW_UP => "M12 19V5M5 12l7-7 7 7",
            CHEVRON_DOWN => "M19 9l-7 7-7-7",
            CHAT => "M21 12a8 8 0 01-11.6 7.1L3 21l1.9-6.4A8 8 0 1121 12z",
            CHECK => "M5 13l4 4L19 7",
            _ => "",
        }
    }
}
