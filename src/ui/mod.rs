pub mod analytics;
pub mod browser;
pub mod cta;
pub mod header;
pub mod icon;
pub mod lead_form;
pub mod page_effects;
pub mod pages;
pub mod slider;

pub use analytics::{AnalyticsContext, provide_analytics_context, use_analytics};
pub use cta::{BackToTop, TrackedLink};
pub use header::{Header, NavLink};
pub use icon::{Icon, icons};
pub use lead_form::QuickLeadForm;
pub use pages::{LandingPage, NotFoundPage};
pub use slider::Slider;
