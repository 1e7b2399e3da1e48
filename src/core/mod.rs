//! Platform-independent landing page logic
//!
//! Everything here runs on the host as well as in the browser; DOM and timer
//! access lives in [`crate::ui`].

pub mod analytics;
pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod lead_form;
pub mod scroll;

pub use analytics::{AnalyticsSink, TrackedEvent, track};
pub use carousel::{Carousel, CarouselConfig, CarouselEvent, Scheduler};
pub use error::{EnhanceError, EnhanceResult};
pub use lead_form::LeadForm;
pub use scroll::{ScrollChrome, ScrollDepthTracker};
