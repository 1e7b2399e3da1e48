//! Thin wrappers over the browser APIs the page uses
//!
//! On the server every call reports [`EnhanceError::NoWindow`]; event
//! handlers that call these never run there anyway.

use crate::core::{EnhanceError, EnhanceResult};

#[cfg(feature = "hydrate")]
fn window() -> EnhanceResult<web_sys::Window> {
    web_sys::window().ok_or(EnhanceError::NoWindow)
}

#[cfg(feature = "hydrate")]
pub(crate) fn document() -> EnhanceResult<web_sys::Document> {
    window()?.document().ok_or(EnhanceError::NoDocument)
}

/// Vertical scroll offset, `0.0` when unknown
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        window()
            .and_then(|w| w.scroll_y().map_err(EnhanceError::from))
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Document scroll measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

pub fn scroll_metrics() -> EnhanceResult<ScrollMetrics> {
    #[cfg(feature = "hydrate")]
    {
        let window = window()?;
        let root = document()?
            .document_element()
            .ok_or_else(|| EnhanceError::MissingElement("html".to_string()))?;

        Ok(ScrollMetrics {
            scroll_top: window.scroll_y()?,
            scroll_height: f64::from(root.scroll_height()),
            viewport_height: window.inner_height()?.as_f64().unwrap_or(0.0),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(EnhanceError::NoWindow)
    }
}

/// Smoothly scroll the element matching `selector` to the top of the viewport
pub fn scroll_into_view(selector: &str) -> EnhanceResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let target = document()?
            .query_selector(selector)?
            .ok_or_else(|| EnhanceError::MissingElement(selector.to_string()))?;

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selector;
        Err(EnhanceError::NoWindow)
    }
}

/// Smoothly scroll back to the top of the page
pub fn scroll_to_top() -> EnhanceResult<()> {
    #[cfg(feature = "hydrate")]
    {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window()?.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(EnhanceError::NoWindow)
    }
}

/// Open `url` in a new browsing context without an opener reference
pub fn open_in_new_tab(url: &str) -> EnhanceResult<()> {
    #[cfg(feature = "hydrate")]
    {
        window()?.open_with_url_and_target_and_features(url, "_blank", "noopener")?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(EnhanceError::NoWindow)
    }
}
