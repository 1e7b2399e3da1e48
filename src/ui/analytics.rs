//! Analytics context for components
//!
//! In the browser events are pushed onto `window.dataLayer`, which Google
//! Tag Manager picks up when it is installed. Without it the array simply
//! accumulates.

use std::collections::BTreeMap;
use std::sync::Arc;

use leptos::prelude::*;

use crate::core::analytics::{AnalyticsSink, LogSink, TrackedEvent, track};

/// Shared handle to the page's analytics sink
#[derive(Clone)]
pub struct AnalyticsContext {
    sink: Arc<dyn AnalyticsSink + Send + Sync>,
}

impl AnalyticsContext {
    pub fn new(sink: Arc<dyn AnalyticsSink + Send + Sync>) -> Self {
        Self { sink }
    }

    fn log_only() -> Self {
        Self::new(Arc::new(LogSink))
    }

    /// Fire and forget
    pub fn track(&self, event: TrackedEvent) {
        track(self.sink.as_ref(), &event);
    }
}

impl std::fmt::Debug for AnalyticsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsContext").finish_non_exhaustive()
    }
}

/// Sink writing to the Tag Manager `dataLayer`
#[derive(Debug, Clone, Copy, Default)]
pub struct DataLayerSink;

#[cfg(feature = "hydrate")]
impl DataLayerSink {
    fn push(entry: &crate::core::analytics::DataLayerEntry) -> crate::core::EnhanceResult<()> {
        use crate::core::EnhanceError;
        use serde::Serialize;
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or(EnhanceError::NoWindow)?;
        let key = JsValue::from_str("dataLayer");

        let mut layer = js_sys::Reflect::get(&window, &key)?;
        if !js_sys::Array::is_array(&layer) {
            layer = js_sys::Array::new().into();
            js_sys::Reflect::set(&window, &key, &layer)?;
        }

        let value = entry.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
        // `push` is looked up on the object, so Tag Manager's override is honoured
        layer.unchecked_into::<js_sys::Array>().push(&value);
        Ok(())
    }
}

impl AnalyticsSink for DataLayerSink {
    fn record(&self, event_name: &str, attributes: &BTreeMap<String, String>) {
        #[cfg(feature = "hydrate")]
        {
            let entry = crate::core::analytics::DataLayerEntry::new(event_name, attributes);
            if let Err(err) = Self::push(&entry) {
                leptos::logging::warn!("analytics: dropped {event_name}: {err}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        LogSink.record(event_name, attributes);
    }
}

/// Provide the analytics context to the application
pub fn provide_analytics_context() -> AnalyticsContext {
    let ctx = AnalyticsContext::new(Arc::new(DataLayerSink));
    provide_context(ctx.clone());
    ctx
}

/// Use the analytics context, falling back to logging only
pub fn use_analytics() -> AnalyticsContext {
    use_context::<AnalyticsContext>().unwrap_or_else(AnalyticsContext::log_only)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analytics::MemorySink;

    #[test]
    fn test_context_forwards_to_sink() {
        let sink = Arc::new(MemorySink::new());
        let ctx = AnalyticsContext::new(sink.clone());

        ctx.track(TrackedEvent::BackToTopClick);
        ctx.clone().track(TrackedEvent::CtaClick {
            cta_id: "hero_whatsapp".into(),
        });

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event, "back_to_top_click");
        assert_eq!(entries[1].attributes["cta_id"], "hero_whatsapp");
    }
}
