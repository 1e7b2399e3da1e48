//! Behavioral analytics events
//!
//! Events are fire-and-forget: a sink records an event name plus flat string
//! attributes and never reports failure to the caller.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::Serialize;

/// Event recorded by the landing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackedEvent {
    /// A tracked call-to-action was clicked
    CtaClick { cta_id: String },
    /// An in-page navigation link scrolled to its section
    NavClick { target: String },
    BackToTopClick,
    /// The quick lead form was submitted
    LeadFormSubmit {
        name: String,
        date: String,
        package: String,
    },
    /// The reader scrolled past a depth mark (percent)
    ScrollDepth { percent: u8 },
}

impl TrackedEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TrackedEvent::CtaClick { .. } => "cta_click",
            TrackedEvent::NavClick { .. } => "nav_click",
            TrackedEvent::BackToTopClick => "back_to_top_click",
            TrackedEvent::LeadFormSubmit { .. } => "lead_form_submit",
            TrackedEvent::ScrollDepth { .. } => "scroll_depth",
        }
    }

    pub fn attributes(&self) -> BTreeMap<String, String> {
        let pairs: Vec<(&str, String)> = match self {
            TrackedEvent::CtaClick { cta_id } => vec![("cta_id", cta_id.clone())],
            TrackedEvent::NavClick { target } => vec![("target", target.clone())],
            TrackedEvent::BackToTopClick => Vec::new(),
            TrackedEvent::LeadFormSubmit {
                name,
                date,
                package,
            } => vec![
                ("nama", name.clone()),
                ("tanggal", date.clone()),
                ("paket", package.clone()),
            ],
            TrackedEvent::ScrollDepth { percent } => {
                vec![("depth_percent", percent.to_string())]
            }
        };

        pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}

/// Destination for analytics events
pub trait AnalyticsSink {
    fn record(&self, event_name: &str, attributes: &BTreeMap<String, String>);
}

/// Record a [`TrackedEvent`] on any sink
pub fn track(sink: &(impl AnalyticsSink + ?Sized), event: &TrackedEvent) {
    sink.record(event.name(), &event.attributes());
}

/// Object pushed onto a Tag Manager style `dataLayer`
///
/// Serializes flat: `{"event": "...", "<attr>": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataLayerEntry {
    pub event: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl DataLayerEntry {
    pub fn new(event_name: &str, attributes: &BTreeMap<String, String>) -> Self {
        Self {
            event: event_name.to_string(),
            attributes: attributes.clone(),
        }
    }
}

/// Sink that only writes events to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn record(&self, event_name: &str, attributes: &BTreeMap<String, String>) {
        leptos::logging::log!("analytics: {event_name} {attributes:?}");
    }
}

/// Sink that keeps every entry in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<DataLayerEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<DataLayerEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl AnalyticsSink for MemorySink {
    fn record(&self, event_name: &str, attributes: &BTreeMap<String, String>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(DataLayerEntry::new(event_name, attributes));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(
            TrackedEvent::CtaClick {
                cta_id: "hero".into()
            }
            .name(),
            "cta_click"
        );
        assert_eq!(TrackedEvent::BackToTopClick.name(), "back_to_top_click");
        assert_eq!(
            TrackedEvent::ScrollDepth { percent: 50 }.name(),
            "scroll_depth"
        );
    }

    #[test]
    fn test_lead_form_attributes_use_form_field_names() {
        let event = TrackedEvent::LeadFormSubmit {
            name: "Budi".into(),
            date: "2026-11-02".into(),
            package: "Aqiqah Premium".into(),
        };
        let attrs = event.attributes();

        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs["nama"], "Budi");
        assert_eq!(attrs["tanggal"], "2026-11-02");
        assert_eq!(attrs["paket"], "Aqiqah Premium");
    }

    #[test]
    fn test_back_to_top_has_no_attributes() {
        assert!(TrackedEvent::BackToTopClick.attributes().is_empty());
    }

    #[test]
    fn test_track_records_on_sink() {
        let sink = MemorySink::new();
        track(
            &sink,
            &TrackedEvent::NavClick {
                target: "#paket".into(),
            },
        );
        track(&sink, &TrackedEvent::ScrollDepth { percent: 75 });

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event, "nav_click");
        assert_eq!(entries[0].attributes["target"], "#paket");
        assert_eq!(entries[1].attributes["depth_percent"], "75");
    }

    #[test]
    fn test_data_layer_entry_serializes_flat() {
        let entry = DataLayerEntry::new(
            "cta_click",
            &TrackedEvent::CtaClick {
                cta_id: "pricing".into(),
            }
            .attributes(),
        );
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "event": "cta_click", "cta_id": "pricing" })
        );
    }
}
