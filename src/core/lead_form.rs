//! Quick lead form hand-off
//!
//! The form never talks to a server: its fields are folded into a fixed
//! WhatsApp message and the visitor continues the conversation there.

use crate::core::analytics::TrackedEvent;

/// Business WhatsApp number leads are sent to
pub const DEFAULT_WHATSAPP_NUMBER: &str = "6282192570822";

const GREETING: &str = "Assalamu'alaikum, saya ingin konsultasi Aqiqah dan Qurban.";

/// Values captured by the quick lead form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadForm {
    pub name: String,
    pub date: String,
    pub package: String,
}

impl LeadForm {
    /// Build a submission; surrounding whitespace is dropped from each field
    pub fn new(name: &str, date: &str, package: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            date: date.trim().to_string(),
            package: package.trim().to_string(),
        }
    }

    pub fn message(&self) -> String {
        [
            GREETING.to_string(),
            format!("Nama: {}", self.name),
            format!("Tanggal Pelaksanaan: {}", self.date),
            format!("Pilihan Layanan: {}", self.package),
        ]
        .join("\n")
    }

    /// Click-to-chat link carrying the message
    pub fn whatsapp_url(&self, number: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            number,
            urlencoding::encode(&self.message())
        )
    }

    pub fn analytics_event(&self) -> TrackedEvent {
        TrackedEvent::LeadFormSubmit {
            name: self.name.clone(),
            date: self.date.clone(),
            package: self.package.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_trimmed() {
        let form = LeadForm::new("  Siti ", "\t2026-12-01", "Qurban Sapi \n");
        assert_eq!(form.name, "Siti");
        assert_eq!(form.date, "2026-12-01");
        assert_eq!(form.package, "Qurban Sapi");
    }

    #[test]
    fn test_message_template() {
        let form = LeadForm::new("Siti", "2026-12-01", "Aqiqah Paket A");
        assert_eq!(
            form.message(),
            "Assalamu'alaikum, saya ingin konsultasi Aqiqah dan Qurban.\n\
             Nama: Siti\n\
             Tanggal Pelaksanaan: 2026-12-01\n\
             Pilihan Layanan: Aqiqah Paket A"
        );
    }

    #[test]
    fn test_empty_fields_still_produce_message() {
        let message = LeadForm::default().message();
        assert!(message.ends_with("Pilihan Layanan: "));
        assert_eq!(message.lines().count(), 4);
    }

    #[test]
    fn test_whatsapp_url_is_encoded() {
        let form = LeadForm::new("Ali & Sons", "1/2", "Paket A");
        let url = form.whatsapp_url(DEFAULT_WHATSAPP_NUMBER);

        assert!(url.starts_with("https://wa.me/6282192570822?text="));
        assert!(url.contains("Nama%3A%20Ali%20%26%20Sons%0A"));
        assert!(url.contains("1%2F2"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn test_analytics_event_carries_fields() {
        let form = LeadForm::new("Siti", "2026-12-01", "Qurban");
        assert_eq!(
            form.analytics_event(),
            TrackedEvent::LeadFormSubmit {
                name: "Siti".into(),
                date: "2026-12-01".into(),
                package: "Qurban".into(),
            }
        );
    }
}
