//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Log filter used when neither `LOG_FILTER` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `tracing` filter directive for server logs
    /// Example: info,landing_enhancer=debug
    pub log_filter: Option<String>,

    /// Google Tag Manager container that consumes the page's `dataLayer`
    /// Example: GTM-ABC1234
    pub gtm_container_id: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var("LOG_FILTER")
                .or_else(|_| std::env::var("RUST_LOG"))
                .ok(),
            gtm_container_id: std::env::var("GTM_CONTAINER_ID").ok(),
        }
    }

    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self) -> &str {
        self.log_filter
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Container id, if set and shaped like `GTM-XXXX`.
    ///
    /// The id is written into an inline script, so anything else is dropped.
    pub fn gtm_container_id(&self) -> Option<&str> {
        self.gtm_container_id.as_deref().map(str::trim).filter(|id| {
            id.strip_prefix("GTM-")
                .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric()))
        })
    }

    /// Check if Tag Manager is configured
    pub fn has_gtm(&self) -> bool {
        self.gtm_container_id().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            log_filter: Some("debug".to_string()),
            gtm_container_id: Some("GTM-ABC1234".to_string()),
        };

        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.gtm_container_id(), Some("GTM-ABC1234"));
        assert!(config.has_gtm());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config::default();

        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert!(config.gtm_container_id().is_none());
        assert!(!config.has_gtm());
    }

    #[test]
    fn test_blank_log_filter_uses_default() {
        let config = Config {
            log_filter: Some("   ".to_string()),
            gtm_container_id: None,
        };

        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_gtm_id_is_trimmed() {
        let config = Config {
            log_filter: None,
            gtm_container_id: Some(" GTM-XYZ9 \n".to_string()),
        };

        assert_eq!(config.gtm_container_id(), Some("GTM-XYZ9"));
    }

    #[test]
    fn test_malformed_gtm_id_is_ignored() {
        for raw in ["", "GTM-", "UA-12345", "GTM-ab'); alert(1);//", "gtm-abc"] {
            let config = Config {
                log_filter: None,
                gtm_container_id: Some(raw.to_string()),
            };

            assert!(!config.has_gtm(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Values depend on the environment; only check that loading works
        let config = Config::from_env();

        let _ = config.log_filter();
        let _ = config.has_gtm();
    }
}
