//! Per-instance carousel configuration
//!
//! Values arrive as loose strings (markup attributes or component props) and
//! never fail: anything unusable falls back to the defaults below.

use std::time::Duration;

use thiserror::Error;

/// Autoplay interval used when none is configured or the value is unusable
pub const DEFAULT_AUTOPLAY_MS: u64 = 2500;

/// Configured intervals must be strictly above this floor
pub const MIN_AUTOPLAY_MS: u64 = 1200;

/// Largest delay a browser timer accepts (2^31 - 1 ms)
pub const MAX_AUTOPLAY_MS: u64 = i32::MAX as u64;

/// Horizontal travel a touch must exceed to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 44.0;

/// Noun used in generated dot labels when none is configured
pub const DEFAULT_LABEL: &str = "slide";

/// Why a configured autoplay speed was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeedError {
    #[error("autoplay speed {0:?} is not a number")]
    NotANumber(String),

    #[error("autoplay speed {0}ms must be above {MIN_AUTOPLAY_MS}ms")]
    BelowFloor(i64),

    #[error("autoplay speed {0:?} exceeds the browser timer limit")]
    OutOfRange(String),
}

/// Parse an autoplay speed in milliseconds.
///
/// Only the leading integer is read: surrounding whitespace and a sign are
/// accepted, trailing characters are ignored (`"3000ms"` is 3000).
pub fn parse_autoplay_speed(raw: &str) -> Result<Duration, SpeedError> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return Err(SpeedError::NotANumber(raw.to_string()));
    }

    let magnitude: u64 = unsigned[..digits_len]
        .parse()
        .map_err(|_| SpeedError::OutOfRange(raw.to_string()))?;

    if negative {
        let value = i64::try_from(magnitude).map_or(i64::MIN, |m| -m);
        return Err(SpeedError::BelowFloor(value));
    }
    if magnitude <= MIN_AUTOPLAY_MS {
        return Err(SpeedError::BelowFloor(magnitude as i64));
    }
    if magnitude > MAX_AUTOPLAY_MS {
        return Err(SpeedError::OutOfRange(raw.to_string()));
    }

    Ok(Duration::from_millis(magnitude))
}

/// Configuration of a single carousel instance
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Delay between automatic advances
    pub interval: Duration,
    /// Noun used in the generated accessible name of each dot
    pub label: String,
    /// Minimum horizontal travel (px) for a touch to count as a swipe
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_AUTOPLAY_MS),
            label: DEFAULT_LABEL.to_string(),
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl CarouselConfig {
    /// Build a config from optional speed and label attributes.
    ///
    /// Empty strings count as absent. A speed that does not parse, or is at
    /// or below the floor, is replaced by [`DEFAULT_AUTOPLAY_MS`].
    pub fn from_attributes(speed: Option<&str>, label: Option<&str>) -> Self {
        let interval = match speed.filter(|s| !s.is_empty()) {
            None => Duration::from_millis(DEFAULT_AUTOPLAY_MS),
            Some(raw) => parse_autoplay_speed(raw).unwrap_or_else(|err| {
                leptos::logging::warn!("carousel: {err}, using {DEFAULT_AUTOPLAY_MS}ms");
                Duration::from_millis(DEFAULT_AUTOPLAY_MS)
            }),
        };

        let label = label
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LABEL)
            .to_string();

        Self {
            interval,
            label,
            ..Self::default()
        }
    }

    /// Override the swipe threshold
    pub fn with_swipe_threshold(mut self, px: f64) -> Self {
        self.swipe_threshold_px = px;
        self
    }

    /// Interval in whole milliseconds, as browser timers expect
    pub fn interval_ms(&self) -> u32 {
        u32::try_from(self.interval.as_millis()).unwrap_or(i32::MAX as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(
            parse_autoplay_speed("3200"),
            Ok(Duration::from_millis(3200))
        );
    }

    #[test]
    fn test_parse_ignores_trailing_text_and_leading_space() {
        assert_eq!(
            parse_autoplay_speed("  4000ms"),
            Ok(Duration::from_millis(4000))
        );
        assert_eq!(
            parse_autoplay_speed("+1500.75"),
            Ok(Duration::from_millis(1500))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_autoplay_speed("fast"),
            Err(SpeedError::NotANumber(_))
        ));
        assert!(matches!(
            parse_autoplay_speed(""),
            Err(SpeedError::NotANumber(_))
        ));
        assert!(matches!(
            parse_autoplay_speed("-"),
            Err(SpeedError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_floor_is_exclusive() {
        assert_eq!(parse_autoplay_speed("1200"), Err(SpeedError::BelowFloor(1200)));
        assert_eq!(
            parse_autoplay_speed("1201"),
            Ok(Duration::from_millis(1201))
        );
        assert_eq!(parse_autoplay_speed("-3000"), Err(SpeedError::BelowFloor(-3000)));
    }

    #[test]
    fn test_parse_rejects_values_beyond_timer_limit() {
        assert!(matches!(
            parse_autoplay_speed("2147483648"),
            Err(SpeedError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_autoplay_speed("99999999999999999999999"),
            Err(SpeedError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_config_defaults() {
        let config = CarouselConfig::from_attributes(None, None);
        assert_eq!(config.interval, Duration::from_millis(2500));
        assert_eq!(config.label, "slide");
        assert_eq!(config.swipe_threshold_px, 44.0);
    }

    #[test]
    fn test_config_speed_below_floor_falls_back() {
        let config = CarouselConfig::from_attributes(Some("800"), None);
        assert_eq!(config.interval, Duration::from_millis(2500));
    }

    #[test]
    fn test_config_malformed_speed_falls_back() {
        let config = CarouselConfig::from_attributes(Some("quick"), Some("galeri"));
        assert_eq!(config.interval, Duration::from_millis(2500));
        assert_eq!(config.label, "galeri");
    }

    #[test]
    fn test_config_empty_strings_count_as_absent() {
        let config = CarouselConfig::from_attributes(Some(""), Some(""));
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn test_config_custom_speed_and_threshold() {
        let config =
            CarouselConfig::from_attributes(Some("5000"), Some("testimoni")).with_swipe_threshold(60.0);
        assert_eq!(config.interval_ms(), 5000);
        assert_eq!(config.label, "testimoni");
        assert_eq!(config.swipe_threshold_px, 60.0);
    }
}
