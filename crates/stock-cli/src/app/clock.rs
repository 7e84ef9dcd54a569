//! Timestamps in a configured timezone.

use chrono::Utc;
use chrono_tz::Tz;
use stock_core::clock::TIMESTAMP_FORMAT;
use stock_core::Clock;

/// Wall-clock time rendered in a fixed IANA timezone.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for ZonedClock {
    fn timestamp(&self) -> String {
        Utc::now()
            .with_timezone(&self.tz)
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }
}

/// Parse a configured timezone. Empty and "auto" mean system local time.
pub fn parse_timezone(value: &str) -> anyhow::Result<Option<Tz>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    trimmed
        .parse::<Tz>()
        .map(Some)
        .map_err(|_| anyhow::anyhow!("Invalid timezone: {}", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("auto").unwrap(), None);
        assert_eq!(parse_timezone(" ").unwrap(), None);
        assert_eq!(
            parse_timezone("Europe/Lisbon").unwrap(),
            Some(chrono_tz::Europe::Lisbon)
        );
        assert!(parse_timezone("Mars/Olympus").is_err());
    }

    #[test]
    fn test_zoned_clock_format() {
        let stamp = ZonedClock::new(chrono_tz::UTC).timestamp();
        assert_eq!(stamp.len(), "2024-03-01 09:30:00".len());
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
    }
}
