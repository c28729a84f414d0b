//! `date`: relative offsets from now, or absolute date/time literals.
//!
//! A relative expression is a time unit letter, a sign and a count, e.g.
//! `d+3` (three days from now) or `h-12`. Anything else is read as an
//! absolute literal; literals without an offset are taken as UTC.

use std::fmt::Write;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use regex::Regex;

use crate::conversion::time::seconds_per_unit;
use crate::error::{CriteriaError, Result};
use crate::render::RenderTarget;
use crate::settings::DEFAULT_DATE_FORMAT;
use crate::value::Value;

use super::{Criteria, kind_mismatch};

/// Source of the current instant for relative dates.
pub type Clock = fn() -> DateTime<Utc>;

static RELATIVE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S)([+-])(\d+)$").expect("Invalid relative date regex"));

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S", // US
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",  // US: 01/15/2024
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%d %b %Y",  // 15 Jan 2024
    "%d %B %Y",  // 15 January 2024
];

#[derive(Debug, Clone)]
pub struct DateCriteria {
    clock: Clock,
    format: String,
}

impl Default for DateCriteria {
    fn default() -> Self {
        Self {
            clock: Utc::now,
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl DateCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `clock` instead of the system time for relative dates.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Set the `chrono` format string used by `present`.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    fn relative(&self, raw: &str, anchor: char, sign: &str, count: &str) -> Result<Value> {
        let invalid = || CriteriaError::InvalidDate {
            input: raw.to_string(),
        };

        let mut offset_ms = 1000.0 * seconds_per_unit(anchor)?;
        if sign == "-" {
            offset_ms = -offset_ms;
        }
        offset_ms *= count.parse::<f64>().map_err(|_| invalid())?;

        let offset = TimeDelta::try_milliseconds(offset_ms as i64).ok_or_else(invalid)?;
        (self.clock)()
            .checked_add_signed(offset)
            .map(Value::Date)
            .ok_or_else(invalid)
    }
}

/// Parse an absolute date or date-time literal.
fn parse_absolute(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Some(d.and_time(NaiveTime::MIN).and_utc());
        }
    }

    None
}

impl Criteria for DateCriteria {
    fn type_name(&self) -> &'static str {
        "date"
    }

    fn description(&self) -> &'static str {
        "Date literal, or unit letter with offset from now (d+3)"
    }

    fn sanitize(&self, raw: &str) -> Result<Value> {
        let trimmed = raw.trim();

        if let Some(caps) = RELATIVE_DATE.captures(trimmed) {
            let anchor = caps[1].chars().next().unwrap_or_default();
            return self.relative(raw, anchor, &caps[2], &caps[3]);
        }

        parse_absolute(trimmed)
            .map(Value::Date)
            .ok_or_else(|| CriteriaError::InvalidDate {
                input: raw.to_string(),
            })
    }

    fn present(&self, value: &Value, target: &mut dyn RenderTarget) -> Result<()> {
        let Value::Date(date) = value else {
            return Err(kind_mismatch(self.type_name(), value));
        };

        let mut text = String::new();
        write!(text, "{}", date.format(&self.format)).map_err(|_| {
            CriteriaError::InvalidDateFormat {
                format: self.format.clone(),
            }
        })?;
        target.set_text(&text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rendered;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn criteria() -> DateCriteria {
        DateCriteria::new().with_clock(fixed_now)
    }

    fn date(raw: &str) -> DateTime<Utc> {
        match criteria().sanitize(raw) {
            Ok(Value::Date(d)) => d,
            other => panic!("{raw:?} did not parse: {other:?}"),
        }
    }

    #[test]
    fn test_relative_forward_and_back() {
        assert_eq!(
            date("d+3"),
            Utc.with_ymd_and_hms(2024, 1, 18, 12, 0, 0).unwrap()
        );
        assert_eq!(
            date("h-12"),
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
        );
        assert_eq!(
            date(" w+1 "),
            Utc.with_ymd_and_hms(2024, 1, 22, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_relative_unknown_unit() {
        assert_eq!(
            criteria().sanitize("q+3"),
            Err(CriteriaError::UnknownTimeUnit { unit: 'q' })
        );
    }

    #[test]
    fn test_absolute_formats() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(date("2024-01-15"), midnight);
        assert_eq!(date("2024/01/15"), midnight);
        assert_eq!(date("01/15/2024"), midnight);
        assert_eq!(date("Jan 15, 2024"), midnight);
        assert_eq!(date("15 January 2024"), midnight);
        assert_eq!(
            date("2024-01-15T10:30:00"),
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
        );
        assert_eq!(
            date("2024-01-15T10:30:00+02:00"),
            Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(
            criteria().sanitize("someday"),
            Err(CriteriaError::InvalidDate {
                input: "someday".to_string()
            })
        );
        assert!(criteria().sanitize("2024-13-01").is_err());
    }

    #[test]
    fn test_present_uses_format() {
        let value = Value::Date(fixed_now());
        let mut rendered = Rendered::new();
        criteria().present(&value, &mut rendered).unwrap();
        assert_eq!(rendered.text.as_deref(), Some("2024-01-15"));

        criteria()
            .with_format("%d/%m/%Y")
            .present(&value, &mut rendered)
            .unwrap();
        assert_eq!(rendered.text.as_deref(), Some("15/01/2024"));
    }

    #[test]
    fn test_present_invalid_format() {
        let mut rendered = Rendered::new();
        assert_eq!(
            criteria()
                .with_format("%Q")
                .present(&Value::Date(fixed_now()), &mut rendered),
            Err(CriteriaError::InvalidDateFormat {
                format: "%Q".to_string()
            })
        );
    }
}
