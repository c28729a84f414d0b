//! Time unit letters used by durations and relative dates.

use crate::error::{CriteriaError, Result};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

/// Known unit letters and their length in seconds.
pub const TIME_UNITS: &[(char, f64)] = &[
    ('s', 1.0),
    ('m', MINUTE),
    ('h', HOUR),
    ('d', DAY),
    ('w', 7.0 * DAY),
    // 30-day month, 365-day year
    ('M', 30.0 * DAY),
    ('y', 365.0 * DAY),
];

/// Number of seconds in one `unit`.
///
/// Letters are case-sensitive: `m` is a minute and `M` a month.
pub fn seconds_per_unit(unit: char) -> Result<f64> {
    TIME_UNITS
        .iter()
        .find(|(letter, _)| *letter == unit)
        .map(|(_, seconds)| *seconds)
        .ok_or(CriteriaError::UnknownTimeUnit { unit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_units() {
        assert_eq!(seconds_per_unit('s'), Ok(1.0));
        assert_eq!(seconds_per_unit('m'), Ok(60.0));
        assert_eq!(seconds_per_unit('h'), Ok(3600.0));
        assert_eq!(seconds_per_unit('d'), Ok(86400.0));
        assert_eq!(seconds_per_unit('w'), Ok(604800.0));
        assert_eq!(seconds_per_unit('M'), Ok(2_592_000.0));
        assert_eq!(seconds_per_unit('y'), Ok(31_536_000.0));
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            seconds_per_unit('x'),
            Err(CriteriaError::UnknownTimeUnit { unit: 'x' })
        );
        assert!(seconds_per_unit('H').is_err());
    }
}
