//! Time and pace formatting for the display layer.

use crate::error::{PacerError, Result};

/// Format seconds as "m:ss.s" (seconds zero-padded below 10).
///
/// # Example
/// ```
/// use track_pacer::format_time;
///
/// assert_eq!(format_time(78.0), "1:18.0");
/// assert_eq!(format_time(5.3), "0:05.3");
/// ```
pub fn format_time(seconds: f64) -> String {
    let mins = (seconds / 60.0).floor() as u64;
    let secs = seconds % 60.0;
    format!("{mins}:{secs:04.1}")
}

/// Format a pace (seconds per kilometer) as "m:ss" for segment headers.
///
/// Rounds to whole seconds before splitting so 179.7 renders "3:00", not
/// "2:60".
pub fn format_pace(seconds_per_km: f64) -> String {
    let total = seconds_per_km.round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Parse a "m:ss" pace string to total seconds per kilometer.
///
/// Rejects anything but two numeric fields with seconds in `[0, 60)`;
/// callers must check the result before use.
///
/// # Example
/// ```
/// use track_pacer::parse_pace;
///
/// assert_eq!(parse_pace("3:15").unwrap(), 195.0);
/// assert!(parse_pace("3:75").is_err());
/// ```
pub fn parse_pace(input: &str) -> Result<f64> {
    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() != 2 {
        return Err(PacerError::invalid_pace(input, "expected m:ss"));
    }

    let mins: u32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| PacerError::invalid_pace(input, "minutes are not a non-negative integer"))?;
    let secs: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| PacerError::invalid_pace(input, "seconds are not a number"))?;

    if !secs.is_finite() || secs < 0.0 || secs >= 60.0 {
        return Err(PacerError::invalid_pace(input, "seconds must be in 0-59"));
    }

    Ok(mins as f64 * 60.0 + secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00.0");
        assert_eq!(format_time(5.3), "0:05.3");
        assert_eq!(format_time(78.0), "1:18.0");
        assert_eq!(format_time(600.0), "10:00.0");
        assert_eq!(format_time(137.45), "2:17.4");
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(195.0), "3:15");
        assert_eq!(format_pace(60.0), "1:00");
        assert_eq!(format_pace(179.7), "3:00");
    }

    #[test]
    fn test_parse_pace_valid() {
        assert_eq!(parse_pace("3:15").unwrap(), 195.0);
        assert_eq!(parse_pace("0:59").unwrap(), 59.0);
        assert_eq!(parse_pace("10:00").unwrap(), 600.0);
        assert_eq!(parse_pace("4:30.5").unwrap(), 270.5);
    }

    #[test]
    fn test_parse_pace_invalid() {
        for input in ["", "315", "3:15:0", "3:75", "3:60", "-3:15", "3:-5", "a:b", "3:nan"] {
            assert!(
                matches!(parse_pace(input), Err(PacerError::InvalidPace { .. })),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_pace_round_trips_through_formatter() {
        for pace in [195.0, 210.0, 600.0, 59.0] {
            assert_eq!(parse_pace(&format_pace(pace)).unwrap(), pace);
        }
    }

    proptest! {
        #[test]
        fn prop_format_time_round_trips_within_rounding(s in 0.0f64..36_000.0) {
            let formatted = format_time(s);
            let (mins, secs) = formatted.split_once(':').unwrap();
            let back = mins.parse::<f64>().unwrap() * 60.0 + secs.parse::<f64>().unwrap();
            // One decimal place of seconds
            prop_assert!((back - s).abs() <= 0.05 + 1e-9);
        }

        #[test]
        fn prop_parse_pace_accepts_own_format(total in 0u32..6000) {
            let input = format!("{}:{:02}", total / 60, total % 60);
            prop_assert_eq!(parse_pace(&input).unwrap(), total as f64);
        }
    }
}
