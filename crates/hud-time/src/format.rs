//! 24-hour display formatting for planetary clock values

use hud_core::SECONDS_PER_DAY;

const CENTIS_PER_DAY: u64 = 8_640_000;

/// Fold any clock value into [0, 86400)
#[inline]
pub fn normalize_day_seconds(value: f64) -> f64 {
    ((value % SECONDS_PER_DAY) + SECONDS_PER_DAY) % SECONDS_PER_DAY
}

/// Format a raw clock value as `HH:MM:SS.ss`
///
/// Values of any sign and magnitude are accepted; retrograde bodies produce
/// negative raw values and still read as a forward-running clock.
/// Non-finite values render as midnight.
pub fn format_clock(value: f64) -> String {
    let normalized = normalize_day_seconds(value);
    let centis = if normalized.is_finite() {
        // Rounding up at 23:59:59.995 wraps to midnight
        (normalized * 100.0).round() as u64 % CENTIS_PER_DAY
    } else {
        0
    };

    let hours = centis / 360_000;
    let minutes = (centis % 360_000) / 6_000;
    let seconds = (centis % 6_000) / 100;
    let fraction = centis % 100;
    format!("{:02}:{:02}:{:02}.{:02}", hours, minutes, seconds, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_clock(0.0), "00:00:00.00");
    }

    #[test]
    fn test_format_wraps_past_midnight() {
        // 25 hours raw
        assert_eq!(format_clock(90_000.0), "01:00:00.00");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_clock(3_723.45), "01:02:03.45");
        assert_eq!(format_clock(59.5), "00:00:59.50");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_clock(-1.0), "23:59:59.00");
        assert_eq!(format_clock(-86_400.0), "00:00:00.00");
    }

    #[test]
    fn test_format_end_of_day_rounds_to_midnight() {
        assert_eq!(format_clock(86_399.999), "00:00:00.00");
        assert_eq!(format_clock(86_399.99), "23:59:59.99");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_clock(f64::NAN), "00:00:00.00");
        assert_eq!(format_clock(f64::INFINITY), "00:00:00.00");
    }

    fn is_valid_clock(s: &str) -> bool {
        let b = s.as_bytes();
        if b.len() != 11 || b[2] != b':' || b[5] != b':' || b[8] != b'.' {
            return false;
        }
        let field = |r: std::ops::Range<usize>| s[r].parse::<u32>().ok();
        matches!(
            (field(0..2), field(3..5), field(6..8), field(9..11)),
            (Some(h), Some(m), Some(s), Some(_)) if h < 24 && m < 60 && s < 60
        )
    }

    proptest! {
        #[test]
        fn prop_format_periodic(v in -1.0e6f64..1.0e6, k in -500i64..500) {
            let shifted = v + SECONDS_PER_DAY * k as f64;
            prop_assert_eq!(format_clock(v), format_clock(shifted));
        }

        #[test]
        fn prop_format_always_valid(v in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            let text = format_clock(v);
            prop_assert!(is_valid_clock(&text), "{} -> {}", v, text);
        }

        #[test]
        fn prop_normalize_in_range(v in -1.0e9f64..1.0e9) {
            let n = normalize_day_seconds(v);
            prop_assert!((0.0..SECONDS_PER_DAY).contains(&n));
        }
    }
}
