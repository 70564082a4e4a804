//! Minute classification.
//!
//! Assigns a single elapsed minute of a shift to one of the eight
//! [`PayCategory`] values from three facts: whether its date is a special
//! day, whether its wall-clock hour is in the night window, and whether it
//! lies past the ordinary-time threshold.

use crate::models::PayCategory;

/// First hour of the night window (21:00).
pub const NIGHT_START_HOUR: u32 = 21;

/// First hour after the night window (06:00).
pub const NIGHT_END_HOUR: u32 = 6;

/// Elapsed minutes after which every minute is overtime (8 hours).
pub const ORDINARY_MINUTES_THRESHOLD: u64 = 8 * 60;

/// Whether an hour of the day falls in the night window `[21:00, 06:00)`.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::is_night_hour;
///
/// assert!(!is_night_hour(20));
/// assert!(is_night_hour(21));
/// assert!(is_night_hour(5));
/// assert!(!is_night_hour(6));
/// ```
pub fn is_night_hour(hour: u32) -> bool {
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}

/// Whether the minute at `elapsed_minutes` from entry is overtime.
pub fn is_overtime_minute(elapsed_minutes: u64) -> bool {
    elapsed_minutes >= ORDINARY_MINUTES_THRESHOLD
}

/// Classifies one minute of a shift.
///
/// # Arguments
///
/// * `elapsed_minutes` - Minutes since the shift entry (0 for the first minute)
/// * `hour` - Wall-clock hour of the minute, 0-23
/// * `is_special_day` - Whether the minute's date is a Sunday or holiday
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::classify_minute;
/// use shift_pay_engine::models::PayCategory;
///
/// assert_eq!(classify_minute(0, 10, false), PayCategory::Rdo);
/// assert_eq!(classify_minute(479, 22, true), PayCategory::Rndf);
/// assert_eq!(classify_minute(480, 22, true), PayCategory::Hendf);
/// ```
pub fn classify_minute(elapsed_minutes: u64, hour: u32, is_special_day: bool) -> PayCategory {
    let night = is_night_hour(hour);
    let overtime = is_overtime_minute(elapsed_minutes);

    match (overtime, is_special_day, night) {
        (true, true, true) => PayCategory::Hendf,
        (true, true, false) => PayCategory::Heddf,
        (true, false, true) => PayCategory::Heno,
        (true, false, false) => PayCategory::Hedo,
        (false, true, true) => PayCategory::Rndf,
        (false, true, false) => PayCategory::Rddf,
        (false, false, true) => PayCategory::Rno,
        (false, false, false) => PayCategory::Rdo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_night_window_boundaries() {
        // 20:59 is day, 21:00 is night, 05:59 is night, 06:00 is day
        assert!(!is_night_hour(20));
        assert!(is_night_hour(21));
        assert!(is_night_hour(5));
        assert!(!is_night_hour(6));
    }

    #[test]
    fn test_night_window_covers_every_hour_correctly() {
        let night_hours: Vec<u32> = (0..24).filter(|h| is_night_hour(*h)).collect();
        assert_eq!(night_hours, vec![0, 1, 2, 3, 4, 5, 21, 22, 23]);
    }

    #[test]
    fn test_overtime_boundary() {
        assert!(!is_overtime_minute(0));
        assert!(!is_overtime_minute(479));
        assert!(is_overtime_minute(480));
        assert!(is_overtime_minute(10_000));
    }

    #[test]
    fn test_classification_table() {
        let cases = [
            (480, 22, true, PayCategory::Hendf),
            (480, 12, true, PayCategory::Heddf),
            (480, 22, false, PayCategory::Heno),
            (480, 12, false, PayCategory::Hedo),
            (0, 22, true, PayCategory::Rndf),
            (0, 12, true, PayCategory::Rddf),
            (0, 22, false, PayCategory::Rno),
            (0, 12, false, PayCategory::Rdo),
        ];

        for (elapsed, hour, special, expected) in cases {
            assert_eq!(
                classify_minute(elapsed, hour, special),
                expected,
                "elapsed={elapsed} hour={hour} special={special}"
            );
        }
    }

    #[test]
    fn test_overtime_boundary_classification() {
        assert_eq!(classify_minute(479, 15, false), PayCategory::Rdo);
        assert_eq!(classify_minute(480, 15, false), PayCategory::Hedo);
    }

    #[test]
    fn test_special_day_always_maps_to_special_categories() {
        for elapsed in [0, 479, 480, 2_000] {
            for hour in 0..24 {
                assert!(classify_minute(elapsed, hour, true).is_special_day());
                assert!(!classify_minute(elapsed, hour, false).is_special_day());
            }
        }
    }

    #[test]
    fn test_classification_agrees_with_category_flags() {
        for elapsed in [0, 479, 480] {
            for hour in 0..24 {
                for special in [false, true] {
                    let category = classify_minute(elapsed, hour, special);
                    assert_eq!(category.is_night(), is_night_hour(hour));
                    assert_eq!(category.is_overtime(), is_overtime_minute(elapsed));
                    assert_eq!(category.is_special_day(), special);
                }
            }
        }
    }
}
