//! Time-zone consistency checks.
//!
//! The engine classifies naive wall-clock timestamps. When a zone is
//! configured, this module flags shifts whose wall-clock span does not map
//! cleanly onto that zone. It only reports; the breakdown is never adjusted.

use chrono::{LocalResult, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::models::AuditWarning;

/// Warning code for a shift whose entry and exit have different UTC offsets.
pub const DST_TRANSITION_WARNING: &str = "DST_TRANSITION";

/// Warning code for a timestamp that is ambiguous or skipped in the zone.
pub const AMBIGUOUS_LOCAL_TIME_WARNING: &str = "AMBIGUOUS_LOCAL_TIME";

/// Checks a shift against a time zone and returns any warnings.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::{check_time_zone, DST_TRANSITION_WARNING};
/// use shift_pay_engine::models::parse_timestamp;
///
/// // US clocks move forward at 02:00 on 2025-03-09
/// let warnings = check_time_zone(
///     parse_timestamp("2025-03-08T22:00").unwrap(),
///     parse_timestamp("2025-03-09T06:00").unwrap(),
///     chrono_tz::America::New_York,
/// );
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(warnings[0].code, DST_TRANSITION_WARNING);
///
/// // Colombia has no daylight saving time
/// let warnings = check_time_zone(
///     parse_timestamp("2025-03-08T22:00").unwrap(),
///     parse_timestamp("2025-03-09T06:00").unwrap(),
///     chrono_tz::America::Bogota,
/// );
/// assert!(warnings.is_empty());
/// ```
pub fn check_time_zone(entry: NaiveDateTime, exit: NaiveDateTime, tz: Tz) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    let entry_local = tz.from_local_datetime(&entry);
    let exit_local = tz.from_local_datetime(&exit);

    for (label, timestamp, unique) in [
        ("entry", entry, matches!(entry_local, LocalResult::Single(_))),
        ("exit", exit, matches!(exit_local, LocalResult::Single(_))),
    ] {
        if !unique {
            warnings.push(AuditWarning {
                code: AMBIGUOUS_LOCAL_TIME_WARNING.to_string(),
                message: format!(
                    "The {} time {} is ambiguous or does not exist in {}",
                    label,
                    timestamp,
                    tz.name()
                ),
                severity: "high".to_string(),
            });
        }
    }

    if let (Some(start), Some(end)) = (entry_local.earliest(), exit_local.earliest()) {
        let start_offset = start.offset().fix();
        let end_offset = end.offset().fix();
        if start_offset != end_offset {
            warnings.push(AuditWarning {
                code: DST_TRANSITION_WARNING.to_string(),
                message: format!(
                    "UTC offset changes from {} to {} during the shift in {}; minutes were classified by wall-clock time",
                    start_offset,
                    end_offset,
                    tz.name()
                ),
                severity: "medium".to_string(),
            });
        }
    }

    warnings
}
