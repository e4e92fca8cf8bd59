//! Attendance period validation.
//!
//! A period must span exactly one calendar month: it starts on the first day of
//! a month, ends on the last day of the same month, and no other period may
//! exist for that month.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::AttendancePeriod;

/// The accepted textual date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A period definition that passed every validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPeriod {
    /// The derived period key (`MM-YYYY`).
    pub id: String,
    /// First day of the month.
    pub start_date: NaiveDate,
    /// Last day of the month.
    pub end_date: NaiveDate,
}

/// Parses a zero-padded `YYYY-MM-DD` date.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("2025-06-01").unwrap(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
/// assert!(parse_date("01/06/2025").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    let malformed = || EngineError::MalformedDate {
        value: value.to_string(),
    };
    // chrono accepts unpadded fields; the format does not.
    if value.len() != 10 {
        return Err(malformed());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| malformed())
}

/// Returns the last calendar day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// Validates a proposed period definition.
///
/// Rules are checked in order: both dates parse, end is not before start,
/// both dates share a month, start is the 1st, end is the month's last day,
/// and finally `period_exists` is consulted with the derived key.
///
/// # Arguments
///
/// * `start` - Proposed start date, `YYYY-MM-DD`
/// * `end` - Proposed end date, `YYYY-MM-DD`
/// * `period_exists` - Lookup reporting whether a period already uses a key
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::validate_period;
///
/// let period = validate_period("2025-06-01", "2025-06-30", |_| Ok(false)).unwrap();
/// assert_eq!(period.id, "06-2025");
/// ```
pub fn validate_period<F>(start: &str, end: &str, period_exists: F) -> EngineResult<ValidatedPeriod>
where
    F: FnOnce(&str) -> EngineResult<bool>,
{
    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;

    if end_date < start_date {
        return Err(EngineError::EndBeforeStart {
            start: start_date,
            end: end_date,
        });
    }

    if start_date.year() != end_date.year() || start_date.month() != end_date.month() {
        return Err(EngineError::CrossMonthSpan {
            start: start_date,
            end: end_date,
        });
    }

    if start_date.day() != 1 {
        return Err(EngineError::NotFirstOfMonth { start: start_date });
    }

    let expected_end = last_day_of_month(start_date).ok_or_else(|| EngineError::MalformedDate {
        value: end.to_string(),
    })?;
    if end_date != expected_end {
        return Err(EngineError::NotLastOfMonth {
            end: end_date,
            expected: expected_end,
        });
    }

    let id = AttendancePeriod::key_for(start_date.month(), start_date.year());
    if period_exists(&id)? {
        return Err(EngineError::DuplicatePeriod { period_id: id });
    }

    Ok(ValidatedPeriod {
        id,
        start_date,
        end_date,
    })
}
