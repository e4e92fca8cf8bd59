//! Working-day counting and hourly rate derivation.
//!
//! Rates are derived from the monthly base salary and the number of
//! Monday-Friday dates in the period, independent of actual attendance:
//!
//! ```text
//! hourly_rate   = base_salary / (working_days * hours_per_day)
//! overtime_rate = hourly_rate * overtime_multiplier
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Explicit rate constants passed into the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Paid hours per attended day.
    pub hours_per_day: Decimal,
    /// Multiplier applied to the hourly rate for overtime.
    pub overtime_multiplier: Decimal,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            hours_per_day: Decimal::from(8),
            overtime_multiplier: Decimal::from(2),
        }
    }
}

/// Rates derived for one employee in one period. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRates {
    /// Monday-Friday dates in the period.
    pub working_days: u32,
    /// Pay per ordinary hour.
    pub hourly_rate: Decimal,
    /// Pay per overtime hour.
    pub overtime_rate: Decimal,
}

/// Returns true for Saturdays and Sundays.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts Monday-Friday dates in `[start, end]`, inclusive.
///
/// Returns 0 when `end` is before `start`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::count_working_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
/// assert_eq!(count_working_days(start, end), 21);
/// ```
pub fn count_working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| !is_weekend(*day))
        .count() as u32
}

/// Derives hourly and overtime rates for a base salary over a date range.
///
/// # Errors
///
/// Returns [`EngineError::DegeneratePeriod`] if the range holds no working days.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{resolve_rates, RateConfig};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rates = resolve_rates(
///     Decimal::from(3000),
///     NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
///     &RateConfig::default(),
/// ).unwrap();
/// assert_eq!(rates.working_days, 21);
/// assert_eq!(rates.overtime_rate, rates.hourly_rate * Decimal::from(2));
/// ```
pub fn resolve_rates(
    base_salary: Decimal,
    start: NaiveDate,
    end: NaiveDate,
    config: &RateConfig,
) -> EngineResult<ResolvedRates> {
    let working_days = count_working_days(start, end);
    rates_for_working_days(base_salary, working_days, config)
        .ok_or(EngineError::DegeneratePeriod { start, end })
}

/// Derives rates from an already counted number of working days.
///
/// Returns `None` when the divisor is zero.
pub fn rates_for_working_days(
    base_salary: Decimal,
    working_days: u32,
    config: &RateConfig,
) -> Option<ResolvedRates> {
    let paid_hours = Decimal::from(working_days) * config.hours_per_day;
    let hourly_rate = base_salary.checked_div(paid_hours)?;

    Some(ResolvedRates {
        working_days,
        hourly_rate,
        overtime_rate: hourly_rate * config.overtime_multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::round_money;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_june_2025_has_21_working_days() {
        assert_eq!(count_working_days(date(2025, 6, 1), date(2025, 6, 30)), 21);
    }

    #[test]
    fn test_february_2025_has_20_working_days() {
        assert_eq!(count_working_days(date(2025, 2, 1), date(2025, 2, 28)), 20);
    }

    #[test]
    fn test_weekend_only_range_has_no_working_days() {
        // 2025-06-07 is a Saturday
        assert_eq!(count_working_days(date(2025, 6, 7), date(2025, 6, 8)), 0);
    }

    #[test]
    fn test_reversed_range_has_no_working_days() {
        assert_eq!(count_working_days(date(2025, 6, 30), date(2025, 6, 1)), 0);
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2025, 6, 7)));
        assert!(is_weekend(date(2025, 6, 8)));
        assert!(!is_weekend(date(2025, 6, 9)));
    }

    #[test]
    fn test_hourly_rate_for_3000_over_21_days() {
        let rates = resolve_rates(
            dec("3000"),
            date(2025, 6, 1),
            date(2025, 6, 30),
            &RateConfig::default(),
        )
        .unwrap();

        assert_eq!(rates.working_days, 21);
        assert_eq!(rates.hourly_rate, dec("3000") / dec("168"));
        assert_eq!(round_money(rates.hourly_rate), dec("17.86"));
        assert_eq!(round_money(rates.overtime_rate), dec("35.71"));
    }

    #[test]
    fn test_degenerate_period_fails_explicitly() {
        let result = resolve_rates(
            dec("3000"),
            date(2025, 6, 7),
            date(2025, 6, 8),
            &RateConfig::default(),
        );
        match result {
            Err(EngineError::DegeneratePeriod { start, end }) => {
                assert_eq!(start, date(2025, 6, 7));
                assert_eq!(end, date(2025, 6, 8));
            }
            other => panic!("Expected DegeneratePeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_rate_config_is_honoured() {
        let config = RateConfig {
            hours_per_day: dec("7.5"),
            overtime_multiplier: dec("1.5"),
        };
        let rates = rates_for_working_days(dec("1500"), 20, &config).unwrap();
        assert_eq!(rates.hourly_rate, dec("10"));
        assert_eq!(rates.overtime_rate, dec("15"));
    }

    proptest! {
        #[test]
        fn prop_working_days_matches_weekday_filter(
            offset in 0i64..20_000,
            len in 0i64..120,
        ) {
            let start = date(1990, 1, 1) + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(len);

            let mut expected = 0u32;
            let mut day = start;
            while day <= end {
                if day.weekday().number_from_monday() <= 5 {
                    expected += 1;
                }
                day = day.succ_opt().unwrap();
            }

            prop_assert_eq!(count_working_days(start, end), expected);
        }

        #[test]
        fn prop_full_weeks_have_five_working_days_each(offset in 0i64..20_000, weeks in 0i64..10) {
            let start = date(1990, 1, 1) + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(weeks * 7 - 1);
            prop_assert_eq!(count_working_days(start, end), (weeks * 5) as u32);
        }
    }
}
