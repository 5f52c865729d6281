//! Legacy period-index conversion.
//!
//! Older clients address assignments by a fortnight index instead of an
//! explicit date range. Each period is 14 days, with period 0 starting on
//! 2026-01-01.

use chrono::{Duration, NaiveDate};

use crate::error::CoreError;

/// First day of period 0.
const BASE_YEAR: i32 = 2026;
const BASE_MONTH: u32 = 1;
const BASE_DAY: u32 = 1;

/// Days covered by one period.
const PERIOD_DAYS: i64 = 14;

/// Convert a period index into an inclusive `(start, end)` date pair,
/// both formatted `YYYY-MM-DD`.
///
/// Period 0 is 2026-01-01 through 2026-01-14; each subsequent period starts
/// 14 days later. Negative indices count backwards from the base date.
pub fn period_to_dates(period: i64) -> Result<(String, String), CoreError> {
    let base = NaiveDate::from_ymd_opt(BASE_YEAR, BASE_MONTH, BASE_DAY)
        .ok_or_else(|| CoreError::Internal("invalid period base date".into()))?;

    let offset = period
        .checked_mul(PERIOD_DAYS)
        .and_then(Duration::try_days)
        .ok_or_else(|| CoreError::validation(format!("period {period} is out of range")))?;
    let start = base
        .checked_add_signed(offset)
        .ok_or_else(|| CoreError::validation(format!("period {period} is out of range")))?;
    let end = start
        .checked_add_signed(Duration::days(PERIOD_DAYS - 1))
        .ok_or_else(|| CoreError::validation(format!("period {period} is out of range")))?;

    Ok((
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    ))
}
