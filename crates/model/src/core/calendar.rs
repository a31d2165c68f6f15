//! Calendar arithmetic on naive instants.
//!
//! Both operations are total: when chrono cannot represent the result the
//! caller receives `None` and treats the anchor as unknown.

use super::{period::Period, week::WeekStart};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Move `instant` back to the first moment of the period containing it.
pub fn truncate_to_start(
    instant: NaiveDateTime,
    period: Period,
    week_start: WeekStart,
) -> Option<NaiveDateTime> {
    let date = instant.date();
    let start = match period {
        Period::Days => Some(date),
        Period::Weeks => date.checked_sub_days(Days::new(week_start.days_since(date.weekday()))),
        Period::Months => date.with_day(1),
        Period::Quarters => NaiveDate::from_ymd_opt(date.year(), (date.month0() / 3) * 3 + 1, 1),
        Period::Years => NaiveDate::from_ymd_opt(date.year(), 1, 1),
    }?;
    Some(start.and_time(NaiveTime::MIN))
}

/// Add `count` periods to `instant` (negative counts move backwards).
///
/// Month based periods clamp the day of month, so Mar 31 minus one month is
/// Feb 28 (or 29).
pub fn shift(instant: NaiveDateTime, period: Period, count: i64) -> Option<NaiveDateTime> {
    match period {
        Period::Days => shift_days(instant, count),
        Period::Weeks => shift_days(instant, count.checked_mul(7)?),
        Period::Months => shift_months(instant, count),
        Period::Quarters => shift_months(instant, count.checked_mul(3)?),
        Period::Years => shift_months(instant, count.checked_mul(12)?),
    }
}

fn shift_days(instant: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let delta = Days::new(days.unsigned_abs());
    if days >= 0 {
        instant.checked_add_days(delta)
    } else {
        instant.checked_sub_days(delta)
    }
}

fn shift_months(instant: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let delta = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        instant.checked_add_months(delta)
    } else {
        instant.checked_sub_months(delta)
    }
}
