use chrono::NaiveDate;

use crate::error::AnalemmaError;

pub fn is_leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if is_leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

/// Inverse of [`month_day`]: 1-based ordinal of a civil date.
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32, AnalemmaError> {
    if !(1..=12).contains(&month) {
        return Err(AnalemmaError::MonthOutOfRange { month });
    }
    let dim = days_in_months(year);
    let month_len = dim[(month - 1) as usize];
    if day == 0 || day > month_len {
        return Err(AnalemmaError::DayOfMonthOutOfRange {
            year,
            month,
            day,
            days_in_month: month_len,
        });
    }
    let before: u32 = dim[..(month - 1) as usize].iter().sum();
    Ok(before + day)
}

/// `(month, day)` reached by adding `day - 1` days to January 1 of `year`.
///
/// Proleptic Gregorian arithmetic, valid for every `i32` year.
pub fn month_day(year: i32, day: u32) -> Result<(u32, u32), AnalemmaError> {
    if day == 0 || day > days_in_year(year) {
        return Err(AnalemmaError::DayOutOfRange {
            year,
            day,
            days_in_year: days_in_year(year),
        });
    }
    let mut remaining = day;
    for (idx, &dim) in days_in_months(year).iter().enumerate() {
        if remaining <= dim {
            return Ok((idx as u32 + 1, remaining));
        }
        remaining -= dim;
    }
    Ok((12, 31))
}

/// Same as [`month_day`] as a chrono date; limited to chrono's year range.
pub fn calendar_date(year: i32, day: u32) -> Result<NaiveDate, AnalemmaError> {
    let (month, day_of_month) = month_day(year, day)?;
    NaiveDate::from_ymd_opt(year, month, day_of_month)
        .ok_or(AnalemmaError::YearOutOfRange { year })
}

/// ISO date string for a day-of-year.
///
/// Years 0..=9999 give `YYYY-MM-DD`. Outside that range the year keeps all
/// its digits and a leading `-` when negative (`10000-01-01`, `-0044-03-15`).
///
/// # Panics
///
/// Panics when `day` is outside `1..=days_in_year(year)`. Series generators
/// only pass values from their own loop bound.
pub fn date_from_day_of_year(year: i32, day: u32) -> String {
    match month_day(year, day) {
        Ok((month, day_of_month)) => format_iso_date(year, month, day_of_month),
        Err(e) => panic!("{e}"),
    }
}

fn format_iso_date(year: i32, month: u32, day: u32) -> String {
    if year < 0 {
        format!("-{:04}-{:02}-{:02}", year.unsigned_abs(), month, day)
    } else {
        format!("{:04}-{:02}-{:02}", year, month, day)
    }
}
