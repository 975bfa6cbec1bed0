use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn parse_optional_date(s: Option<&String>) -> AppResult<Option<NaiveDate>> {
    s.map(|v| parse_date(v)).transpose()
}

/// `[end - days, end]`, the default dashboard window.
pub fn window_ending(end: NaiveDate, days: i64) -> AppResult<(NaiveDate, NaiveDate)> {
    let start = Duration::try_days(days)
        .and_then(|span| end.checked_sub_signed(span))
        .ok_or_else(|| AppError::Config(format!("default_window_days out of range: {days}")))?;
    Ok((start, end))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1).and_then(|d| d.pred_opt())
}

/// First and last day covered by a period: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let last = last_day_of_month(first.year(), first.month()).ok_or_else(invalid)?;
            Ok((first, last))
        }
        10 => {
            let d = parse_date(p)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Parse a `--range` expression into inclusive bounds.
///
/// Accepts a single period (`2024`, `2024-01`, `2024-01-15`) or two periods
/// joined by `:` (`2024-01:2024-03`); a range spans from the first day of
/// the start period to the last day of the end period.
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match r.split_once(':') {
        Some((s, e)) => (period_bounds(s)?.0, period_bounds(e)?.1),
        None => period_bounds(r)?,
    };

    if start > end {
        return Err(AppError::InvalidDate(format!("{r} (start after end)")));
    }
    Ok((start, end))
}
