use chrono::{NaiveDate, TimeDelta, TimeZone};
use chrono_tz::Tz;

/// Milliseconds in one calendar day.
pub const DAY_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmartDateFormat {
    Year,       // 2024
    MonthYear,  // Jan 2024
    DayMonth,   // 12 Jan
    HourMin,    // 10:30
    HourMinSec, // 10:30:15
}

/// Determines the best date format based on the visible time range (in seconds).
pub fn determine_date_format(visible_range_sec: f64) -> SmartDateFormat {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 24.0 * HOUR;
    const MONTH: f64 = 30.0 * DAY;
    const YEAR: f64 = 365.0 * DAY;

    if visible_range_sec > YEAR * 2.0 {
        SmartDateFormat::Year
    } else if visible_range_sec > MONTH * 2.0 {
        SmartDateFormat::MonthYear
    } else if visible_range_sec > DAY * 1.5 {
        SmartDateFormat::DayMonth
    } else if visible_range_sec > MINUTE * 5.0 {
        SmartDateFormat::HourMin
    } else {
        SmartDateFormat::HourMinSec
    }
}

/// Calendar date for a millisecond offset from `origin`.
///
/// Whole days only: the offset is floored to the day it falls in, so
/// `offset_ms = 1.5 days` lands on `origin + 1 day`.
pub fn date_at_offset(offset_ms: f64, origin: NaiveDate) -> Option<NaiveDate> {
    if !offset_ms.is_finite() {
        return None;
    }
    let days = (offset_ms / DAY_MS).floor();
    if days.abs() > i32::MAX as f64 {
        return None;
    }
    origin.checked_add_signed(TimeDelta::try_days(days as i64)?)
}

/// Short numeric date (`1/31/2020`) for the tooltip header.
pub fn format_offset_date(offset_ms: f64, origin: NaiveDate) -> String {
    match date_at_offset(offset_ms, origin) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => format!("{:.2}", offset_ms),
    }
}

/// Formats an axis position (ms offset from midnight of `origin` in `tz`).
pub fn format_axis_offset(offset_ms: f64, origin: NaiveDate, tz: Tz, format: SmartDateFormat) -> String {
    let Some(midnight) = origin.and_hms_opt(0, 0, 0) else {
        return format!("{:.2}", offset_ms);
    };
    let start = match tz.from_local_datetime(&midnight) {
        chrono::LocalResult::Single(d) => d,
        chrono::LocalResult::Ambiguous(d, _) => d,
        chrono::LocalResult::None => return format!("{:.2}", offset_ms),
    };
    let Some(dt) = TimeDelta::try_milliseconds(offset_ms as i64).and_then(|d| start.checked_add_signed(d)) else {
        return format!("{:.2}", offset_ms);
    };

    match format {
        SmartDateFormat::Year => dt.format("%Y").to_string(),
        SmartDateFormat::MonthYear => dt.format("%b %Y").to_string(),
        SmartDateFormat::DayMonth => dt.format("%d %b").to_string(),
        SmartDateFormat::HourMin => dt.format("%H:%M").to_string(),
        SmartDateFormat::HourMinSec => dt.format("%H:%M:%S").to_string(),
    }
}
