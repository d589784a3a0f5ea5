//! 到貨區間格式化

use chrono::{Datelike, NaiveDate};
use eta_core::Locale;

const WEEKDAYS_DE: [&str; 7] = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];
const WEEKDAYS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// 格式化單一日期，例如 "Mi, 12.11."（de）或 "Wed, Nov 12"（en）
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let weekday = date.weekday().num_days_from_monday() as usize;
    match locale {
        Locale::De => format!(
            "{}, {:02}.{:02}.",
            WEEKDAYS_DE[weekday],
            date.day(),
            date.month()
        ),
        Locale::En => format!(
            "{}, {} {}",
            WEEKDAYS_EN[weekday],
            MONTHS_EN[(date.month() - 1) as usize],
            date.day()
        ),
    }
}

/// 格式化到貨區間，例如 "Mi, 12.11. – Do, 13.11."
///
/// 最早與最晚到貨日相同時只輸出單一日期。
pub fn format_window(earliest: NaiveDate, latest: NaiveDate, locale: Locale) -> String {
    if earliest == latest {
        format_date(earliest, locale)
    } else {
        format!(
            "{} – {}",
            format_date(earliest, locale),
            format_date(latest, locale)
        )
    }
}
