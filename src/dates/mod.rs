use chrono::{Duration, Local, NaiveDate};

pub(crate) const DATE_FMT: &str = "%Y-%m-%d";

/// Reminder and expiration windows look this many days ahead.
pub(crate) const SOON_DAYS: i64 = 30;

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn today_string() -> String {
    today().format(DATE_FMT).to_string()
}

/// Local timestamp for message records, e.g. "2024-03-15T14:35:02".
pub(crate) fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

/// True when `date_str` falls inside `[today, today + SOON_DAYS]`.
/// Unparseable dates are never "soon".
pub(crate) fn within_soon_window(date_str: &str, today: NaiveDate) -> bool {
    match parse_date(date_str) {
        Some(d) => d >= today && d <= today + Duration::days(SOON_DAYS),
        None => false,
    }
}

/// True when `date_str` is today or later. Unparseable dates never qualify.
pub(crate) fn on_or_after(date_str: &str, today: NaiveDate) -> bool {
    match parse_date(date_str) {
        Some(d) => d >= today,
        None => false,
    }
}

/// Sort key that pushes unparseable dates to the end of ascending order.
pub(crate) fn sort_key(date_str: &str) -> NaiveDate {
    parse_date(date_str).unwrap_or(NaiveDate::MAX)
}

/// Human-readable form, e.g. "2023-12-15" -> "Dec 15, 2023". Falls back to
/// the original string when it does not parse.
pub(crate) fn format_display(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests;
