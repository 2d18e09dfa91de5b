#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── parse_date ────────────────────────────────────────────────

#[test]
fn test_parse_valid() {
    assert_eq!(parse_date("2023-12-15"), Some(date(2023, 12, 15)));
}

#[test]
fn test_parse_trims_whitespace() {
    assert_eq!(parse_date(" 2023-12-15 "), Some(date(2023, 12, 15)));
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("not a date"), None);
    assert_eq!(parse_date("2023-13-01"), None);
    assert_eq!(parse_date("12/15/2023"), None);
}

// ── within_soon_window ────────────────────────────────────────

#[test]
fn test_window_includes_today() {
    let today = date(2024, 3, 1);
    assert!(within_soon_window("2024-03-01", today));
}

#[test]
fn test_window_includes_final_day() {
    let today = date(2024, 3, 1);
    assert!(within_soon_window("2024-03-31", today));
}

#[test]
fn test_window_excludes_day_after() {
    let today = date(2024, 3, 1);
    assert!(!within_soon_window("2024-04-01", today));
}

#[test]
fn test_window_excludes_past() {
    let today = date(2024, 3, 1);
    assert!(!within_soon_window("2024-02-29", today));
}

#[test]
fn test_window_excludes_unparseable() {
    let today = date(2024, 3, 1);
    assert!(!within_soon_window("", today));
    assert!(!within_soon_window("soon", today));
}

// ── on_or_after ───────────────────────────────────────────────

#[test]
fn test_on_or_after_today_and_future() {
    let today = date(2024, 3, 1);
    assert!(on_or_after("2024-03-01", today));
    assert!(on_or_after("2025-01-01", today));
    assert!(!on_or_after("2024-02-29", today));
    assert!(!on_or_after("bad", today));
}

// ── sort_key ──────────────────────────────────────────────────

#[test]
fn test_sort_key_orders_unparseable_last() {
    let mut dates = vec!["2024-06-01", "garbage", "2023-01-01"];
    dates.sort_by_key(|d| sort_key(d));
    assert_eq!(dates, vec!["2023-01-01", "2024-06-01", "garbage"]);
}

// ── format_display ────────────────────────────────────────────

#[test]
fn test_format_display() {
    assert_eq!(format_display("2023-12-15"), "Dec 15, 2023");
    assert_eq!(format_display("2023-06-01"), "Jun 1, 2023");
}

#[test]
fn test_format_display_falls_back() {
    assert_eq!(format_display("whenever"), "whenever");
}
