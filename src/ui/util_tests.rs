#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_seed_total() {
    assert_eq!(format_amount(dec!(25000)), "$25,000.00");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_pads_cents() {
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
}

#[test]
fn test_format_amount_single_digit() {
    assert_eq!(format_amount(dec!(5)), "$5.00");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("Sweet Delights Bakery ❤", 10), "Sweet Del…");
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..12 {
        scroll_down(&mut index, &mut scroll, 20, 10);
    }
    assert_eq!(index, 12);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (4, 0);
    scroll_down(&mut index, &mut scroll, 5, 10);
    assert_eq!(index, 4);
}

#[test]
fn test_scroll_up_clamps_at_zero() {
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 30, 10);
    assert_eq!(index, 29);
    assert_eq!(scroll, 20);

    scroll_to_top(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}
