#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn cat(id: Option<i64>, name: &str, budget: Decimal, spent: Decimal) -> Category {
    Category {
        id,
        name: name.into(),
        budget,
        spent,
        percentage: 0,
    }
}

// ── percentage_of ─────────────────────────────────────────────

#[test]
fn test_percentage_basic() {
    assert_eq!(percentage_of(dec!(10000), dec!(25000)), 40);
    assert_eq!(percentage_of(dec!(500), dec!(25000)), 2);
}

#[test]
fn test_percentage_rounds_half_up() {
    // 125 / 1000 = 12.5% -> 13, matching round-half-away-from-zero.
    assert_eq!(percentage_of(dec!(125), dec!(1000)), 13);
    assert_eq!(percentage_of(dec!(124), dec!(1000)), 12);
}

#[test]
fn test_percentage_zero_whole() {
    assert_eq!(percentage_of(dec!(100), Decimal::ZERO), 0);
    assert_eq!(percentage_of(dec!(100), dec!(-5)), 0);
}

#[test]
fn test_percentage_can_exceed_100() {
    // Category budgets can outgrow a shrunken total by design.
    assert_eq!(percentage_of(dec!(300), dec!(200)), 150);
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_find_by_name_case_insensitive() {
    let cats = vec![
        cat(Some(1), "Venue", dec!(10000), Decimal::ZERO),
        cat(Some(2), "Catering", dec!(5000), Decimal::ZERO),
    ];
    assert_eq!(Category::find_by_name(&cats, "venue").unwrap().id, Some(1));
    assert_eq!(Category::find_by_name(&cats, "CATERING").unwrap().id, Some(2));
    assert!(Category::find_by_name(&cats, "Cake").is_none());
}

#[test]
fn test_category_find_by_id() {
    let cats = vec![
        cat(Some(1), "Venue", dec!(10000), Decimal::ZERO),
        cat(None, "Draft", dec!(0), Decimal::ZERO),
    ];
    assert_eq!(Category::find_by_id(&cats, 1).unwrap().name, "Venue");
    assert!(Category::find_by_id(&cats, 2).is_none());
}

#[test]
fn test_category_display() {
    let flowers = cat(None, "Flowers", dec!(2000), Decimal::ZERO);
    assert_eq!(format!("{flowers}"), "Flowers");
}

// ── BudgetSummary ─────────────────────────────────────────────

#[test]
fn test_summary_derives_from_categories() {
    let cats = vec![
        cat(Some(1), "Venue", dec!(10000), dec!(1200)),
        cat(Some(2), "Catering", dec!(5000), dec!(800)),
    ];
    let summary = BudgetSummary::derive(dec!(20000), &cats);
    assert_eq!(summary.spent, dec!(2000));
    assert_eq!(summary.remaining, dec!(18000));
    assert_eq!(summary.spent_percentage(), 10);
}

#[test]
fn test_summary_remaining_can_go_negative() {
    let cats = vec![cat(Some(1), "Venue", dec!(1000), dec!(1500))];
    let summary = BudgetSummary::derive(dec!(1000), &cats);
    assert_eq!(summary.remaining, dec!(-500));
}

// ── PaymentStatus ─────────────────────────────────────────────

#[test]
fn test_payment_status_parse() {
    assert_eq!(PaymentStatus::parse("Pending"), Some(PaymentStatus::Pending));
    assert_eq!(PaymentStatus::parse("paid"), Some(PaymentStatus::Paid));
    assert_eq!(PaymentStatus::parse(" PAID "), Some(PaymentStatus::Paid));
    assert_eq!(PaymentStatus::parse("Overdue"), None);
    assert_eq!(PaymentStatus::parse(""), None);
}

#[test]
fn test_payment_status_roundtrip() {
    for status in PaymentStatus::all() {
        assert_eq!(PaymentStatus::parse(status.as_str()), Some(*status));
    }
}

#[test]
fn test_payment_pending_constructor() {
    let payment = Payment::pending(
        "Melody Makers".into(),
        "DJ services".into(),
        dec!(1500),
        "2023-07-15".into(),
    );
    assert!(payment.id.is_none());
    assert!(payment.is_pending());
    assert!(!payment.is_paid());
    assert_eq!(payment.payment_date, None);
    assert_eq!(payment.payment_method, None);
}

// ── Vendor ────────────────────────────────────────────────────

#[test]
fn test_vendor_matches_name_and_category() {
    let vendor = Vendor::new(
        "Elegant Flowers".into(),
        "Florist".into(),
        "desc".into(),
        String::new(),
    );
    assert!(vendor.matches("elegant"));
    assert!(vendor.matches("FLOR"));
    assert!(vendor.matches(""));
    assert!(!vendor.matches("photography"));
}

#[test]
fn test_vendor_stars() {
    let mut vendor = Vendor::new("V".into(), "C".into(), "d".into(), String::new());
    assert_eq!(vendor.stars(), "☆☆☆☆☆");
    vendor.rating = 3;
    assert_eq!(vendor.stars(), "★★★☆☆");
    vendor.rating = 5;
    assert_eq!(vendor.stars(), "★★★★★");
}

#[test]
fn test_vendor_new_defaults() {
    let vendor = Vendor::new("Paper Co.".into(), "Invitations".into(), "d".into(), String::new());
    assert!(vendor.id.is_none());
    assert_eq!(vendor.rating, 0);
    assert!(!vendor.is_favorite);
}

// ── Message ───────────────────────────────────────────────────

#[test]
fn test_message_time_of_day() {
    let msg = Message {
        id: 1,
        sender: Sender::Vendor,
        text: "hi".into(),
        timestamp: "2023-05-15T10:30:00".into(),
    };
    assert_eq!(msg.time_of_day(), "10:30");
}

#[test]
fn test_message_time_of_day_fallback() {
    let msg = Message {
        id: 1,
        sender: Sender::User,
        text: "hi".into(),
        timestamp: "yesterday".into(),
    };
    assert_eq!(msg.time_of_day(), "yesterday");
}

// ── ReminderKey ───────────────────────────────────────────────

#[test]
fn test_reminder_keys_distinguish_kinds() {
    assert_ne!(ReminderKey::payment(1), ReminderKey::appointment(1));
    assert_eq!(ReminderKey::payment(1), ReminderKey::payment(1));
}

#[test]
fn test_reminder_kind_labels() {
    assert_eq!(ReminderKind::Payment.as_str(), "payment");
    assert_eq!(ReminderKind::Appointment.as_str(), "appointment");
}
