#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::*;
use crate::models::{percentage_of, Expense, PaymentStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_expense(amount: Decimal) -> Expense {
    Expense::new(
        "Venue".into(),
        "Grand Venue".into(),
        "Chair rental".into(),
        amount,
        "2023-08-01".into(),
    )
}

// ── Seed invariants ───────────────────────────────────────────

#[test]
fn test_seed_totals() {
    let store = Store::seeded();
    let summary = store.summary();
    assert_eq!(summary.total, dec!(25000));
    assert_eq!(summary.spent, dec!(12450));
    assert_eq!(summary.remaining, dec!(12550));
}

#[test]
fn test_seed_category_percentages_match_budgets() {
    let store = Store::seeded();
    for category in store.categories() {
        assert_eq!(
            category.percentage,
            percentage_of(category.budget, dec!(25000)),
            "seed percentage out of sync for {}",
            category.name
        );
    }
}

#[test]
fn test_seed_counts() {
    let store = Store::seeded();
    assert_eq!(store.categories().len(), 9);
    assert_eq!(store.expenses().len(), 9);
    assert_eq!(store.payments().len(), 8);
    assert_eq!(store.contracts().len(), 5);
    assert_eq!(store.appointments().len(), 4);
    assert_eq!(store.vendors().len(), 6);
    assert_eq!(store.messages(1).len(), 5);
    assert_eq!(store.messages(3).len(), 4);
    assert_eq!(store.messages(4).len(), 3);
    assert!(store.messages(2).is_empty());
}

// ── Total-budget reallocation ─────────────────────────────────

#[test]
fn test_update_total_budget_rescales_percentages_only() {
    let mut store = Store::seeded();
    let budgets_before: Vec<Decimal> = store.categories().iter().map(|c| c.budget).collect();

    store.update_total_budget(dec!(30000)).unwrap();

    let summary = store.summary();
    assert_eq!(summary.total, dec!(30000));
    assert_eq!(summary.remaining, dec!(30000) - summary.spent);

    let budgets_after: Vec<Decimal> = store.categories().iter().map(|c| c.budget).collect();
    assert_eq!(budgets_before, budgets_after, "category budgets must not move");

    for category in store.categories() {
        assert_eq!(
            category.percentage,
            percentage_of(category.budget, dec!(30000))
        );
    }
    // Venue: 10000 / 30000 -> 33%
    assert_eq!(store.categories()[0].percentage, 33);
}

#[test]
fn test_update_total_budget_rejects_nonpositive() {
    let mut store = Store::seeded();
    assert_eq!(
        store.update_total_budget(Decimal::ZERO),
        Err(StoreError::InvalidTotal)
    );
    assert_eq!(
        store.update_total_budget(dec!(-100)),
        Err(StoreError::InvalidTotal)
    );
    // State untouched after a rejected update.
    assert_eq!(store.summary().total, dec!(25000));
    assert_eq!(store.categories()[0].percentage, 40);
}

// ── Per-category reallocation ─────────────────────────────────

#[test]
fn test_update_category_budgets_rewrites_total() {
    let mut store = Store::seeded();
    let mut changes = HashMap::new();
    changes.insert(1, dec!(12000)); // Venue: 10000 -> 12000
    changes.insert(7, dec!(1000)); // Cake: 500 -> 1000

    store.update_category_budgets(&changes).unwrap();

    // 25000 + 2000 + 500
    let expected_total = dec!(27500);
    assert_eq!(store.summary().total, expected_total);

    for category in store.categories() {
        assert_eq!(
            category.percentage,
            percentage_of(category.budget, expected_total)
        );
    }
    assert_eq!(store.categories()[0].budget, dec!(12000));
    assert_eq!(store.categories()[6].budget, dec!(1000));
    // Untouched category keeps its budget.
    assert_eq!(store.categories()[1].budget, dec!(5000));
}

#[test]
fn test_update_category_budgets_rejects_negative() {
    let mut store = Store::seeded();
    let mut changes = HashMap::new();
    changes.insert(1, dec!(-1));
    assert_eq!(
        store.update_category_budgets(&changes),
        Err(StoreError::NegativeBudget)
    );
    assert_eq!(store.summary().total, dec!(25000));
}

#[test]
fn test_update_category_budgets_ignores_unknown_ids() {
    let mut store = Store::seeded();
    let mut changes = HashMap::new();
    changes.insert(999, dec!(5000));
    store.update_category_budgets(&changes).unwrap();
    // No category picked it up, so the total is just the existing sum.
    assert_eq!(store.summary().total, dec!(25000));
}

// ── Expense ledger ────────────────────────────────────────────

#[test]
fn test_add_expense_prepends_and_bumps_spend() {
    let mut store = Store::seeded();
    let id = store.add_expense(sample_expense(dec!(300)));

    assert_eq!(store.expenses()[0].id, Some(id));
    assert_eq!(store.expenses()[0].description, "Chair rental");

    let venue = Category::find_by_name(store.categories(), "Venue").unwrap();
    assert_eq!(venue.spent, dec!(5300));
    assert_eq!(store.summary().spent, dec!(12750));
    assert_eq!(store.summary().remaining, dec!(12250));
}

#[test]
fn test_add_expense_unknown_category_leaves_budget_alone() {
    let mut store = Store::seeded();
    let mut expense = sample_expense(dec!(300));
    expense.category = "Fireworks".into();
    store.add_expense(expense);

    // Ledger grows, but no bucket tracked the spend.
    assert_eq!(store.expenses().len(), 10);
    assert_eq!(store.summary().spent, dec!(12450));
}

#[test]
fn test_expense_ids_survive_delete_then_add() {
    let mut store = Store::seeded();
    let first = store.add_expense(sample_expense(dec!(10)));
    store.delete_expense(first).unwrap();
    let second = store.add_expense(sample_expense(dec!(20)));
    assert!(second > first, "ids must not be reused after a delete");
}

#[test]
fn test_delete_then_undo_round_trips() {
    let mut store = Store::seeded();
    let expenses_before = store.expenses().to_vec();
    let categories_before = store.categories().to_vec();
    let summary_before = store.summary();

    // Delete from the middle so the restore index matters.
    let undo = store.delete_expense(5).unwrap();

    assert_eq!(store.expenses().len(), 8);
    let music = Category::find_by_name(store.categories(), "Music").unwrap();
    assert_eq!(music.spent, Decimal::ZERO);
    assert_eq!(store.summary().spent, dec!(11700));

    let message = store.apply_undo(undo);
    assert_eq!(message, "Restored expense 'DJ services'");

    assert_eq!(store.expenses(), expenses_before.as_slice());
    assert_eq!(store.categories(), categories_before.as_slice());
    assert_eq!(store.summary(), summary_before);
}

#[test]
fn test_delete_unknown_expense() {
    let mut store = Store::seeded();
    assert!(matches!(
        store.delete_expense(999),
        Err(StoreError::UnknownExpense(999))
    ));
}

// ── Payments ──────────────────────────────────────────────────

#[test]
fn test_mark_paid_stamps_date_and_method() {
    let mut store = Store::seeded();
    let payment = store.mark_paid(2, "2024-03-01").unwrap();
    assert_eq!(payment.vendor, "Grand Venue");
    assert_eq!(payment.amount, dec!(5000));
    assert_eq!(payment.status, PaymentStatus::Paid);
    assert_eq!(payment.payment_date.as_deref(), Some("2024-03-01"));
    assert_eq!(payment.payment_method.as_deref(), Some("Credit Card"));
}

#[test]
fn test_mark_paid_is_one_way() {
    let mut store = Store::seeded();
    store.mark_paid(2, "2024-03-01").unwrap();
    assert_eq!(
        store.mark_paid(2, "2024-03-02").err(),
        Some(StoreError::AlreadyPaid)
    );
    // First stamp wins.
    let payment = store.payments().iter().find(|p| p.id == Some(2)).unwrap();
    assert_eq!(payment.payment_date.as_deref(), Some("2024-03-01"));
}

#[test]
fn test_payment_totals() {
    let store = Store::seeded();
    let totals = store.payment_totals();
    assert_eq!(totals.total, dec!(21500));
    assert_eq!(totals.paid, dec!(11500));
    assert_eq!(totals.pending, dec!(10000));
}

#[test]
fn test_payment_total_override() {
    let mut store = Store::seeded();
    store.set_payment_total_override(dec!(30000)).unwrap();
    let totals = store.payment_totals();
    assert_eq!(totals.total, dec!(30000));
    assert_eq!(totals.pending, dec!(18500));
    assert_eq!(store.calculated_payment_total(), dec!(21500));

    assert_eq!(
        store.set_payment_total_override(dec!(-1)),
        Err(StoreError::NegativeTotal)
    );
}

#[test]
fn test_pending_payments_sorted_by_due_date() {
    let store = Store::seeded();
    let due_dates: Vec<&str> = store
        .pending_payments()
        .iter()
        .map(|p| p.due_date.as_str())
        .collect();
    assert_eq!(
        due_dates,
        vec!["2023-07-15", "2023-11-10", "2023-12-01", "2023-12-15"]
    );
}

#[test]
fn test_payments_due_soon_window() {
    let store = Store::seeded();
    // 2023-10-20: only the floral final payment (due 11-10) is inside 30 days.
    let soon = store.payments_due_soon(date(2023, 10, 20));
    let ids: Vec<Option<i64>> = soon.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![Some(7)]);

    // 2023-11-20 picks up both December payments, soonest first.
    let soon = store.payments_due_soon(date(2023, 11, 20));
    let ids: Vec<Option<i64>> = soon.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![Some(4), Some(2)]);
}

// ── Contracts & appointments ──────────────────────────────────

#[test]
fn test_expiring_contracts_window() {
    let store = Store::seeded();
    // 2024-06-05: contracts expiring 06-10, 06-15, 06-20, 06-25, 06-30 all
    // fall inside the 30-day window.
    assert_eq!(store.expiring_contracts(date(2024, 6, 5)).len(), 5);
    // 2024-06-21: the 06-10, 06-15 and 06-20 expirations have passed.
    assert_eq!(store.expiring_contracts(date(2024, 6, 21)).len(), 2);
    // Well before any expiration, nothing is "soon".
    assert!(store.expiring_contracts(date(2023, 6, 1)).is_empty());
}

#[test]
fn test_upcoming_appointments_sorted() {
    let store = Store::seeded();
    let upcoming = store.upcoming_appointments(date(2023, 7, 1));
    let kinds: Vec<&str> = upcoming.iter().map(|a| a.kind.as_str()).collect();
    assert_eq!(
        kinds,
        vec!["Food Tasting", "Cake Tasting", "Floral Consultation"]
    );
    // An appointment today still counts as upcoming.
    let upcoming = store.upcoming_appointments(date(2023, 7, 20));
    assert_eq!(upcoming.len(), 1);
}

#[test]
fn test_contract_delete_then_undo() {
    let mut store = Store::seeded();
    let before = store.contracts().to_vec();
    let undo = store.delete_contract(3).unwrap();
    assert_eq!(store.contracts().len(), 4);
    store.apply_undo(undo);
    assert_eq!(store.contracts(), before.as_slice());
}

#[test]
fn test_appointment_delete_then_undo() {
    let mut store = Store::seeded();
    let before = store.appointments().to_vec();
    let undo = store.delete_appointment(1).unwrap();
    assert_eq!(store.appointments().len(), 3);
    store.apply_undo(undo);
    assert_eq!(store.appointments(), before.as_slice());
}

// ── Vendors ───────────────────────────────────────────────────

#[test]
fn test_search_vendors() {
    let store = Store::seeded();
    let hits = store.search_vendors("photo");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Dreamy Photography");

    // Category text matches too.
    let hits = store.search_vendors("cat");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Sunset Catering");

    assert_eq!(store.search_vendors("").len(), 6);
    assert!(store.search_vendors("zzz").is_empty());
}

#[test]
fn test_toggle_favorite() {
    let mut store = Store::seeded();
    assert!(!store.toggle_favorite(1).unwrap()); // was a favorite
    assert!(store.toggle_favorite(1).unwrap());
    assert!(matches!(
        store.toggle_favorite(99),
        Err(StoreError::UnknownVendor(99))
    ));
}

#[test]
fn test_adjust_rating_clamps() {
    let mut store = Store::seeded();
    // Vendor 1 is already at 5 stars.
    assert_eq!(store.adjust_rating(1, 1).unwrap(), 5);
    assert_eq!(store.adjust_rating(1, -1).unwrap(), 4);
    for _ in 0..10 {
        store.adjust_rating(1, -1).unwrap();
    }
    assert_eq!(store.vendor_by_id(1).unwrap().rating, 0);
}

// ── Messages ──────────────────────────────────────────────────

#[test]
fn test_send_message_appends_user_entry() {
    let mut store = Store::seeded();
    store
        .send_message(1, "Can we meet Tuesday?".into(), "2024-03-01T09:00:00".into())
        .unwrap();

    let thread = store.messages(1);
    assert_eq!(thread.len(), 6);
    let last = &thread[5];
    assert_eq!(last.id, 6);
    assert_eq!(last.sender, Sender::User);
    assert_eq!(last.text, "Can we meet Tuesday?");
    assert_eq!(last.timestamp, "2024-03-01T09:00:00");
}

#[test]
fn test_send_message_starts_empty_thread() {
    let mut store = Store::seeded();
    // Vendor 2 has no seeded conversation.
    store
        .send_message(2, "Hello!".into(), "2024-03-01T09:00:00".into())
        .unwrap();
    assert_eq!(store.messages(2).len(), 1);
    assert_eq!(store.messages(2)[0].id, 1);
}

#[test]
fn test_send_message_unknown_vendor() {
    let mut store = Store::seeded();
    assert!(matches!(
        store.send_message(42, "hi".into(), "t".into()),
        Err(StoreError::UnknownVendor(42))
    ));
}

// ── Reminders ─────────────────────────────────────────────────

#[test]
fn test_reminders_derive_from_ledgers() {
    let store = Store::seeded();
    // 2023-07-01: DJ payment due 07-15 plus three July appointments.
    let feed = store.reminders(date(2023, 7, 1));
    let titles: Vec<&str> = feed.iter().map(|r| r.title.as_str()).collect();
    // Payments sort ahead of appointments sharing a date (stable sort,
    // payments pushed first).
    assert_eq!(
        titles,
        vec![
            "Food Tasting",
            "DJ services due",
            "Cake Tasting",
            "Floral Consultation",
        ]
    );
}

#[test]
fn test_reminders_idempotent_without_mutation() {
    let store = Store::seeded();
    let today = date(2023, 7, 1);
    assert_eq!(store.reminders(today), store.reminders(today));
}

#[test]
fn test_reminders_track_payment_transition() {
    let mut store = Store::seeded();
    let today = date(2023, 7, 1);
    assert_eq!(store.reminders(today).len(), 4);

    // Paying the DJ removes its reminder on the next derivation.
    store.mark_paid(8, "2023-07-01").unwrap();
    let titles: Vec<String> = store
        .reminders(today)
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert!(!titles.contains(&"DJ services due".to_string()));
}

#[test]
fn test_dismiss_reminder_then_undo() {
    let mut store = Store::seeded();
    let today = date(2023, 7, 1);
    let feed = store.reminders(today);
    let target = feed[0].clone();

    let undo = store.dismiss_reminder(target.key, target.title.clone());
    assert_eq!(store.reminders(today).len(), feed.len() - 1);
    assert!(!store.reminders(today).contains(&target));

    store.apply_undo(undo);
    assert_eq!(store.reminders(today), feed);
}
