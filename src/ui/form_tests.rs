#![allow(clippy::unwrap_used)]

use super::form::*;
use crate::forms::{validate_payment, FieldError};

#[test]
fn test_expense_form_defaults_date_to_today() {
    let form = FormState::expense();
    assert_eq!(form.fields.len(), 5);
    assert!(!form.value("date").is_empty());
    assert_eq!(form.value("amount"), "");
}

#[test]
fn test_field_navigation_stops_at_ends() {
    let mut form = FormState::vendor();
    form.prev_field();
    assert_eq!(form.selected, 0);
    for _ in 0..10 {
        form.next_field();
    }
    assert_eq!(form.selected, form.fields.len() - 1);
    assert!(form.on_last_field());
}

#[test]
fn test_payment_fields_inactive_until_paid() {
    let mut form = FormState::payment();
    assert!(form.field_inactive("payment_date"));
    assert!(form.field_inactive("payment_method"));
    assert!(!form.field_inactive("amount"));

    form.toggle_status();
    assert_eq!(form.value("status"), "Paid");
    assert!(!form.field_inactive("payment_date"));

    form.toggle_status();
    assert_eq!(form.value("status"), "Pending");
    assert!(form.field_inactive("payment_date"));
}

#[test]
fn test_set_error_moves_cursor_to_field() {
    let mut form = FormState::expense();
    form.selected = 4;
    form.set_error(&FieldError::InvalidAmount);
    assert_eq!(form.fields[form.selected].key, "amount");
    assert_eq!(
        form.fields[form.selected].error.as_deref(),
        Some("Amount must be a positive number")
    );

    form.clear_errors();
    assert!(form.fields.iter().all(|f| f.error.is_none()));
}

#[test]
fn test_payment_form_feeds_validator() {
    let mut form = FormState::payment();
    for (key, value) in [
        ("vendor", "Grand Venue"),
        ("description", "Venue final payment"),
        ("amount", "5000"),
        ("due_date", "2023-12-15"),
    ] {
        if let Some(field) = form.fields.iter_mut().find(|f| f.key == key) {
            field.value = value.into();
        }
    }
    let payment = validate_payment(&form.payment_input()).unwrap();
    assert!(payment.is_pending());
    assert_eq!(payment.vendor, "Grand Venue");
}
