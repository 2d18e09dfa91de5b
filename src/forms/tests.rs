#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn expense_input() -> ExpenseInput {
    ExpenseInput {
        category: "Venue".into(),
        vendor: "Grand Venue".into(),
        description: "Venue deposit".into(),
        amount: "5000".into(),
        date: "2023-05-15".into(),
    }
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_amount_valid() {
    assert_eq!(parse_amount("250.50").unwrap(), dec!(250.50));
    assert_eq!(parse_amount(" 1000 ").unwrap(), dec!(1000));
}

#[test]
fn test_amount_empty_is_required() {
    assert_eq!(parse_amount(""), Err(FieldError::Required("amount")));
    assert_eq!(parse_amount("   "), Err(FieldError::Required("amount")));
}

#[test]
fn test_amount_zero_rejected() {
    assert_eq!(parse_amount("0"), Err(FieldError::InvalidAmount));
}

#[test]
fn test_amount_negative_rejected() {
    assert_eq!(parse_amount("-5"), Err(FieldError::InvalidAmount));
}

#[test]
fn test_amount_non_numeric_rejected() {
    assert_eq!(parse_amount("abc"), Err(FieldError::InvalidAmount));
}

// ── Expense ───────────────────────────────────────────────────

#[test]
fn test_expense_valid() {
    let expense = validate_expense(&expense_input()).unwrap();
    assert_eq!(expense.category, "Venue");
    assert_eq!(expense.amount, dec!(5000));
    assert!(expense.id.is_none());
}

#[test]
fn test_expense_missing_category() {
    let mut input = expense_input();
    input.category = String::new();
    let err = validate_expense(&input).unwrap_err();
    assert_eq!(err, FieldError::Required("category"));
    assert_eq!(err.field(), "category");
}

#[test]
fn test_expense_bad_amount() {
    let mut input = expense_input();
    input.amount = "abc".into();
    assert_eq!(validate_expense(&input), Err(FieldError::InvalidAmount));

    input.amount = "0".into();
    assert_eq!(validate_expense(&input), Err(FieldError::InvalidAmount));

    input.amount = "-10".into();
    assert_eq!(validate_expense(&input), Err(FieldError::InvalidAmount));
}

#[test]
fn test_expense_trims_fields() {
    let mut input = expense_input();
    input.vendor = "  Grand Venue  ".into();
    let expense = validate_expense(&input).unwrap();
    assert_eq!(expense.vendor, "Grand Venue");
}

// ── Payment ───────────────────────────────────────────────────

fn payment_input() -> PaymentInput {
    PaymentInput {
        vendor: "Melody Makers".into(),
        description: "DJ services".into(),
        amount: "1500".into(),
        due_date: "2023-07-15".into(),
        status: "Pending".into(),
        payment_date: String::new(),
        payment_method: String::new(),
    }
}

#[test]
fn test_payment_pending_clears_payment_fields() {
    let mut input = payment_input();
    // Stray values typed before flipping status back to Pending are dropped.
    input.payment_date = "2023-07-01".into();
    input.payment_method = "Cash".into();
    let payment = validate_payment(&input).unwrap();
    assert!(payment.is_pending());
    assert_eq!(payment.payment_date, None);
    assert_eq!(payment.payment_method, None);
}

#[test]
fn test_payment_paid_keeps_payment_fields() {
    let mut input = payment_input();
    input.status = "Paid".into();
    input.payment_date = "2023-07-01".into();
    input.payment_method = "Bank Transfer".into();
    let payment = validate_payment(&input).unwrap();
    assert!(payment.is_paid());
    assert_eq!(payment.payment_date.as_deref(), Some("2023-07-01"));
    assert_eq!(payment.payment_method.as_deref(), Some("Bank Transfer"));
}

#[test]
fn test_payment_bad_status() {
    let mut input = payment_input();
    input.status = "Overdue".into();
    assert_eq!(validate_payment(&input), Err(FieldError::InvalidStatus));
}

#[test]
fn test_payment_bad_amount() {
    let mut input = payment_input();
    input.amount = "abc".into();
    assert_eq!(validate_payment(&input), Err(FieldError::InvalidAmount));
}

// ── Contract ──────────────────────────────────────────────────

fn contract_input() -> ContractInput {
    ContractInput {
        vendor: "Grand Venue".into(),
        kind: "Venue".into(),
        signed_date: "2023-05-15".into(),
        expiration_date: "2024-06-30".into(),
        file_name: "grand_venue_contract.pdf".into(),
    }
}

#[test]
fn test_contract_valid() {
    let contract = validate_contract(&contract_input()).unwrap();
    assert_eq!(contract.vendor, "Grand Venue");
    assert_eq!(contract.expiration_date, "2024-06-30");
}

#[test]
fn test_contract_expiration_before_signed() {
    let mut input = contract_input();
    input.signed_date = "2024-01-10".into();
    input.expiration_date = "2024-01-05".into();
    let err = validate_contract(&input).unwrap_err();
    assert_eq!(err, FieldError::ExpirationBeforeSigned);
    assert_eq!(
        err.to_string(),
        "Expiration date cannot be before the signed date"
    );
}

#[test]
fn test_contract_expiration_optional() {
    let mut input = contract_input();
    input.expiration_date = String::new();
    let contract = validate_contract(&input).unwrap();
    assert_eq!(contract.expiration_date, "");
}

#[test]
fn test_contract_same_day_expiration_ok() {
    let mut input = contract_input();
    input.signed_date = "2024-01-10".into();
    input.expiration_date = "2024-01-10".into();
    assert!(validate_contract(&input).is_ok());
}

// ── Appointment ───────────────────────────────────────────────

#[test]
fn test_appointment_requires_time() {
    let input = AppointmentInput {
        vendor: "Sunset Catering".into(),
        kind: "Food Tasting".into(),
        date: "2023-07-10".into(),
        time: String::new(),
        notes: String::new(),
    };
    assert_eq!(
        validate_appointment(&input),
        Err(FieldError::Required("time"))
    );
}

#[test]
fn test_appointment_notes_optional() {
    let input = AppointmentInput {
        vendor: "Sunset Catering".into(),
        kind: "Food Tasting".into(),
        date: "2023-07-10".into(),
        time: "2:00 PM".into(),
        notes: String::new(),
    };
    let appointment = validate_appointment(&input).unwrap();
    assert_eq!(appointment.notes, "");
}

// ── Vendor ────────────────────────────────────────────────────

#[test]
fn test_vendor_valid_starts_unrated() {
    let input = VendorInput {
        name: "Paper Co.".into(),
        category: "Invitations".into(),
        description: "Letterpress invitations and signage.".into(),
        notes: String::new(),
    };
    let vendor = validate_vendor(&input).unwrap();
    assert_eq!(vendor.rating, 0);
    assert!(!vendor.is_favorite);
}

#[test]
fn test_vendor_name_too_long() {
    let input = VendorInput {
        name: "x".repeat(51),
        category: "Venue".into(),
        description: "desc".into(),
        notes: String::new(),
    };
    assert_eq!(validate_vendor(&input), Err(FieldError::NameTooLong));
}

#[test]
fn test_vendor_name_at_limit_ok() {
    let input = VendorInput {
        name: "x".repeat(50),
        category: "Venue".into(),
        description: "desc".into(),
        notes: String::new(),
    };
    assert!(validate_vendor(&input).is_ok());
}
