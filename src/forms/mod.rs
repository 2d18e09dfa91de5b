//! Input validation for the add-entry forms. Each entity has a raw-input
//! struct holding the strings exactly as typed, and a `validate_*` function
//! that either produces a model record or reports the first offending field.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::dates::parse_date;
use crate::models::{Appointment, Contract, Expense, Payment, PaymentStatus, Vendor};

pub(crate) const MAX_NAME_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Status must be Pending or Paid")]
    InvalidStatus,
    #[error("Name must be {MAX_NAME_LEN} characters or fewer")]
    NameTooLong,
    #[error("Expiration date cannot be before the signed date")]
    ExpirationBeforeSigned,
}

impl FieldError {
    /// Field key the error should be rendered against.
    pub(crate) fn field(&self) -> &'static str {
        match self {
            Self::Required(field) => field,
            Self::InvalidAmount => "amount",
            Self::InvalidStatus => "status",
            Self::NameTooLong => "name",
            Self::ExpirationBeforeSigned => "expiration_date",
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FieldError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parse a currency amount typed into a form. Must be present, numeric,
/// and strictly positive.
pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required("amount"));
    }
    match Decimal::from_str(trimmed) {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(FieldError::InvalidAmount),
    }
}

// ── Expense ───────────────────────────────────────────────────

#[derive(Debug, Default, Clone)]
pub(crate) struct ExpenseInput {
    pub(crate) category: String,
    pub(crate) vendor: String,
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) date: String,
}

pub(crate) fn validate_expense(input: &ExpenseInput) -> Result<Expense, FieldError> {
    let category = required(&input.category, "category")?;
    let vendor = required(&input.vendor, "vendor")?;
    let description = required(&input.description, "description")?;
    let amount = parse_amount(&input.amount)?;
    let date = required(&input.date, "date")?;
    Ok(Expense::new(category, vendor, description, amount, date))
}

// ── Payment ───────────────────────────────────────────────────

#[derive(Debug, Default, Clone)]
pub(crate) struct PaymentInput {
    pub(crate) vendor: String,
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) due_date: String,
    pub(crate) status: String,
    pub(crate) payment_date: String,
    pub(crate) payment_method: String,
}

pub(crate) fn validate_payment(input: &PaymentInput) -> Result<Payment, FieldError> {
    let vendor = required(&input.vendor, "vendor")?;
    let description = required(&input.description, "description")?;
    let amount = parse_amount(&input.amount)?;
    let due_date = required(&input.due_date, "due_date")?;
    let status = PaymentStatus::parse(&input.status).ok_or(FieldError::InvalidStatus)?;

    let mut payment = Payment::pending(vendor, description, amount, due_date);
    // Payment date and method only carry through for an already-paid entry.
    if status == PaymentStatus::Paid {
        payment.status = PaymentStatus::Paid;
        payment.payment_date = non_empty(&input.payment_date);
        payment.payment_method = non_empty(&input.payment_method);
    }
    Ok(payment)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ── Contract ──────────────────────────────────────────────────

#[derive(Debug, Default, Clone)]
pub(crate) struct ContractInput {
    pub(crate) vendor: String,
    pub(crate) kind: String,
    pub(crate) signed_date: String,
    pub(crate) expiration_date: String,
    pub(crate) file_name: String,
}

pub(crate) fn validate_contract(input: &ContractInput) -> Result<Contract, FieldError> {
    let vendor = required(&input.vendor, "vendor")?;
    let kind = required(&input.kind, "kind")?;
    let signed_date = required(&input.signed_date, "signed_date")?;
    let file_name = required(&input.file_name, "file_name")?;
    let expiration_date = input.expiration_date.trim().to_string();

    // Expiration is optional, but when both dates are given it must not
    // precede the signing date.
    if let (Some(signed), Some(expires)) = (parse_date(&signed_date), parse_date(&expiration_date))
    {
        if expires < signed {
            return Err(FieldError::ExpirationBeforeSigned);
        }
    }

    Ok(Contract::new(
        vendor,
        kind,
        signed_date,
        expiration_date,
        file_name,
    ))
}

// ── Appointment ───────────────────────────────────────────────

#[derive(Debug, Default, Clone)]
pub(crate) struct AppointmentInput {
    pub(crate) vendor: String,
    pub(crate) kind: String,
    pub(crate) date: String,
    pub(crate) time: String,
    pub(crate) notes: String,
}

pub(crate) fn validate_appointment(input: &AppointmentInput) -> Result<Appointment, FieldError> {
    let vendor = required(&input.vendor, "vendor")?;
    let kind = required(&input.kind, "kind")?;
    let date = required(&input.date, "date")?;
    let time = required(&input.time, "time")?;
    Ok(Appointment::new(
        vendor,
        kind,
        date,
        time,
        input.notes.trim().to_string(),
    ))
}

// ── Vendor ────────────────────────────────────────────────────

#[derive(Debug, Default, Clone)]
pub(crate) struct VendorInput {
    pub(crate) name: String,
    pub(crate) category: String,
    pub(crate) description: String,
    pub(crate) notes: String,
}

pub(crate) fn validate_vendor(input: &VendorInput) -> Result<Vendor, FieldError> {
    let name = required(&input.name, "name")?;
    if name.chars().count() > MAX_NAME_LEN {
        return Err(FieldError::NameTooLong);
    }
    let category = required(&input.category, "category")?;
    let description = required(&input.description, "description")?;
    Ok(Vendor::new(
        name,
        category,
        description,
        input.notes.trim().to_string(),
    ))
}

#[cfg(test)]
mod tests;
