//! Field-by-field add-entry forms, driven the same way as the command bar:
//! the selected field captures keystrokes, Enter advances, and the final
//! Enter validates and submits. Validation failures pin the cursor to the
//! offending field with the message rendered inline.

use crate::dates;
use crate::forms::{
    AppointmentInput, ContractInput, ExpenseInput, FieldError, PaymentInput, VendorInput,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormKind {
    Expense,
    Payment,
    Contract,
    Appointment,
    Vendor,
}

#[derive(Debug, Clone)]
pub(crate) struct FormField {
    pub(crate) key: &'static str,
    pub(crate) label: &'static str,
    pub(crate) value: String,
    pub(crate) error: Option<String>,
}

impl FormField {
    fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            value: String::new(),
            error: None,
        }
    }

    fn with_value(key: &'static str, label: &'static str, value: String) -> Self {
        Self {
            key,
            label,
            value,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FormState {
    pub(crate) kind: FormKind,
    pub(crate) title: &'static str,
    pub(crate) fields: Vec<FormField>,
    pub(crate) selected: usize,
}

impl FormState {
    pub(crate) fn expense() -> Self {
        Self {
            kind: FormKind::Expense,
            title: "Add Expense",
            fields: vec![
                FormField::new("category", "Category"),
                FormField::new("vendor", "Vendor"),
                FormField::new("description", "Description"),
                FormField::new("amount", "Amount ($)"),
                FormField::with_value("date", "Date", dates::today_string()),
            ],
            selected: 0,
        }
    }

    pub(crate) fn payment() -> Self {
        Self {
            kind: FormKind::Payment,
            title: "Add Payment",
            fields: vec![
                FormField::new("vendor", "Vendor"),
                FormField::new("description", "Description"),
                FormField::new("amount", "Amount ($)"),
                FormField::with_value("due_date", "Due Date", dates::today_string()),
                FormField::with_value("status", "Status", "Pending".into()),
                FormField::new("payment_date", "Payment Date"),
                FormField::new("payment_method", "Payment Method"),
            ],
            selected: 0,
        }
    }

    pub(crate) fn contract() -> Self {
        Self {
            kind: FormKind::Contract,
            title: "Add Contract",
            fields: vec![
                FormField::new("vendor", "Vendor"),
                FormField::new("kind", "Type"),
                FormField::with_value("signed_date", "Signed Date", dates::today_string()),
                FormField::new("expiration_date", "Expiration Date"),
                FormField::new("file_name", "File Name"),
            ],
            selected: 0,
        }
    }

    pub(crate) fn appointment() -> Self {
        Self {
            kind: FormKind::Appointment,
            title: "Add Appointment",
            fields: vec![
                FormField::new("vendor", "Vendor"),
                FormField::new("kind", "Type"),
                FormField::with_value("date", "Date", dates::today_string()),
                FormField::with_value("time", "Time", "10:00 AM".into()),
                FormField::new("notes", "Notes"),
            ],
            selected: 0,
        }
    }

    pub(crate) fn vendor() -> Self {
        Self {
            kind: FormKind::Vendor,
            title: "Add Vendor",
            fields: vec![
                FormField::new("name", "Name"),
                FormField::new("category", "Category"),
                FormField::new("description", "Description"),
                FormField::new("notes", "Notes"),
            ],
            selected: 0,
        }
    }

    pub(crate) fn value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map_or("", |f| f.value.as_str())
    }

    pub(crate) fn selected_field(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.selected)
    }

    pub(crate) fn next_field(&mut self) {
        if self.selected + 1 < self.fields.len() {
            self.selected += 1;
        }
    }

    pub(crate) fn prev_field(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(crate) fn on_last_field(&self) -> bool {
        self.selected + 1 == self.fields.len()
    }

    /// Whether a field is greyed out under the current inputs. Payment date
    /// and method only apply to an entry created as already paid.
    pub(crate) fn field_inactive(&self, key: &str) -> bool {
        matches!(key, "payment_date" | "payment_method")
            && self.kind == FormKind::Payment
            && !self.value("status").trim().eq_ignore_ascii_case("paid")
    }

    pub(crate) fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Attach a validation error to its field and move the cursor there.
    pub(crate) fn set_error(&mut self, error: &FieldError) {
        let key = error.field();
        let message = error.to_string();
        if let Some(pos) = self.fields.iter().position(|f| f.key == key) {
            self.selected = pos;
            self.fields[pos].error = Some(message);
        }
    }

    /// Flip the status field between Pending and Paid (Space shortcut).
    pub(crate) fn toggle_status(&mut self) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == "status") {
            field.value = if field.value.trim().eq_ignore_ascii_case("paid") {
                "Pending".into()
            } else {
                "Paid".into()
            };
        }
    }

    pub(crate) fn expense_input(&self) -> ExpenseInput {
        ExpenseInput {
            category: self.value("category").into(),
            vendor: self.value("vendor").into(),
            description: self.value("description").into(),
            amount: self.value("amount").into(),
            date: self.value("date").into(),
        }
    }

    pub(crate) fn payment_input(&self) -> PaymentInput {
        PaymentInput {
            vendor: self.value("vendor").into(),
            description: self.value("description").into(),
            amount: self.value("amount").into(),
            due_date: self.value("due_date").into(),
            status: self.value("status").into(),
            payment_date: self.value("payment_date").into(),
            payment_method: self.value("payment_method").into(),
        }
    }

    pub(crate) fn contract_input(&self) -> ContractInput {
        ContractInput {
            vendor: self.value("vendor").into(),
            kind: self.value("kind").into(),
            signed_date: self.value("signed_date").into(),
            expiration_date: self.value("expiration_date").into(),
            file_name: self.value("file_name").into(),
        }
    }

    pub(crate) fn appointment_input(&self) -> AppointmentInput {
        AppointmentInput {
            vendor: self.value("vendor").into(),
            kind: self.value("kind").into(),
            date: self.value("date").into(),
            time: self.value("time").into(),
            notes: self.value("notes").into(),
        }
    }

    pub(crate) fn vendor_input(&self) -> VendorInput {
        VendorInput {
            name: self.value("name").into(),
            category: self.value("category").into(),
            description: self.value("description").into(),
            notes: self.value("notes").into(),
        }
    }
}
