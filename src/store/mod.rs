//! In-memory repositories for every entity the planner tracks. The store is
//! the single owner of all state; the UI and CLI layers only ever see
//! borrowed views or cloned snapshots. Nothing here touches disk — process
//! exit discards everything and the next launch starts from the seed data.

mod seed;

pub(crate) use seed::VENDOR_CATEGORIES;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

use crate::dates;
use crate::models::{
    percentage_of, Appointment, BudgetSummary, Category, Contract, Expense, Message, Payment,
    PaymentStatus, Reminder, ReminderKey, Sender, Vendor, DEFAULT_PAYMENT_METHOD, MAX_RATING,
};
use crate::undo::UndoAction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum StoreError {
    #[error("Budget must be a positive number")]
    InvalidTotal,
    #[error("Category budgets cannot be negative")]
    NegativeBudget,
    #[error("Total cannot be negative")]
    NegativeTotal,
    #[error("Payment is already marked as paid")]
    AlreadyPaid,
    #[error("No expense with id {0}")]
    UnknownExpense(i64),
    #[error("No payment with id {0}")]
    UnknownPayment(i64),
    #[error("No contract with id {0}")]
    UnknownContract(i64),
    #[error("No appointment with id {0}")]
    UnknownAppointment(i64),
    #[error("No vendor with id {0}")]
    UnknownVendor(i64),
}

/// Monotonic per-entity id counters. Ids are assigned here, never derived
/// from collection length, so a delete-then-add can never reuse an id.
#[derive(Debug, Default)]
struct IdCounters {
    expense: i64,
    payment: i64,
    contract: i64,
    appointment: i64,
    vendor: i64,
}

impl IdCounters {
    fn from_seed(store: &Store) -> Self {
        fn max_id(ids: impl Iterator<Item = Option<i64>>) -> i64 {
            ids.flatten().max().unwrap_or(0)
        }
        Self {
            expense: max_id(store.expenses.iter().map(|e| e.id)),
            payment: max_id(store.payments.iter().map(|p| p.id)),
            contract: max_id(store.contracts.iter().map(|c| c.id)),
            appointment: max_id(store.appointments.iter().map(|a| a.id)),
            vendor: max_id(store.vendors.iter().map(|v| v.id)),
        }
    }
}

/// Paid/pending breakdown of the payment ledger. `total` honors a manual
/// override when one has been set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PaymentTotals {
    pub(crate) total: Decimal,
    pub(crate) paid: Decimal,
    pub(crate) pending: Decimal,
}

pub(crate) struct Store {
    total_budget: Decimal,
    categories: Vec<Category>,
    expenses: Vec<Expense>,
    payments: Vec<Payment>,
    payment_total_override: Option<Decimal>,
    contracts: Vec<Contract>,
    appointments: Vec<Appointment>,
    vendors: Vec<Vendor>,
    threads: BTreeMap<i64, Vec<Message>>,
    dismissed_reminders: HashSet<ReminderKey>,
    ids: IdCounters,
}

impl Store {
    pub(crate) fn seeded() -> Self {
        let mut store = Self {
            total_budget: seed::total_budget(),
            categories: seed::categories(),
            expenses: seed::expenses(),
            payments: seed::payments(),
            payment_total_override: None,
            contracts: seed::contracts(),
            appointments: seed::appointments(),
            vendors: seed::vendors(),
            threads: seed::threads(),
            dismissed_reminders: HashSet::new(),
            ids: IdCounters::default(),
        };
        store.ids = IdCounters::from_seed(&store);
        store
    }

    // ── Budget ────────────────────────────────────────────────

    pub(crate) fn summary(&self) -> BudgetSummary {
        BudgetSummary::derive(self.total_budget, &self.categories)
    }

    pub(crate) fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Replace the grand total and rescale every category's percentage
    /// against it. Category budget amounts are deliberately left alone:
    /// whichever side the user edited last keeps its entered values, so a
    /// total edit only moves the percentages (and they may no longer sum
    /// to 100).
    pub(crate) fn update_total_budget(&mut self, new_total: Decimal) -> Result<(), StoreError> {
        if new_total <= Decimal::ZERO {
            return Err(StoreError::InvalidTotal);
        }
        self.total_budget = new_total;
        for category in &mut self.categories {
            category.percentage = percentage_of(category.budget, new_total);
        }
        Ok(())
    }

    /// Apply per-category budget edits and replace the grand total with the
    /// new category sum. The mirror image of `update_total_budget`: here the
    /// per-category amounts win and the total follows.
    pub(crate) fn update_category_budgets(
        &mut self,
        changes: &HashMap<i64, Decimal>,
    ) -> Result<(), StoreError> {
        if changes.values().any(|amount| *amount < Decimal::ZERO) {
            return Err(StoreError::NegativeBudget);
        }

        let new_total: Decimal = self
            .categories
            .iter()
            .map(|c| c.id.and_then(|id| changes.get(&id)).copied().unwrap_or(c.budget))
            .sum();

        for category in &mut self.categories {
            if let Some(amount) = category.id.and_then(|id| changes.get(&id)) {
                category.budget = *amount;
            }
            category.percentage = percentage_of(category.budget, new_total);
        }
        self.total_budget = new_total;
        Ok(())
    }

    // ── Expenses ──────────────────────────────────────────────

    pub(crate) fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Prepend a new expense and add its amount to the matching category's
    /// spend. An expense whose category matches no bucket still lands in the
    /// ledger; it just doesn't move any category bar.
    pub(crate) fn add_expense(&mut self, mut expense: Expense) -> i64 {
        self.ids.expense += 1;
        let id = self.ids.expense;
        expense.id = Some(id);
        self.bump_category_spent(&expense.category, expense.amount);
        self.expenses.insert(0, expense);
        id
    }

    /// Remove an expense by id, roll its amount back out of the category
    /// spend, and hand back the inverse action for the undo register.
    pub(crate) fn delete_expense(&mut self, id: i64) -> Result<UndoAction, StoreError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == Some(id))
            .ok_or(StoreError::UnknownExpense(id))?;
        let expense = self.expenses.remove(index);
        self.bump_category_spent(&expense.category, -expense.amount);
        Ok(UndoAction::RestoreExpense { expense, index })
    }

    fn bump_category_spent(&mut self, category_name: &str, delta: Decimal) {
        let lower = category_name.to_lowercase();
        if let Some(category) = self
            .categories
            .iter_mut()
            .find(|c| c.name.to_lowercase() == lower)
        {
            category.spent += delta;
        }
    }

    // ── Payments ──────────────────────────────────────────────

    pub(crate) fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub(crate) fn add_payment(&mut self, mut payment: Payment) -> i64 {
        self.ids.payment += 1;
        let id = self.ids.payment;
        payment.id = Some(id);
        self.payments.push(payment);
        id
    }

    /// Pending -> Paid, stamping today's date and the quick-pay method.
    /// Paid is terminal; marking an already-paid payment is an error.
    pub(crate) fn mark_paid(&mut self, id: i64, today: &str) -> Result<&Payment, StoreError> {
        let payment = self
            .payments
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or(StoreError::UnknownPayment(id))?;
        if payment.is_paid() {
            return Err(StoreError::AlreadyPaid);
        }
        payment.status = PaymentStatus::Paid;
        payment.payment_date = Some(today.to_string());
        payment.payment_method = Some(DEFAULT_PAYMENT_METHOD.to_string());
        Ok(payment)
    }

    /// Manual override for the headline payments total. The calculated sum
    /// still shows alongside when they differ.
    pub(crate) fn set_payment_total_override(&mut self, amount: Decimal) -> Result<(), StoreError> {
        if amount < Decimal::ZERO {
            return Err(StoreError::NegativeTotal);
        }
        self.payment_total_override = Some(amount);
        Ok(())
    }

    pub(crate) fn calculated_payment_total(&self) -> Decimal {
        self.payments.iter().map(|p| p.amount).sum()
    }

    pub(crate) fn payment_totals(&self) -> PaymentTotals {
        let calculated = self.calculated_payment_total();
        let total = self.payment_total_override.unwrap_or(calculated);
        let paid: Decimal = self
            .payments
            .iter()
            .filter(|p| p.is_paid())
            .map(|p| p.amount)
            .sum();
        PaymentTotals {
            total,
            paid,
            pending: total - paid,
        }
    }

    pub(crate) fn pending_payments(&self) -> Vec<&Payment> {
        let mut pending: Vec<&Payment> =
            self.payments.iter().filter(|p| p.is_pending()).collect();
        pending.sort_by_key(|p| dates::sort_key(&p.due_date));
        pending
    }

    pub(crate) fn paid_payments(&self) -> Vec<&Payment> {
        self.payments.iter().filter(|p| p.is_paid()).collect()
    }

    /// Pending payments due within the next 30 days, soonest first.
    pub(crate) fn payments_due_soon(&self, today: NaiveDate) -> Vec<&Payment> {
        self.pending_payments()
            .into_iter()
            .filter(|p| dates::within_soon_window(&p.due_date, today))
            .collect()
    }

    // ── Contracts ─────────────────────────────────────────────

    pub(crate) fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub(crate) fn add_contract(&mut self, mut contract: Contract) -> i64 {
        self.ids.contract += 1;
        let id = self.ids.contract;
        contract.id = Some(id);
        self.contracts.push(contract);
        id
    }

    pub(crate) fn delete_contract(&mut self, id: i64) -> Result<UndoAction, StoreError> {
        let index = self
            .contracts
            .iter()
            .position(|c| c.id == Some(id))
            .ok_or(StoreError::UnknownContract(id))?;
        let contract = self.contracts.remove(index);
        Ok(UndoAction::RestoreContract { contract, index })
    }

    /// Contracts whose expiration falls within the next 30 days.
    pub(crate) fn expiring_contracts(&self, today: NaiveDate) -> Vec<&Contract> {
        self.contracts
            .iter()
            .filter(|c| dates::within_soon_window(&c.expiration_date, today))
            .collect()
    }

    // ── Appointments ──────────────────────────────────────────

    pub(crate) fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub(crate) fn add_appointment(&mut self, mut appointment: Appointment) -> i64 {
        self.ids.appointment += 1;
        let id = self.ids.appointment;
        appointment.id = Some(id);
        self.appointments.push(appointment);
        id
    }

    pub(crate) fn delete_appointment(&mut self, id: i64) -> Result<UndoAction, StoreError> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.id == Some(id))
            .ok_or(StoreError::UnknownAppointment(id))?;
        let appointment = self.appointments.remove(index);
        Ok(UndoAction::RestoreAppointment { appointment, index })
    }

    /// Appointments from today onward, soonest first.
    pub(crate) fn upcoming_appointments(&self, today: NaiveDate) -> Vec<&Appointment> {
        let mut upcoming: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| dates::on_or_after(&a.date, today))
            .collect();
        upcoming.sort_by_key(|a| dates::sort_key(&a.date));
        upcoming
    }

    // ── Vendors ───────────────────────────────────────────────

    pub(crate) fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub(crate) fn vendor_by_id(&self, id: i64) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == Some(id))
    }

    pub(crate) fn add_vendor(&mut self, mut vendor: Vendor) -> i64 {
        self.ids.vendor += 1;
        let id = self.ids.vendor;
        vendor.id = Some(id);
        self.vendors.push(vendor);
        id
    }

    pub(crate) fn search_vendors(&self, query: &str) -> Vec<&Vendor> {
        self.vendors.iter().filter(|v| v.matches(query)).collect()
    }

    /// Returns the new favorite state.
    pub(crate) fn toggle_favorite(&mut self, id: i64) -> Result<bool, StoreError> {
        let vendor = self
            .vendors
            .iter_mut()
            .find(|v| v.id == Some(id))
            .ok_or(StoreError::UnknownVendor(id))?;
        vendor.is_favorite = !vendor.is_favorite;
        Ok(vendor.is_favorite)
    }

    /// Nudge a vendor's star rating up or down, clamped to 0-5. Returns the
    /// new rating.
    pub(crate) fn adjust_rating(&mut self, id: i64, delta: i8) -> Result<u8, StoreError> {
        let vendor = self
            .vendors
            .iter_mut()
            .find(|v| v.id == Some(id))
            .ok_or(StoreError::UnknownVendor(id))?;
        let rating = i16::from(vendor.rating) + i16::from(delta);
        vendor.rating = rating.clamp(0, i16::from(MAX_RATING)) as u8;
        Ok(vendor.rating)
    }

    // ── Messages ──────────────────────────────────────────────

    pub(crate) fn messages(&self, vendor_id: i64) -> &[Message] {
        self.threads.get(&vendor_id).map_or(&[], Vec::as_slice)
    }

    /// Append a user message to a vendor thread. Vendors never reply; their
    /// side of every conversation is seed data only.
    pub(crate) fn send_message(
        &mut self,
        vendor_id: i64,
        text: String,
        timestamp: String,
    ) -> Result<&Message, StoreError> {
        if self.vendor_by_id(vendor_id).is_none() {
            return Err(StoreError::UnknownVendor(vendor_id));
        }
        let thread = self.threads.entry(vendor_id).or_default();
        let id = thread.last().map_or(1, |m| m.id + 1);
        thread.push(Message {
            id,
            sender: Sender::User,
            text,
            timestamp,
        });
        // Just pushed, so the thread is non-empty.
        Ok(&thread[thread.len() - 1])
    }

    // ── Reminders ─────────────────────────────────────────────

    /// The dashboard feed: pending payments due soon plus upcoming
    /// appointments, minus anything dismissed, soonest first. Derived fresh
    /// on every call — there is no stored reminder list to drift out of
    /// sync with the ledgers.
    pub(crate) fn reminders(&self, today: NaiveDate) -> Vec<Reminder> {
        let mut feed: Vec<Reminder> = Vec::new();

        for payment in self.payments_due_soon(today) {
            let Some(id) = payment.id else { continue };
            let key = ReminderKey::payment(id);
            if self.dismissed_reminders.contains(&key) {
                continue;
            }
            feed.push(Reminder {
                key,
                title: format!("{} due", payment.description),
                date: payment.due_date.clone(),
                vendor: payment.vendor.clone(),
            });
        }

        for appointment in self.upcoming_appointments(today) {
            let Some(id) = appointment.id else { continue };
            let key = ReminderKey::appointment(id);
            if self.dismissed_reminders.contains(&key) {
                continue;
            }
            feed.push(Reminder {
                key,
                title: appointment.kind.clone(),
                date: appointment.date.clone(),
                vendor: appointment.vendor.clone(),
            });
        }

        feed.sort_by_key(|r| dates::sort_key(&r.date));
        feed
    }

    pub(crate) fn dismiss_reminder(&mut self, key: ReminderKey, title: String) -> UndoAction {
        self.dismissed_reminders.insert(key);
        UndoAction::RestoreReminder { key, title }
    }

    // ── Undo ──────────────────────────────────────────────────

    /// Apply an inverse action from the undo register and describe what was
    /// put back. Restores land at their original index so the list order
    /// round-trips exactly.
    pub(crate) fn apply_undo(&mut self, action: UndoAction) -> String {
        let message = action.undone_message();
        match action {
            UndoAction::RestoreExpense { expense, index } => {
                self.bump_category_spent(&expense.category, expense.amount);
                let at = index.min(self.expenses.len());
                self.expenses.insert(at, expense);
            }
            UndoAction::RestoreContract { contract, index } => {
                let at = index.min(self.contracts.len());
                self.contracts.insert(at, contract);
            }
            UndoAction::RestoreAppointment { appointment, index } => {
                let at = index.min(self.appointments.len());
                self.appointments.insert(at, appointment);
            }
            UndoAction::RestoreReminder { key, .. } => {
                self.dismissed_reminders.remove(&key);
            }
        }
        message
    }
}

#[cfg(test)]
mod tests;
