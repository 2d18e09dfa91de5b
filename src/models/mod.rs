mod appointment;
mod budget;
mod category;
mod contract;
mod expense;
mod message;
mod payment;
mod reminder;
mod vendor;

pub use appointment::Appointment;
pub use budget::BudgetSummary;
pub use category::{percentage_of, Category};
pub use contract::Contract;
pub use expense::Expense;
pub use message::{Message, Sender};
pub use payment::{Payment, PaymentStatus, DEFAULT_PAYMENT_METHOD};
pub use reminder::{Reminder, ReminderKey, ReminderKind};
pub use vendor::{Vendor, MAX_RATING};

#[cfg(test)]
mod tests;
