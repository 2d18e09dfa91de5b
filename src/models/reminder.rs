#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderKind {
    Payment,
    Appointment,
}

impl ReminderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Appointment => "appointment",
        }
    }
}

/// Stable identity of a reminder across recomputation: the kind plus the id
/// of the payment or appointment it was derived from. Dismissals are keyed
/// on this so a dismissed reminder stays gone when the feed is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReminderKey {
    pub kind: ReminderKind,
    pub source_id: i64,
}

impl ReminderKey {
    pub fn payment(source_id: i64) -> Self {
        Self {
            kind: ReminderKind::Payment,
            source_id,
        }
    }

    pub fn appointment(source_id: i64) -> Self {
        Self {
            kind: ReminderKind::Appointment,
            source_id,
        }
    }
}

/// A dashboard notice derived from an upcoming payment or appointment.
/// Reminders are recomputed from the underlying records on every refresh
/// rather than stored as a third list of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub key: ReminderKey,
    pub title: String,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    pub vendor: String,
}
