use crate::models::{Appointment, Contract, Expense, ReminderKey};

/// Inverse of the most recent destructive action. Deletes capture the
/// removed record together with its list position so undo restores the
/// collection bit-for-bit, not just set-wise.
#[derive(Debug, Clone)]
pub(crate) enum UndoAction {
    RestoreExpense { expense: Expense, index: usize },
    RestoreContract { contract: Contract, index: usize },
    RestoreAppointment { appointment: Appointment, index: usize },
    RestoreReminder { key: ReminderKey, title: String },
}

impl UndoAction {
    /// Short label for the status line, e.g. "Restored expense 'Venue deposit'".
    pub(crate) fn undone_message(&self) -> String {
        match self {
            Self::RestoreExpense { expense, .. } => {
                format!("Restored expense '{}'", expense.description)
            }
            Self::RestoreContract { contract, .. } => {
                format!("Restored contract for {}", contract.vendor)
            }
            Self::RestoreAppointment { appointment, .. } => {
                format!("Restored appointment with {}", appointment.vendor)
            }
            Self::RestoreReminder { title, .. } => format!("Restored reminder '{title}'"),
        }
    }
}

/// One-slot undo register: holds only the most recent inverse action, and
/// taking it disarms the register. A new delete overwrites whatever was
/// armed before, so there is exactly one level of undo.
#[derive(Debug, Default)]
pub(crate) struct UndoRegister {
    slot: Option<UndoAction>,
}

impl UndoRegister {
    pub(crate) fn arm(&mut self, action: UndoAction) {
        self.slot = Some(action);
    }

    pub(crate) fn take(&mut self) -> Option<UndoAction> {
        self.slot.take()
    }
}
