use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::dates;
use crate::models::{
    Appointment, BudgetSummary, Category, Contract, Expense, Message, Payment, Reminder, Vendor,
};
use crate::store::{PaymentTotals, Store};
use crate::ui::form::FormState;
use crate::undo::UndoRegister;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Budget,
    Payments,
    Contracts,
    Vendors,
    Messages,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::Budget,
            Self::Payments,
            Self::Contracts,
            Self::Vendors,
            Self::Messages,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Budget => write!(f, "Budget"),
            Self::Payments => write!(f, "Payments"),
            Self::Contracts => write!(f, "Contracts"),
            Self::Vendors => write!(f, "Vendors"),
            Self::Messages => write!(f, "Messages"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    /// An add-entry form is open and capturing keystrokes.
    Form,
    /// Typing a message in the open conversation.
    Compose,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Form => write!(f, "FORM"),
            Self::Compose => write!(f, "COMPOSE"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires a y/N confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteExpense { id: i64, description: String },
    DeleteContract { id: i64, vendor: String },
    DeleteAppointment { id: i64, vendor: String },
    MarkPaid { id: i64, description: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaymentTab {
    Upcoming,
    Pending,
    Paid,
}

impl PaymentTab {
    pub(crate) fn all() -> &'static [PaymentTab] {
        &[Self::Upcoming, Self::Pending, Self::Paid]
    }

    pub(crate) fn next(&self) -> Self {
        match self {
            Self::Upcoming => Self::Pending,
            Self::Pending => Self::Paid,
            Self::Paid => Self::Upcoming,
        }
    }

    pub(crate) fn prev(&self) -> Self {
        match self {
            Self::Upcoming => Self::Paid,
            Self::Pending => Self::Upcoming,
            Self::Paid => Self::Pending,
        }
    }
}

impl std::fmt::Display for PaymentTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "Due Soon"),
            Self::Pending => write!(f, "Pending"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

/// All view state. The store owns the data; the app holds the snapshots the
/// current frame renders from, refreshed after every mutation.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) today: NaiveDate,

    // Dashboard
    pub(crate) summary: BudgetSummary,
    pub(crate) reminders: Vec<Reminder>,
    pub(crate) reminder_index: usize,

    // Budget
    pub(crate) categories: Vec<Category>,
    pub(crate) category_index: usize,
    pub(crate) expenses: Vec<Expense>,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,
    pub(crate) budget_view_expenses: bool,

    // Payments
    pub(crate) payment_tab: PaymentTab,
    pub(crate) payments_view: Vec<Payment>,
    pub(crate) payment_index: usize,
    pub(crate) payment_scroll: usize,
    pub(crate) payment_totals: PaymentTotals,
    pub(crate) calculated_payment_total: Decimal,

    // Contracts
    pub(crate) contracts: Vec<Contract>,
    pub(crate) contract_index: usize,
    pub(crate) appointments: Vec<Appointment>,
    pub(crate) appointment_index: usize,
    pub(crate) expiring: Vec<Contract>,
    pub(crate) contract_view_appointments: bool,

    // Vendors (filtered by the live search input)
    pub(crate) vendors_view: Vec<Vendor>,
    pub(crate) vendor_index: usize,
    pub(crate) vendor_scroll: usize,

    // Messages
    pub(crate) thread_list: Vec<Vendor>,
    pub(crate) thread_index: usize,
    pub(crate) open_thread: Option<i64>,
    pub(crate) conversation: Vec<Message>,
    pub(crate) compose_input: String,

    // Add-entry form overlay
    pub(crate) form: Option<FormState>,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    pub(crate) undo: UndoRegister,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(store: &Store) -> Self {
        let today = dates::today();
        let mut app = Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,
            today,

            summary: store.summary(),
            reminders: Vec::new(),
            reminder_index: 0,

            categories: Vec::new(),
            category_index: 0,
            expenses: Vec::new(),
            expense_index: 0,
            expense_scroll: 0,
            budget_view_expenses: false,

            payment_tab: PaymentTab::Upcoming,
            payments_view: Vec::new(),
            payment_index: 0,
            payment_scroll: 0,
            payment_totals: store.payment_totals(),
            calculated_payment_total: store.calculated_payment_total(),

            contracts: Vec::new(),
            contract_index: 0,
            appointments: Vec::new(),
            appointment_index: 0,
            expiring: Vec::new(),
            contract_view_appointments: false,

            vendors_view: Vec::new(),
            vendor_index: 0,
            vendor_scroll: 0,

            thread_list: Vec::new(),
            thread_index: 0,
            open_thread: None,
            conversation: Vec::new(),
            compose_input: String::new(),

            form: None,

            pending_action: None,
            confirm_message: String::new(),

            undo: UndoRegister::default(),

            visible_rows: 20,
        };
        app.refresh_all(store);
        app
    }

    pub(crate) fn refresh_dashboard(&mut self, store: &Store) {
        self.summary = store.summary();
        self.reminders = store.reminders(self.today);
        clamp(&mut self.reminder_index, self.reminders.len());
    }

    pub(crate) fn refresh_budget(&mut self, store: &Store) {
        self.summary = store.summary();
        self.categories = store.categories().to_vec();
        self.expenses = store.expenses().to_vec();
        clamp(&mut self.category_index, self.categories.len());
        clamp(&mut self.expense_index, self.expenses.len());
    }

    pub(crate) fn refresh_payments(&mut self, store: &Store) {
        self.payment_totals = store.payment_totals();
        self.calculated_payment_total = store.calculated_payment_total();
        self.payments_view = match self.payment_tab {
            PaymentTab::Upcoming => store
                .payments_due_soon(self.today)
                .into_iter()
                .cloned()
                .collect(),
            PaymentTab::Pending => store.pending_payments().into_iter().cloned().collect(),
            PaymentTab::Paid => store.paid_payments().into_iter().cloned().collect(),
        };
        clamp(&mut self.payment_index, self.payments_view.len());
    }

    pub(crate) fn refresh_contracts(&mut self, store: &Store) {
        self.contracts = store.contracts().to_vec();
        self.appointments = store.appointments().to_vec();
        self.expiring = store
            .expiring_contracts(self.today)
            .into_iter()
            .cloned()
            .collect();
        clamp(&mut self.contract_index, self.contracts.len());
        clamp(&mut self.appointment_index, self.appointments.len());
    }

    pub(crate) fn refresh_vendors(&mut self, store: &Store) {
        self.vendors_view = store
            .search_vendors(&self.search_input)
            .into_iter()
            .cloned()
            .collect();
        clamp(&mut self.vendor_index, self.vendors_view.len());
    }

    pub(crate) fn refresh_messages(&mut self, store: &Store) {
        self.thread_list = store.vendors().to_vec();
        clamp(&mut self.thread_index, self.thread_list.len());
        self.conversation = match self.open_thread {
            Some(vendor_id) => store.messages(vendor_id).to_vec(),
            None => Vec::new(),
        };
    }

    pub(crate) fn refresh_all(&mut self, store: &Store) {
        self.refresh_dashboard(store);
        self.refresh_budget(store);
        self.refresh_payments(store);
        self.refresh_contracts(store);
        self.refresh_vendors(store);
        self.refresh_messages(store);
    }

    /// Vendor currently under the cursor on the Vendors screen.
    pub(crate) fn selected_vendor(&self) -> Option<&Vendor> {
        self.vendors_view.get(self.vendor_index)
    }

    /// Vendor whose conversation is open, or under the cursor in the thread
    /// list when none is open yet.
    pub(crate) fn message_vendor_id(&self) -> Option<i64> {
        match self.open_thread {
            Some(id) => Some(id),
            None => self.thread_list.get(self.thread_index).and_then(|v| v.id),
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

fn clamp(index: &mut usize, len: usize) {
    if *index >= len {
        *index = len.saturating_sub(1);
    }
}
