use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::app::{App, InputMode, PendingAction, Screen};
use super::form::FormState;
use crate::dates;
use crate::models::Category;
use crate::store::Store;
use crate::ui::util::format_amount;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Store) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit WedTUI", cmd_quit, r);
    register_command!("quit", "Quit WedTUI", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("b", "Go to Budget", cmd_budget, r);
    register_command!("budget", "Go to Budget", cmd_budget, r);
    register_command!("p", "Go to Payments", cmd_payments, r);
    register_command!("payments", "Go to Payments", cmd_payments, r);
    register_command!("c", "Go to Contracts", cmd_contracts, r);
    register_command!("contracts", "Go to Contracts", cmd_contracts, r);
    register_command!("v", "Go to Vendors", cmd_vendors, r);
    register_command!("vendors", "Go to Vendors", cmd_vendors, r);
    register_command!("m", "Go to Messages", cmd_messages, r);
    register_command!("messages", "Go to Messages", cmd_messages, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "total",
        "Set total budget (e.g. :total 30000)",
        cmd_total,
        r
    );
    register_command!(
        "alloc",
        "Set a category budget (e.g. :alloc Venue 12000)",
        cmd_alloc,
        r
    );
    register_command!(
        "paytotal",
        "Override the payments total (e.g. :paytotal 22000)",
        cmd_paytotal,
        r
    );
    register_command!("expense", "Add an expense", cmd_expense, r);
    register_command!("payment", "Add a payment", cmd_payment, r);
    register_command!("contract", "Add a contract", cmd_contract, r);
    register_command!("appointment", "Add an appointment", cmd_appointment, r);
    register_command!("vendor", "Add a vendor", cmd_vendor, r);
    register_command!("pay", "Mark selected payment as paid", cmd_pay, r);
    register_command!("delete", "Delete the selected entry", cmd_delete, r);
    register_command!("undo", "Undo the last delete", cmd_undo, r);
    register_command!(
        "search",
        "Search vendors (e.g. :search florist)",
        cmd_search,
        r
    );
    register_command!("rate", "Rate selected vendor (e.g. :rate 4)", cmd_rate, r);
    register_command!("fav", "Toggle favorite on selected vendor", cmd_fav, r);
    register_command!("msg", "Message the open vendor thread", cmd_msg, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Navigation commands ──────────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_dashboard(store);
    Ok(())
}

fn cmd_budget(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Budget;
    app.refresh_budget(store);
    Ok(())
}

fn cmd_payments(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Payments;
    app.refresh_payments(store);
    Ok(())
}

fn cmd_contracts(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Contracts;
    app.refresh_contracts(store);
    Ok(())
}

fn cmd_vendors(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Vendors;
    app.refresh_vendors(store);
    Ok(())
}

fn cmd_messages(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Messages;
    app.refresh_messages(store);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

// ── Budget commands ──────────────────────────────────────────

fn cmd_total(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :total <amount>. Example: :total 30000");
        return Ok(());
    }

    let new_total = match Decimal::from_str(args) {
        Ok(t) => t,
        Err(_) => {
            app.set_status("Invalid amount. Please enter a valid number for the budget");
            return Ok(());
        }
    };

    match store.update_total_budget(new_total) {
        Ok(()) => {
            app.refresh_budget(store);
            app.refresh_dashboard(store);
            app.set_status(format!(
                "Total budget updated to {}",
                format_amount(new_total)
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_alloc(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :alloc <category> <amount>. Example: :alloc Venue 12000");
        return Ok(());
    }

    // Last token is the amount, everything before is the category name.
    let parts: Vec<&str> = args.rsplitn(2, ' ').collect();
    if parts.len() < 2 {
        app.set_status("Usage: :alloc <category> <amount>");
        return Ok(());
    }
    let amount_str = parts[0];
    let category_name = parts[1];

    let amount = match Decimal::from_str(amount_str) {
        Ok(a) => a,
        Err(_) => {
            app.set_status(format!("Invalid amount: {amount_str}"));
            return Ok(());
        }
    };

    // Name match first, then a numeric id.
    let category = Category::find_by_name(store.categories(), category_name).or_else(|| {
        category_name
            .parse::<i64>()
            .ok()
            .and_then(|id| Category::find_by_id(store.categories(), id))
    });
    let Some(category) = category else {
        app.set_status(format!("Category '{category_name}' not found"));
        return Ok(());
    };
    let Some(id) = category.id else {
        app.set_status("Category has no ID (this shouldn't happen)");
        return Ok(());
    };
    let name = category.name.clone();

    let mut changes = HashMap::new();
    changes.insert(id, amount);
    match store.update_category_budgets(&changes) {
        Ok(()) => {
            app.screen = Screen::Budget;
            app.refresh_budget(store);
            app.refresh_dashboard(store);
            app.set_status(format!(
                "{name} budget set to {}. New total: {}",
                format_amount(amount),
                format_amount(store.summary().total)
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_paytotal(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :paytotal <amount>. Example: :paytotal 22000");
        return Ok(());
    }

    let amount = match Decimal::from_str(args) {
        Ok(a) => a,
        Err(_) => {
            app.set_status("Invalid amount. Please enter a valid number for the total");
            return Ok(());
        }
    };

    match store.set_payment_total_override(amount) {
        Ok(()) => {
            app.refresh_payments(store);
            app.set_status(format!(
                "Total payments updated to {}",
                format_amount(amount)
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

// ── Add-entry commands ───────────────────────────────────────

fn cmd_expense(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Budget;
    app.refresh_budget(store);
    app.form = Some(FormState::expense());
    app.input_mode = InputMode::Form;
    Ok(())
}

fn cmd_payment(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Payments;
    app.refresh_payments(store);
    app.form = Some(FormState::payment());
    app.input_mode = InputMode::Form;
    Ok(())
}

fn cmd_contract(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Contracts;
    app.contract_view_appointments = false;
    app.refresh_contracts(store);
    app.form = Some(FormState::contract());
    app.input_mode = InputMode::Form;
    Ok(())
}

fn cmd_appointment(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Contracts;
    app.contract_view_appointments = true;
    app.refresh_contracts(store);
    app.form = Some(FormState::appointment());
    app.input_mode = InputMode::Form;
    Ok(())
}

fn cmd_vendor(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Vendors;
    app.refresh_vendors(store);
    app.form = Some(FormState::vendor());
    app.input_mode = InputMode::Form;
    Ok(())
}

// ── Mutation commands ────────────────────────────────────────

fn cmd_pay(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    if app.screen != Screen::Payments {
        app.set_status("Navigate to Payments and select one first");
        return Ok(());
    }

    let Some(payment) = app.payments_view.get(app.payment_index) else {
        app.set_status("No payment selected");
        return Ok(());
    };
    if payment.is_paid() {
        app.set_status("Payment is already marked as paid");
        return Ok(());
    }
    if let Some(id) = payment.id {
        let description = payment.description.clone();
        app.confirm_message = format!(
            "Mark '{description}' ({}) as paid?",
            format_amount(payment.amount)
        );
        app.pending_action = Some(PendingAction::MarkPaid { id, description });
        app.input_mode = InputMode::Confirm;
    }
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    match app.screen {
        Screen::Budget => {
            let Some(expense) = app.expenses.get(app.expense_index) else {
                app.set_status("No expense selected");
                return Ok(());
            };
            if let Some(id) = expense.id {
                let description = expense.description.clone();
                app.confirm_message = format!(
                    "Delete expense '{description}' ({})? This can be undone",
                    format_amount(expense.amount)
                );
                app.pending_action = Some(PendingAction::DeleteExpense { id, description });
                app.input_mode = InputMode::Confirm;
            }
        }
        Screen::Contracts if app.contract_view_appointments => {
            let Some(appointment) = app.appointments.get(app.appointment_index) else {
                app.set_status("No appointment selected");
                return Ok(());
            };
            if let Some(id) = appointment.id {
                let vendor = appointment.vendor.clone();
                app.confirm_message = format!("Delete appointment with '{vendor}'?");
                app.pending_action = Some(PendingAction::DeleteAppointment { id, vendor });
                app.input_mode = InputMode::Confirm;
            }
        }
        Screen::Contracts => {
            let Some(contract) = app.contracts.get(app.contract_index) else {
                app.set_status("No contract selected");
                return Ok(());
            };
            if let Some(id) = contract.id {
                let vendor = contract.vendor.clone();
                app.confirm_message = format!("Delete contract for '{vendor}'?");
                app.pending_action = Some(PendingAction::DeleteContract { id, vendor });
                app.input_mode = InputMode::Confirm;
            }
        }
        Screen::Dashboard => {
            // Reminder dismissal is light enough to skip confirmation; it
            // arms the undo register like any other delete.
            let Some(reminder) = app.reminders.get(app.reminder_index).cloned() else {
                app.set_status("No reminder selected");
                return Ok(());
            };
            let undo = store.dismiss_reminder(reminder.key, reminder.title.clone());
            app.undo.arm(undo);
            app.refresh_dashboard(store);
            app.set_status(format!("Reminder '{}' removed. u restores it", reminder.title));
        }
        _ => app.set_status("Nothing to delete on this screen"),
    }
    Ok(())
}

fn cmd_undo(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    match app.undo.take() {
        Some(action) => {
            let message = store.apply_undo(action);
            app.refresh_all(store);
            app.set_status(message);
        }
        None => app.set_status("Nothing to undo"),
    }
    Ok(())
}

// ── Vendor commands ──────────────────────────────────────────

fn cmd_search(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Vendors;
    app.vendor_index = 0;
    app.vendor_scroll = 0;
    app.refresh_vendors(store);

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching vendors: {args}"));
    }
    Ok(())
}

fn cmd_rate(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if app.screen != Screen::Vendors {
        app.set_status("Navigate to Vendors and select one first");
        return Ok(());
    }
    let Ok(rating) = args.parse::<u8>() else {
        app.set_status("Usage: :rate <0-5>");
        return Ok(());
    };
    if rating > crate::models::MAX_RATING {
        app.set_status("Usage: :rate <0-5>");
        return Ok(());
    }

    let Some(vendor) = app.selected_vendor() else {
        app.set_status("No vendor selected");
        return Ok(());
    };
    let Some(id) = vendor.id else {
        return Ok(());
    };
    let name = vendor.name.clone();
    let current = vendor.rating;

    let delta = i8::try_from(i16::from(rating) - i16::from(current)).unwrap_or(0);
    match store.adjust_rating(id, delta) {
        Ok(new_rating) => {
            app.refresh_vendors(store);
            app.set_status(format!("{name} rated {new_rating}/5"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_fav(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if app.screen != Screen::Vendors {
        app.set_status("Navigate to Vendors and select one first");
        return Ok(());
    }
    let Some(vendor) = app.selected_vendor() else {
        app.set_status("No vendor selected");
        return Ok(());
    };
    let Some(id) = vendor.id else {
        return Ok(());
    };
    let name = vendor.name.clone();

    match store.toggle_favorite(id) {
        Ok(true) => {
            app.refresh_vendors(store);
            app.set_status(format!("{name} added to favorites"));
        }
        Ok(false) => {
            app.refresh_vendors(store);
            app.set_status(format!("{name} removed from favorites"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

// ── Messaging ────────────────────────────────────────────────

fn cmd_msg(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.trim().is_empty() {
        app.set_status("Usage: :msg <text>");
        return Ok(());
    }
    let Some(vendor_id) = app.message_vendor_id() else {
        app.set_status("Open a vendor conversation first (:m, then Enter)");
        return Ok(());
    };

    match store.send_message(vendor_id, args.trim().to_string(), dates::now_timestamp()) {
        Ok(_) => {
            app.screen = Screen::Messages;
            app.open_thread = Some(vendor_id);
            app.refresh_messages(store);
            app.set_status("Message sent");
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}
