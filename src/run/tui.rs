use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rust_decimal::Decimal;
use std::io;

use crate::dates;
use crate::forms;
use crate::store::Store;
use crate::ui::app::{App, InputMode, PendingAction, Screen};
use crate::ui::commands;
use crate::ui::form::{FormKind, FormState};
use crate::ui::util::{format_amount, scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(store: &mut Store) -> Result<()> {
    let mut app = App::new(store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut Store,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 1 tab + 1 status + 1 cmd + 2 borders + 1 header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, store)?,
                InputMode::Command => handle_command_input(key, app, store)?,
                InputMode::Search => handle_search_input(key, app, store)?,
                InputMode::Form => handle_form_input(key, app, store)?,
                InputMode::Compose => handle_compose_input(key, app, store)?,
                InputMode::Confirm => handle_confirm_input(key, app, store)?,
            }
        }
    }
    Ok(())
}

// ── Normal mode ──────────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') if app.screen == Screen::Vendors => {
            app.input_mode = InputMode::Search;
            app.search_input.clear();
            app.refresh_vendors(store);
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, store, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, store, Screen::Budget),
        KeyCode::Char('3') => switch_screen(app, store, Screen::Payments),
        KeyCode::Char('4') => switch_screen(app, store, Screen::Contracts),
        KeyCode::Char('5') => switch_screen(app, store, Screen::Vendors),
        KeyCode::Char('6') => switch_screen(app, store, Screen::Messages),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            switch_screen(app, store, screens[(idx + 1) % screens.len()]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, store, screens[prev]);
        }
        KeyCode::Enter => handle_enter(app, store)?,
        KeyCode::Esc => handle_escape(app, store),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('a') => handle_add(app, store)?,
        KeyCode::Char('D') => commands::handle_command("delete", app, store)?,
        KeyCode::Char('u') => commands::handle_command("undo", app, store)?,
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('r') if app.screen == Screen::Contracts => {
            app.contract_view_appointments = !app.contract_view_appointments;
        }
        KeyCode::Char('e') if app.screen == Screen::Budget => {
            app.budget_view_expenses = !app.budget_view_expenses;
        }
        KeyCode::Char('h') | KeyCode::Left if app.screen == Screen::Payments => {
            app.payment_tab = app.payment_tab.prev();
            app.payment_index = 0;
            app.payment_scroll = 0;
            app.refresh_payments(store);
        }
        KeyCode::Char('l') | KeyCode::Right if app.screen == Screen::Payments => {
            app.payment_tab = app.payment_tab.next();
            app.payment_index = 0;
            app.payment_scroll = 0;
            app.refresh_payments(store);
        }
        KeyCode::Char('P') if app.screen == Screen::Payments => {
            commands::handle_command("pay", app, store)?;
        }
        KeyCode::Char('f') if app.screen == Screen::Vendors => {
            commands::handle_command("fav", app, store)?;
        }
        KeyCode::Char('+') | KeyCode::Char('=') => handle_adjust(app, store, 1)?,
        KeyCode::Char('-') => handle_adjust(app, store, -1)?,
        KeyCode::Char('i') if app.screen == Screen::Messages && app.open_thread.is_some() => {
            app.input_mode = InputMode::Compose;
            app.compose_input.clear();
        }
        _ => {}
    }
    Ok(())
}

fn switch_screen(app: &mut App, store: &mut Store, screen: Screen) {
    app.screen = screen;
    match screen {
        Screen::Dashboard => app.refresh_dashboard(store),
        Screen::Budget => app.refresh_budget(store),
        Screen::Payments => app.refresh_payments(store),
        Screen::Contracts => app.refresh_contracts(store),
        Screen::Vendors => app.refresh_vendors(store),
        Screen::Messages => app.refresh_messages(store),
    }
}

fn handle_add(app: &mut App, store: &mut Store) -> Result<()> {
    let command = match app.screen {
        Screen::Budget => "expense",
        Screen::Payments => "payment",
        Screen::Contracts if app.contract_view_appointments => "appointment",
        Screen::Contracts => "contract",
        Screen::Vendors => "vendor",
        _ => return Ok(()),
    };
    commands::handle_command(command, app, store)
}

fn handle_enter(app: &mut App, store: &mut Store) -> Result<()> {
    match app.screen {
        // Enter on a vendor jumps into its conversation.
        Screen::Vendors => {
            if let Some(id) = app.selected_vendor().and_then(|v| v.id) {
                app.screen = Screen::Messages;
                app.open_thread = Some(id);
                if let Some(pos) = app.thread_list.iter().position(|v| v.id == Some(id)) {
                    app.thread_index = pos;
                }
                app.refresh_messages(store);
            }
        }
        Screen::Messages => {
            if app.open_thread.is_none() {
                app.open_thread = app.thread_list.get(app.thread_index).and_then(|v| v.id);
                app.refresh_messages(store);
            }
        }
        Screen::Payments => commands::handle_command("pay", app, store)?,
        _ => {}
    }
    Ok(())
}

fn handle_escape(app: &mut App, store: &mut Store) {
    match app.screen {
        Screen::Messages if app.open_thread.is_some() => {
            app.open_thread = None;
            app.refresh_messages(store);
        }
        Screen::Vendors if !app.search_input.is_empty() => {
            app.search_input.clear();
            app.vendor_index = 0;
            app.vendor_scroll = 0;
            app.refresh_vendors(store);
        }
        _ => {
            app.status_message.clear();
        }
    }
}

/// +/- adjusts whatever is under the cursor: a vendor's star rating, or a
/// category budget in $100 steps (which rewrites the grand total).
fn handle_adjust(app: &mut App, store: &mut Store, delta: i64) -> Result<()> {
    match app.screen {
        Screen::Vendors => {
            let Some(vendor) = app.selected_vendor() else {
                return Ok(());
            };
            let Some(id) = vendor.id else { return Ok(()) };
            let name = vendor.name.clone();
            if let Ok(rating) = store.adjust_rating(id, delta as i8) {
                app.refresh_vendors(store);
                app.set_status(format!("{name} rated {rating}/5"));
            }
        }
        Screen::Budget if !app.budget_view_expenses => {
            let Some(category) = app.categories.get(app.category_index) else {
                return Ok(());
            };
            let Some(id) = category.id else { return Ok(()) };
            let name = category.name.clone();
            let new_budget = (category.budget + Decimal::from(delta * 100)).max(Decimal::ZERO);

            let mut changes = std::collections::HashMap::new();
            changes.insert(id, new_budget);
            match store.update_category_budgets(&changes) {
                Ok(()) => {
                    app.refresh_budget(store);
                    app.refresh_dashboard(store);
                    app.set_status(format!(
                        "{name} budget set to {}. New total: {}",
                        format_amount(new_budget),
                        format_amount(store.summary().total)
                    ));
                }
                Err(e) => app.set_status(e.to_string()),
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_move_down(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Dashboard => {
            if app.reminder_index + 1 < app.reminders.len() {
                app.reminder_index += 1;
            }
        }
        Screen::Budget => {
            if app.budget_view_expenses {
                scroll_down(
                    &mut app.expense_index,
                    &mut app.expense_scroll,
                    app.expenses.len(),
                    page,
                );
            } else if app.category_index + 1 < app.categories.len() {
                app.category_index += 1;
            }
        }
        Screen::Payments => scroll_down(
            &mut app.payment_index,
            &mut app.payment_scroll,
            app.payments_view.len(),
            page,
        ),
        Screen::Contracts => {
            if app.contract_view_appointments {
                if app.appointment_index + 1 < app.appointments.len() {
                    app.appointment_index += 1;
                }
            } else if app.contract_index + 1 < app.contracts.len() {
                app.contract_index += 1;
            }
        }
        Screen::Vendors => scroll_down(
            &mut app.vendor_index,
            &mut app.vendor_scroll,
            app.vendors_view.len(),
            page,
        ),
        Screen::Messages => {
            if app.open_thread.is_none() && app.thread_index + 1 < app.thread_list.len() {
                app.thread_index += 1;
            }
        }
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Dashboard => app.reminder_index = app.reminder_index.saturating_sub(1),
        Screen::Budget => {
            if app.budget_view_expenses {
                scroll_up(&mut app.expense_index, &mut app.expense_scroll);
            } else {
                app.category_index = app.category_index.saturating_sub(1);
            }
        }
        Screen::Payments => scroll_up(&mut app.payment_index, &mut app.payment_scroll),
        Screen::Contracts => {
            if app.contract_view_appointments {
                app.appointment_index = app.appointment_index.saturating_sub(1);
            } else {
                app.contract_index = app.contract_index.saturating_sub(1);
            }
        }
        Screen::Vendors => scroll_up(&mut app.vendor_index, &mut app.vendor_scroll),
        Screen::Messages => {
            if app.open_thread.is_none() {
                app.thread_index = app.thread_index.saturating_sub(1);
            }
        }
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Dashboard => app.reminder_index = 0,
        Screen::Budget => {
            if app.budget_view_expenses {
                scroll_to_top(&mut app.expense_index, &mut app.expense_scroll);
            } else {
                app.category_index = 0;
            }
        }
        Screen::Payments => scroll_to_top(&mut app.payment_index, &mut app.payment_scroll),
        Screen::Contracts => {
            if app.contract_view_appointments {
                app.appointment_index = 0;
            } else {
                app.contract_index = 0;
            }
        }
        Screen::Vendors => scroll_to_top(&mut app.vendor_index, &mut app.vendor_scroll),
        Screen::Messages => app.thread_index = 0,
    }
}

fn handle_goto_bottom(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Dashboard => {
            app.reminder_index = app.reminders.len().saturating_sub(1);
        }
        Screen::Budget => {
            if app.budget_view_expenses {
                scroll_to_bottom(
                    &mut app.expense_index,
                    &mut app.expense_scroll,
                    app.expenses.len(),
                    page,
                );
            } else {
                app.category_index = app.categories.len().saturating_sub(1);
            }
        }
        Screen::Payments => scroll_to_bottom(
            &mut app.payment_index,
            &mut app.payment_scroll,
            app.payments_view.len(),
            page,
        ),
        Screen::Contracts => {
            if app.contract_view_appointments {
                app.appointment_index = app.appointments.len().saturating_sub(1);
            } else {
                app.contract_index = app.contracts.len().saturating_sub(1);
            }
        }
        Screen::Vendors => scroll_to_bottom(
            &mut app.vendor_index,
            &mut app.vendor_scroll,
            app.vendors_view.len(),
            page,
        ),
        Screen::Messages => app.thread_index = app.thread_list.len().saturating_sub(1),
    }
}

// ── Command mode ─────────────────────────────────────────────

fn handle_command_input(key: event::KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, store)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

// ── Search mode (live vendor filter) ─────────────────────────

fn handle_search_input(key: event::KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.search_input.clear();
            app.refresh_vendors(store);
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.vendor_index = 0;
            app.vendor_scroll = 0;
            app.refresh_vendors(store);
        }
        KeyCode::Char(c) => {
            // Filter as you type.
            app.search_input.push(c);
            app.vendor_index = 0;
            app.vendor_scroll = 0;
            app.refresh_vendors(store);
        }
        _ => {}
    }
    Ok(())
}

// ── Form mode ────────────────────────────────────────────────

fn handle_form_input(key: event::KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    let Some(mut form) = app.form.take() else {
        app.input_mode = InputMode::Normal;
        return Ok(());
    };

    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.set_status("Cancelled");
            return Ok(());
        }
        KeyCode::Enter => {
            if form.on_last_field() {
                return submit_form(form, app, store);
            }
            form.next_field();
        }
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Backspace => {
            if let Some(field) = form.selected_field() {
                field.value.pop();
            }
        }
        KeyCode::Char(' ')
            if form
                .fields
                .get(form.selected)
                .is_some_and(|f| f.key == "status") =>
        {
            form.toggle_status();
        }
        KeyCode::Char(c) => {
            if let Some(field) = form.selected_field() {
                field.value.push(c);
            }
        }
        _ => {}
    }

    app.form = Some(form);
    Ok(())
}

/// Validate and commit a finished form. On a validation failure the form
/// stays open with the cursor pinned to the offending field.
fn submit_form(mut form: FormState, app: &mut App, store: &mut Store) -> Result<()> {
    form.clear_errors();

    let outcome = match form.kind {
        FormKind::Expense => forms::validate_expense(&form.expense_input()).map(|expense| {
            let description = expense.description.clone();
            let amount = expense.amount;
            store.add_expense(expense);
            app.refresh_budget(store);
            app.refresh_dashboard(store);
            format!(
                "Expense added: {description} for {}",
                format_amount(amount)
            )
        }),
        FormKind::Payment => forms::validate_payment(&form.payment_input()).map(|payment| {
            let description = payment.description.clone();
            let vendor = payment.vendor.clone();
            store.add_payment(payment);
            app.refresh_payments(store);
            app.refresh_dashboard(store);
            format!("Payment added: {description} for {vendor}")
        }),
        FormKind::Contract => forms::validate_contract(&form.contract_input()).map(|contract| {
            let vendor = contract.vendor.clone();
            store.add_contract(contract);
            app.refresh_contracts(store);
            format!("Contract for {vendor} added")
        }),
        FormKind::Appointment => {
            forms::validate_appointment(&form.appointment_input()).map(|appointment| {
                let vendor = appointment.vendor.clone();
                store.add_appointment(appointment);
                app.refresh_contracts(store);
                app.refresh_dashboard(store);
                format!("Appointment with {vendor} scheduled")
            })
        }
        FormKind::Vendor => forms::validate_vendor(&form.vendor_input()).map(|vendor| {
            let name = vendor.name.clone();
            store.add_vendor(vendor);
            app.refresh_vendors(store);
            app.refresh_messages(store);
            format!("Vendor {name} added")
        }),
    };

    match outcome {
        Ok(message) => {
            app.input_mode = InputMode::Normal;
            app.set_status(message);
        }
        Err(error) => {
            form.set_error(&error);
            app.set_status(error.to_string());
            app.form = Some(form);
        }
    }
    Ok(())
}

// ── Compose mode (vendor messaging) ──────────────────────────

fn handle_compose_input(key: event::KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let text = app.compose_input.trim().to_string();
            app.compose_input.clear();
            app.input_mode = InputMode::Normal;
            // Blank sends are dropped silently, matching the send button
            // being disabled on empty input.
            if text.is_empty() {
                return Ok(());
            }
            if let Some(vendor_id) = app.open_thread {
                match store.send_message(vendor_id, text, dates::now_timestamp()) {
                    Ok(_) => {
                        app.refresh_messages(store);
                        app.set_status("Message sent");
                    }
                    Err(e) => app.set_status(e.to_string()),
                }
            }
        }
        KeyCode::Esc => {
            app.compose_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.compose_input.pop();
        }
        KeyCode::Char(c) => {
            app.compose_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

// ── Confirm mode ─────────────────────────────────────────────

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, store: &mut Store) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::DeleteExpense { id, description } => {
                        match store.delete_expense(id) {
                            Ok(undo) => {
                                app.undo.arm(undo);
                                app.refresh_budget(store);
                                app.refresh_dashboard(store);
                                app.set_status(format!(
                                    "Expense '{description}' deleted. u restores it"
                                ));
                            }
                            Err(e) => app.set_status(e.to_string()),
                        }
                    }
                    PendingAction::DeleteContract { id, vendor } => {
                        match store.delete_contract(id) {
                            Ok(undo) => {
                                app.undo.arm(undo);
                                app.refresh_contracts(store);
                                app.set_status(format!(
                                    "Contract for '{vendor}' deleted. u restores it"
                                ));
                            }
                            Err(e) => app.set_status(e.to_string()),
                        }
                    }
                    PendingAction::DeleteAppointment { id, vendor } => {
                        match store.delete_appointment(id) {
                            Ok(undo) => {
                                app.undo.arm(undo);
                                app.refresh_contracts(store);
                                app.refresh_dashboard(store);
                                app.set_status(format!(
                                    "Appointment with '{vendor}' deleted. u restores it"
                                ));
                            }
                            Err(e) => app.set_status(e.to_string()),
                        }
                    }
                    PendingAction::MarkPaid { id, description } => {
                        match store.mark_paid(id, &dates::today_string()) {
                            Ok(_) => {
                                app.refresh_payments(store);
                                app.refresh_dashboard(store);
                                app.set_status(format!("'{description}' marked as paid"));
                            }
                            Err(e) => app.set_status(e.to_string()),
                        }
                    }
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            // Any other key = cancel
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
    Ok(())
}
