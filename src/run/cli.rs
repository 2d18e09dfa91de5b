use anyhow::Result;

use crate::dates;
use crate::store::Store;
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], store: &mut Store) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(store),
        "vendors" => cli_vendors(store),
        "payments" => cli_payments(&args[2..], store),
        "contracts" => cli_contracts(store),
        "reminders" => cli_reminders(store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("wedtui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("WedTUI — local-only wedding planning dashboard");
    println!();
    println!("Usage: wedtui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print budget summary by category");
    println!("  vendors                       List the vendor directory");
    println!("  payments [--pending]          List payments (optionally pending only)");
    println!("  contracts                     List contracts and appointments");
    println!("  reminders                     Print upcoming reminders");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("All data is in-memory sample state; nothing is persisted.");
}

fn cli_summary(store: &mut Store) -> Result<()> {
    let summary = store.summary();

    println!("WedTUI — Budget Summary");
    println!("{}", "─".repeat(56));
    println!("  Total Budget: {}", format_amount(summary.total));
    println!(
        "  Spent:        {} ({}% of total)",
        format_amount(summary.spent),
        summary.spent_percentage()
    );
    println!("  Remaining:    {}", format_amount(summary.remaining));
    println!();
    println!("By Category:");
    for category in store.categories() {
        println!(
            "  {:<16} {:>12} of {:>12}  ({:>3}% of total)",
            category.name,
            format_amount(category.spent),
            format_amount(category.budget),
            category.percentage,
        );
    }
    Ok(())
}

fn cli_vendors(store: &mut Store) -> Result<()> {
    let vendors = store.vendors();
    if vendors.is_empty() {
        println!("No vendors");
        return Ok(());
    }

    println!("{:<4} {:<24} {:<14} {:<7} Fav", "ID", "Name", "Category", "Stars");
    println!("{}", "─".repeat(58));
    for vendor in vendors {
        println!(
            "{:<4} {:<24} {:<14} {:<7} {}",
            vendor.id.unwrap_or(0),
            vendor.name,
            vendor.category,
            format!("{}/5", vendor.rating),
            if vendor.is_favorite { "♥" } else { "" },
        );
    }
    Ok(())
}

fn cli_payments(args: &[String], store: &mut Store) -> Result<()> {
    let pending_only = args.iter().any(|a| a == "--pending");
    let totals = store.payment_totals();

    println!(
        "Payments — total {} | paid {} | pending {}",
        format_amount(totals.total),
        format_amount(totals.paid),
        format_amount(totals.pending),
    );
    println!("{}", "─".repeat(76));

    let rows: Vec<_> = if pending_only {
        store.pending_payments()
    } else {
        store.payments().iter().collect()
    };

    if rows.is_empty() {
        println!("No payments");
        return Ok(());
    }

    for payment in rows {
        let paid_on = payment
            .payment_date
            .as_deref()
            .map_or(String::new(), |d| format!("  paid {d}"));
        println!(
            "  {:<12} {:<22} {:<30} {:>12} {:<8}{}",
            payment.due_date,
            payment.vendor,
            payment.description,
            format_amount(payment.amount),
            payment.status.as_str(),
            paid_on,
        );
    }
    Ok(())
}

fn cli_contracts(store: &mut Store) -> Result<()> {
    println!("Contracts:");
    for contract in store.contracts() {
        println!(
            "  {:<24} {:<14} signed {}  expires {}  ({})",
            contract.vendor,
            contract.kind,
            contract.signed_date,
            if contract.expiration_date.is_empty() {
                "—"
            } else {
                &contract.expiration_date
            },
            contract.file_name,
        );
    }

    println!();
    println!("Appointments:");
    for appointment in store.appointments() {
        println!(
            "  {:<12} {:<10} {:<24} {}",
            appointment.date, appointment.time, appointment.vendor, appointment.kind,
        );
    }
    Ok(())
}

fn cli_reminders(store: &mut Store) -> Result<()> {
    let today = dates::today();
    let reminders = store.reminders(today);
    if reminders.is_empty() {
        println!("No upcoming reminders");
        return Ok(());
    }

    println!("Reminders as of {}:", today.format("%Y-%m-%d"));
    println!("{}", "─".repeat(64));
    for reminder in &reminders {
        println!(
            "  {:<12} [{}] {:<36} {}",
            reminder.date,
            reminder.key.kind.as_str(),
            reminder.title,
            reminder.vendor,
        );
    }
    Ok(())
}
