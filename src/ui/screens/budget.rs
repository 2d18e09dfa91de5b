use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),      // Summary cards
            Constraint::Percentage(45), // Category breakdown
            Constraint::Min(6),         // Expense ledger
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_breakdown(f, chunks[1], app);
    render_expenses(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let card = |title: &str, amount: Decimal, color| {
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format_amount(amount),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style())
                .title(Span::styled(format!(" {title} "), theme::title_style())),
        )
    };

    f.render_widget(card("Total Budget", app.summary.total, theme::BLUE), cards[0]);
    f.render_widget(card("Spent", app.summary.spent, theme::YELLOW), cards[1]);
    f.render_widget(
        card(
            "Remaining",
            app.summary.remaining,
            if app.summary.remaining >= Decimal::ZERO {
                theme::GREEN
            } else {
                theme::RED
            },
        ),
        cards[2],
    );
}

fn render_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let focused = !app.budget_view_expenses;

    let items: Vec<ListItem> = app
        .categories
        .iter()
        .enumerate()
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, category)| {
            let used_ratio = if category.budget > Decimal::ZERO {
                (category.spent / category.budget)
                    .to_f64()
                    .unwrap_or(0.0)
                    .clamp(0.0, 1.0)
            } else {
                0.0
            };

            let color = if used_ratio > 0.9 {
                theme::RED
            } else if used_ratio > 0.7 {
                theme::YELLOW
            } else {
                theme::GREEN
            };

            let style = if focused && i == app.category_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let bar = progress_bar(used_ratio, 16);
            let name = truncate(&category.name, 14);

            ListItem::new(Line::from(vec![
                Span::styled(format!("{name:<15}"), style),
                Span::styled(
                    format!(
                        "{:>11} of {:>11} ",
                        format_amount(category.spent),
                        format_amount(category.budget)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(bar, Style::default().fg(color)),
                Span::styled(
                    format!(" {:>3.0}% used", used_ratio * 100.0),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({}% of total)", category.percentage),
                    theme::dim_style(),
                ),
            ]))
        })
        .collect();

    let border = if focused {
        Style::default().fg(theme::ACCENT)
    } else {
        theme::border_style()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" Budget Breakdown ", theme::title_style())),
    );
    f.render_widget(list, area);
}

fn render_expenses(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.budget_view_expenses;
    let border = if focused {
        Style::default().fg(theme::ACCENT)
    } else {
        theme::border_style()
    };

    if app.expenses.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No expenses found. Add an expense to get started",
                theme::dim_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(":expense opens the add form", theme::dim_style())),
        ])
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(" Recent Expenses (0) ", theme::title_style())),
        );
        f.render_widget(msg, area);
        return;
    }

    let header_cells = ["Date", "Category", "Vendor", "Description", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let style = if focused && i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(expense.date.clone()),
                Cell::from(truncate(&expense.category, 14)),
                Cell::from(truncate(&expense.vendor, 20)),
                Cell::from(truncate(&expense.description, 30)),
                Cell::from(Span::styled(
                    format_amount(expense.amount),
                    theme::pending_style(),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(15),
        Constraint::Length(22),
        Constraint::Min(20),
        Constraint::Length(13),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(
                format!(" Recent Expenses ({}) ", app.expenses.len()),
                theme::title_style(),
            )),
    );
    f.render_widget(table, area);
}

fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
