use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};
use rust_decimal::Decimal;

use crate::models::PaymentStatus;
use crate::ui::app::{App, PaymentTab};
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Totals cards
            Constraint::Length(1), // Tab strip
            Constraint::Min(6),    // Payment table
        ])
        .split(area);

    render_totals(f, chunks[0], app);
    render_tabs(f, chunks[1], app);
    render_table(f, chunks[2], app);
}

fn render_totals(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    // Surface the calculated sum when a manual override hides it.
    let override_note = if app.payment_totals.total != app.calculated_payment_total {
        Some(format!(
            "Calculated: {}",
            format_amount(app.calculated_payment_total)
        ))
    } else {
        None
    };

    let card = |title: &str, amount: Decimal, color, subtitle: Option<String>| {
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format_amount(amount),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(subtitle.unwrap_or_default(), theme::dim_style())),
        ])
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style())
                .title(Span::styled(format!(" {title} "), theme::title_style())),
        )
    };

    f.render_widget(
        card(
            "Total Payments",
            app.payment_totals.total,
            theme::BLUE,
            override_note,
        ),
        cards[0],
    );
    f.render_widget(
        card("Paid", app.payment_totals.paid, theme::GREEN, None),
        cards[1],
    );
    f.render_widget(
        card("Pending", app.payment_totals.pending, theme::YELLOW, None),
        cards[2],
    );
}

fn render_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = PaymentTab::all()
        .iter()
        .map(|tab| {
            if *tab == app.payment_tab {
                Line::from(Span::styled(
                    format!(" {tab} "),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(format!(" {tab} "), theme::dim_style()))
            }
        })
        .collect();

    let tabs = Tabs::new(titles).divider(Span::styled("|", theme::border_style()));
    f.render_widget(tabs, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    if app.payments_view.is_empty() {
        let hint = match app.payment_tab {
            PaymentTab::Upcoming => "No payments due in the next 30 days",
            PaymentTab::Pending => "No pending payments",
            PaymentTab::Paid => "No payments made yet",
        };
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(hint, theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "h/l switch tabs | :payment adds one",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(payment_block(app, 0));
        f.render_widget(msg, area);
        return;
    }

    let header_cells = ["Due", "Vendor", "Description", "Amount", "Status", "Paid On"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .payments_view
        .iter()
        .enumerate()
        .skip(app.payment_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, payment)| {
            let status_style = match payment.status {
                PaymentStatus::Paid => theme::paid_style(),
                PaymentStatus::Pending => theme::pending_style(),
            };

            let paid_on = match (&payment.payment_date, &payment.payment_method) {
                (Some(date), Some(method)) => format!("{date} ({method})"),
                (Some(date), None) => date.clone(),
                _ => "—".into(),
            };

            let style = if i == app.payment_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(payment.due_date.clone()),
                Cell::from(truncate(&payment.vendor, 20)),
                Cell::from(truncate(&payment.description, 32)),
                Cell::from(format_amount(payment.amount)),
                Cell::from(Span::styled(payment.status.as_str(), status_style)),
                Cell::from(Span::styled(paid_on, theme::dim_style())),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(22),
        Constraint::Min(20),
        Constraint::Length(13),
        Constraint::Length(9),
        Constraint::Length(26),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(payment_block(app, app.payments_view.len()));
    f.render_widget(table, area);
}

fn payment_block(app: &App, count: usize) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(
            format!(" {} ({count}) ", app.payment_tab),
            theme::title_style(),
        ))
}
