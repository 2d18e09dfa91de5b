use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::dates;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.expiring.is_empty() {
        render_main(f, area, app);
        return;
    }

    // Expiration banner sits above the table while anything is inside the
    // 30-day window.
    let banner_height = (app.expiring.len() as u16 + 2).min(6);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(banner_height), Constraint::Min(6)])
        .split(area);

    render_expiring_banner(f, chunks[0], app);
    render_main(f, chunks[1], app);
}

fn render_expiring_banner(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .expiring
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|contract| {
            Line::from(vec![
                Span::styled("! ", theme::error_style()),
                Span::styled(
                    format!("{} ({})", contract.vendor, contract.kind),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!(" expires {}", dates::format_display(&contract.expiration_date)),
                    theme::pending_style(),
                ),
            ])
        })
        .collect();

    let banner = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::YELLOW))
            .title(Span::styled(
                " Contract Expiration Reminders ",
                Style::default().fg(theme::YELLOW),
            )),
    );
    f.render_widget(banner, area);
}

fn render_main(f: &mut Frame, area: Rect, app: &App) {
    if app.contract_view_appointments {
        render_appointments(f, area, app);
    } else {
        render_contracts(f, area, app);
    }
}

fn render_contracts(f: &mut Frame, area: Rect, app: &App) {
    if app.contracts.is_empty() {
        render_empty(f, area, " Contracts (0) ", ":contract adds one");
        return;
    }

    let header_cells = ["Vendor", "Type", "Signed", "Expires", "File"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .contracts
        .iter()
        .enumerate()
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, contract)| {
            let style = if i == app.contract_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let expires = if contract.expiration_date.is_empty() {
                "—".into()
            } else {
                dates::format_display(&contract.expiration_date)
            };

            Row::new(vec![
                Cell::from(truncate(&contract.vendor, 22)),
                Cell::from(truncate(&contract.kind, 14)),
                Cell::from(dates::format_display(&contract.signed_date)),
                Cell::from(expires),
                Cell::from(Span::styled(
                    truncate(&contract.file_name, 34),
                    theme::dim_style(),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(24),
        Constraint::Length(15),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                format!(" Contracts ({}) — r appointments ", app.contracts.len()),
                theme::title_style(),
            )),
    );
    f.render_widget(table, area);
}

fn render_appointments(f: &mut Frame, area: Rect, app: &App) {
    if app.appointments.is_empty() {
        render_empty(f, area, " Appointments (0) ", ":appointment adds one");
        return;
    }

    let header_cells = ["Date", "Time", "Vendor", "Type", "Notes"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .appointments
        .iter()
        .enumerate()
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, appointment)| {
            let upcoming = dates::on_or_after(&appointment.date, app.today);
            let date_style = if upcoming {
                theme::paid_style()
            } else {
                theme::dim_style()
            };

            let style = if i == app.appointment_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(Span::styled(
                    dates::format_display(&appointment.date),
                    date_style,
                )),
                Cell::from(appointment.time.clone()),
                Cell::from(truncate(&appointment.vendor, 22)),
                Cell::from(truncate(&appointment.kind, 20)),
                Cell::from(Span::styled(
                    truncate(&appointment.notes, 40),
                    theme::dim_style(),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(24),
        Constraint::Length(22),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                format!(" Appointments ({}) — r contracts ", app.appointments.len()),
                theme::title_style(),
            )),
    );
    f.render_widget(table, area);
}

fn render_empty(f: &mut Frame, area: Rect, title: &str, hint: &str) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Nothing here yet", theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(hint.to_string(), theme::dim_style())),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(title.to_string(), theme::title_style())),
    );
    f.render_widget(msg, area);
}
