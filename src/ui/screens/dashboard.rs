use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::dates;
use crate::models::ReminderKind;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(8),    // Reminder feed
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_reminders(f, chunks[1], app);
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

    render_card(f, cards[0], "Total Budget", app.summary.total, theme::BLUE, None);
    render_card(
        f,
        cards[1],
        "Spent",
        app.summary.spent,
        theme::YELLOW,
        Some(format!("{}% of total budget", app.summary.spent_percentage())),
    );
    render_card(
        f,
        cards[2],
        "Remaining",
        app.summary.remaining,
        if app.summary.remaining >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
        None,
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.unwrap_or_default(), theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_reminders(f: &mut Frame, area: Rect, app: &App) {
    let today = dates::today_string();

    if app.reminders.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No upcoming reminders — you're all caught up",
                theme::dim_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Reminders follow pending payments and upcoming appointments",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(reminder_block(0, 0));
        f.render_widget(msg, area);
        return;
    }

    let due_today = app
        .reminders
        .iter()
        .filter(|r| r.date == today)
        .count();

    let items: Vec<ListItem> = app
        .reminders
        .iter()
        .enumerate()
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, reminder)| {
            let marker = match reminder.key.kind {
                ReminderKind::Payment => Span::styled("$ ", theme::paid_style()),
                ReminderKind::Appointment => Span::styled("@ ", Style::default().fg(theme::BLUE)),
            };

            let date_style = if reminder.date == today {
                Style::default()
                    .fg(theme::YELLOW)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::dim_style()
            };

            let style = if i == app.reminder_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            ListItem::new(Line::from(vec![
                marker,
                Span::styled(format!("{:<13}", dates::format_display(&reminder.date)), date_style),
                Span::styled(format!("{:<36}", truncate(&reminder.title, 34)), style),
                Span::styled(reminder.vendor.clone(), theme::dim_style()),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(reminder_block(app.reminders.len(), due_today));
    f.render_widget(list, area);
}

fn reminder_block(total: usize, due_today: usize) -> Block<'static> {
    let title = if due_today > 0 {
        format!(" Reminders ({total}, {due_today} today) ")
    } else {
        format!(" Reminders ({total}) ")
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(title, theme::title_style()))
}
