use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::models::Sender;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(30)])
        .split(area);

    render_thread_list(f, chunks[0], app);
    render_conversation(f, chunks[1], app);
}

fn render_thread_list(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .thread_list
        .iter()
        .enumerate()
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, vendor)| {
            let open = app.open_thread.is_some() && app.open_thread == vendor.id;
            let style = if open {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else if app.open_thread.is_none() && i == app.thread_index {
                theme::selected_style()
            } else {
                theme::normal_style()
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<18}", truncate(&vendor.name, 17)), style),
                Span::styled(truncate(&vendor.category, 10), theme::dim_style()),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(" Vendors ", theme::title_style())),
    );
    f.render_widget(list, area);
}

fn render_conversation(f: &mut Frame, area: Rect, app: &App) {
    let Some(vendor_id) = app.open_thread else {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Select a vendor and press Enter to open the conversation",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style())
                .title(Span::styled(" Conversation ", theme::title_style())),
        );
        f.render_widget(msg, area);
        return;
    };

    let vendor_name = app
        .thread_list
        .iter()
        .find(|v| v.id == Some(vendor_id))
        .map_or("Vendor".to_string(), |v| v.name.clone());

    let mut lines: Vec<Line> = Vec::new();
    if app.conversation.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No messages yet. Press i to write the first one",
            theme::dim_style(),
        )));
    }
    for message in &app.conversation {
        let (who, who_style) = match message.sender {
            Sender::User => ("You", Style::default().fg(theme::ACCENT)),
            Sender::Vendor => (vendor_name.as_str(), Style::default().fg(theme::BLUE)),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", message.time_of_day()), theme::dim_style()),
            Span::styled(format!("{who}: "), who_style.add_modifier(Modifier::BOLD)),
            Span::styled(message.text.clone(), theme::normal_style()),
        ]));
        lines.push(Line::from(""));
    }

    // Keep the tail of the conversation in view.
    let visible = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();

    let conversation = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                format!(" {vendor_name} — i to reply, Esc to close "),
                theme::title_style(),
            )),
    );
    f.render_widget(conversation, area);
}
