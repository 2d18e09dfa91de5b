use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.vendors_view.is_empty() {
        render_empty(f, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_list(f, chunks[0], app);
    render_detail(f, chunks[1], app);
}

fn render_empty(f: &mut Frame, area: Rect, app: &App) {
    let msg = if app.search_input.is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled("No vendors yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(":vendor adds one", theme::dim_style())),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No vendors matching '{}'", app.search_input),
                theme::dim_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to clear the search",
                theme::dim_style(),
            )),
        ]
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(" Vendors (0) ", theme::title_style()));
    f.render_widget(Paragraph::new(msg).centered().block(block), area);
}

fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .vendors_view
        .iter()
        .enumerate()
        .skip(app.vendor_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, vendor)| {
            let style = if i == app.vendor_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let favorite = if vendor.is_favorite {
                Span::styled("♥ ", theme::favorite_style())
            } else {
                Span::styled("  ", style)
            };

            ListItem::new(Line::from(vec![
                favorite,
                Span::styled(format!("{:<24}", truncate(&vendor.name, 22)), style),
                Span::styled(
                    format!("{:<14}", truncate(&vendor.category, 13)),
                    theme::dim_style(),
                ),
                Span::styled(vendor.stars(), theme::favorite_style()),
            ]))
            .style(style)
        })
        .collect();

    let title = if app.search_input.is_empty() {
        format!(" Vendors ({}) ", app.vendors_view.len())
    } else {
        format!(
            " Vendors ({}) search: '{}' ",
            app.vendors_view.len(),
            app.search_input
        )
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(title, theme::title_style())),
    );
    f.render_widget(list, area);
}

fn render_detail(f: &mut Frame, area: Rect, app: &App) {
    let Some(vendor) = app.vendors_view.get(app.vendor_index) else {
        return;
    };

    let favorite_line = if vendor.is_favorite {
        Line::from(Span::styled("♥ Favorite", theme::favorite_style()))
    } else {
        Line::from(Span::styled("Not a favorite — f toggles", theme::dim_style()))
    };

    let mut lines = vec![
        Line::from(Span::styled(
            vendor.name.clone(),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(Span::styled(vendor.category.clone(), theme::dim_style())),
        Line::from(Span::styled(
            format!("{} ({}/5)", vendor.stars(), vendor.rating),
            theme::favorite_style(),
        )),
        favorite_line,
        Line::from(""),
        Line::from(Span::styled(vendor.description.clone(), theme::normal_style())),
    ];

    if !vendor.notes.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Notes", theme::title_style())));
        lines.push(Line::from(Span::styled(
            vendor.notes.clone(),
            theme::dim_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter opens messages | +/- adjusts rating",
        theme::dim_style(),
    )));

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(" Details ", theme::title_style())),
    );
    f.render_widget(detail, area);
}
