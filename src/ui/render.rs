use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::form::{FormKind, FormState};
use super::theme;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if let Some(form) = &app.form {
        render_form_overlay(f, f.area(), app, form);
    }

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let num = format!("{}", i + 1);
            if *s == app.screen {
                Line::from(vec![
                    Span::styled(format!("{num}:"), Style::default().fg(theme::TEXT_DIM)),
                    Span::styled(
                        format!("{s}"),
                        Style::default()
                            .fg(theme::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("{num}:{s}"),
                    Style::default().fg(theme::TEXT_DIM),
                ))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Dashboard => super::screens::dashboard::render(f, area, app),
        Screen::Budget => super::screens::budget::render(f, area, app),
        Screen::Payments => super::screens::payments::render(f, area, app),
        Screen::Contracts => super::screens::contracts::render(f, area, app),
        Screen::Vendors => super::screens::vendors::render(f, area, app),
        Screen::Messages => super::screens::messages::render(f, area, app),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Command | InputMode::Form | InputMode::Compose => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
        InputMode::Search => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
        InputMode::Confirm => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::RED)
            .add_modifier(Modifier::BOLD),
    };

    let info = format!(" {} | {} ", app.screen, app.today.format("%Y-%m-%d"));

    let right = match app.screen {
        Screen::Dashboard => " j/k select | D dismiss | u undo | ? help ",
        Screen::Budget => " e expenses | a add | +/- adjust | D delete | ? help ",
        Screen::Payments => " h/l tabs | a add | P mark paid | ? help ",
        Screen::Contracts => " r toggle | a add | D delete | u undo | ? help ",
        Screen::Vendors => " /search | f fav | +/- rate | Enter messages | ? help ",
        Screen::Messages => " Enter open | i reply | Esc back | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.len() as u16),
        ),
        InputMode::Search => {
            let match_info = if !app.search_input.is_empty() {
                format!("  ({} matches)", app.vendors_view.len())
            } else {
                String::new()
            };
            (
                Line::from(vec![
                    Span::styled("/", Style::default().fg(theme::YELLOW)),
                    Span::styled(&app.search_input, theme::command_bar_style()),
                    Span::styled(match_info, theme::dim_style()),
                ]),
                Some(1 + app.search_input.len() as u16),
            )
        }
        InputMode::Compose => (
            Line::from(vec![
                Span::styled("msg> ", Style::default().fg(theme::GREEN)),
                Span::styled(&app.compose_input, theme::command_bar_style()),
            ]),
            Some(5 + app.compose_input.len() as u16),
        ),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(&app.confirm_message, Style::default().fg(theme::YELLOW)),
                Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
            ]),
            None,
        ),
        InputMode::Form | InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_form_overlay(f: &mut Frame, area: Rect, app: &App, form: &FormState) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    for (i, field) in form.fields.iter().enumerate() {
        let selected = i == form.selected;
        let inactive = form.field_inactive(field.key);

        let label_style = if selected {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else if inactive {
            theme::dim_style()
        } else {
            theme::normal_style()
        };

        let value_style = if inactive {
            theme::dim_style()
        } else {
            theme::normal_style()
        };

        let cursor = if selected { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", field.label), label_style),
            Span::styled(format!("{}{cursor}", field.value), value_style),
        ]));

        if let Some(error) = &field.error {
            lines.push(Line::from(Span::styled(
                format!("  {:<16}{error}", ""),
                theme::error_style(),
            )));
        }
    }

    if let Some(hint) = field_hint(app, form) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {hint}"), theme::dim_style())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Enter next/submit | Tab next | Esc cancel",
        theme::dim_style(),
    )));

    let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 64.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .title(Span::styled(
                format!(" {} ", form.title),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(popup, popup_area);
}

/// Context help for the selected form field.
fn field_hint(app: &App, form: &FormState) -> Option<String> {
    let field = form.fields.get(form.selected)?;
    match (form.kind, field.key) {
        (FormKind::Expense, "category") => {
            let names: Vec<&str> = app.categories.iter().map(|c| c.name.as_str()).collect();
            Some(format!("Categories: {}", names.join(", ")))
        }
        (FormKind::Vendor, "category") => Some(format!(
            "Categories: {}",
            crate::store::VENDOR_CATEGORIES.join(", ")
        )),
        (FormKind::Payment, "status") => {
            let options: Vec<&str> = crate::models::PaymentStatus::all()
                .iter()
                .map(|s| s.as_str())
                .collect();
            Some(format!("{} (Space toggles)", options.join(" or ")))
        }
        (_, "date" | "due_date" | "signed_date" | "expiration_date") => {
            Some("Format: YYYY-MM-DD".into())
        }
        (FormKind::Appointment, "time") => Some("Free-form, e.g. 2:00 PM".into()),
        _ => None,
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut help_text = vec![
        Line::from(Span::styled(
            " WedTUI Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Navigation",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  j/k or Up/Down   Move cursor           1-6        Switch tabs",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Tab/Shift-Tab    Cycle tabs            g/G        Top/Bottom",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  h/l (Payments)   Switch payment tab    Ctrl-q     Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Actions",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  :               Command mode           / (Vendors) Live search",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  a               Add entry here         D          Delete selected",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  u               Undo last delete       P (Payments) Mark paid",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  f (Vendors)     Toggle favorite        +/-        Adjust rating/budget",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Enter           Select/Confirm         Esc        Cancel/Back",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Commands",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    // Build command list dynamically from the registry.
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<22} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 76.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
