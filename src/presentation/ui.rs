use crate::application::{App, AppointmentFocus, ContactField, SubmissionPhase};
use crate::domain::{Section, registry};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_profile(f, chunks[0]);
    render_navigation(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    if let Some(section) = app.active_section {
        render_section_modal(f, app, section);
    }
}

fn accent_color(accent: &str) -> Color {
    match accent {
        "blue" => Color::Blue,
        "indigo" => Color::LightBlue,
        "cyan" => Color::Cyan,
        "rose" => Color::LightRed,
        "amber" => Color::Yellow,
        _ => Color::White,
    }
}

fn section_color(section: Section) -> Color {
    registry::NAV_ITEMS
        .iter()
        .find(|item| item.section == section)
        .map(|item| accent_color(item.accent))
        .unwrap_or(Color::White)
}

fn render_profile(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            registry::PROFILE_NAME,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            registry::PROFILE_TAGLINE,
            Style::default().fg(Color::Blue),
        )),
    ];
    let profile = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(profile, area);
}

fn render_navigation(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];
    for (i, item) in registry::NAV_ITEMS.iter().enumerate() {
        let selected = i == app.nav_index && app.active_section.is_none();
        let marker = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(accent_color(item.accent))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(accent_color(item.accent))
        };
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(format!("{marker}{}", item.label), style),
        ]));
        lines.push(Line::from(""));
    }
    let nav = Paragraph::new(lines).block(Block::default().borders(Borders::NONE));
    f.render_widget(nav, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.active_section {
        None => "↑↓/jk: navigate | Enter: open section | q: quit".to_string(),
        Some(Section::Appointment) => match app.submission.phase {
            SubmissionPhase::InFlight => "SYNCHRONIZING...".to_string(),
            _ => "Tab: next control | ←→: pick | type date | Enter: confirm | Esc: close"
                .to_string(),
        },
        Some(Section::Contact) => match app.submission.phase {
            SubmissionPhase::InFlight => "TRANSMITTING...".to_string(),
            _ => "Tab: next field | type to edit | Enter on message: send | Esc: close"
                .to_string(),
        },
        Some(_) => "Esc: close".to_string(),
    };

    let style = match app.submission.phase {
        SubmissionPhase::InFlight => Style::default().fg(Color::Yellow),
        SubmissionPhase::Succeeded => Style::default().fg(Color::Green),
        SubmissionPhase::Failed => Style::default().fg(Color::Red),
        SubmissionPhase::Idle => Style::default(),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn render_section_modal(f: &mut Frame, app: &App, section: Section) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 12,
        y: area.height / 10,
        width: area.width * 5 / 6,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(section.label())
        .style(Style::default().fg(section_color(section)));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    match section {
        Section::About => render_about(f, inner),
        Section::Working => render_working(f, inner),
        Section::Portfolio => render_portfolio(f, inner),
        Section::Appointment => render_appointment(f, app, inner),
        Section::Contact => render_contact(f, app, inner),
    }
}

fn render_about(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            registry::ABOUT_HEADING,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(registry::ABOUT_BODY),
        Line::from(""),
    ];
    for (figure, caption) in registry::ABOUT_STATS {
        lines.push(Line::from(vec![
            Span::styled(figure, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(caption, Style::default().fg(Color::DarkGray)),
        ]));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_working(f: &mut Frame, area: Rect) {
    let header = Row::new(vec!["COMPANY", "ROLE", "PERIOD"])
        .style(Style::default().fg(Color::Yellow))
        .height(1);
    let mut rows = vec![header];
    for exp in registry::EXPERIENCES {
        rows.push(Row::new(vec![exp.company, exp.role, exp.period]).height(1));
    }
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
        ],
    )
    .column_spacing(2);
    f.render_widget(table, area);
}

fn render_portfolio(f: &mut Frame, area: Rect) {
    let header = Row::new(vec!["PROJECT", "RESULT", ""])
        .style(Style::default().fg(Color::Yellow))
        .height(1);
    let mut rows = vec![header];
    for proj in registry::PROJECTS {
        rows.push(
            Row::new(vec![
                Cell::from(proj.title),
                Cell::from(proj.metric).style(Style::default().fg(Color::Green)),
                Cell::from(proj.sub_metric).style(Style::default().fg(Color::DarkGray)),
            ])
            .height(1),
        );
    }
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ],
    )
    .column_spacing(2);
    f.render_widget(table, area);
}

fn render_appointment(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(registry::SERVICES.len() as u16 + 2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    render_service_picker(f, app, chunks[0]);
    render_date_field(f, app, chunks[1]);
    render_time_picker(f, app, chunks[2]);
    render_appointment_footer(f, app, chunks[3]);
}

fn render_service_picker(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.appointment_focus == AppointmentFocus::Service;
    let mut lines = vec![section_header("01. CHOOSE SERVICE", focused)];
    for (i, service) in registry::SERVICES.iter().enumerate() {
        let chosen = app.draft.service_id.as_deref() == Some(service.id);
        let marker = if chosen { "●" } else { "○" };
        let mut style = Style::default();
        if chosen {
            style = style.fg(Color::LightRed);
        }
        if focused && i == app.service_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(Span::styled(
            format!("  {marker} {}  {}", service.title, service.duration),
            style,
        )));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_date_field(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.appointment_focus == AppointmentFocus::Date;
    let confirmed = if app.draft.date.is_some() { " ✓" } else { "" };
    let input_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let lines = vec![
        section_header("02. PICK DATE (YYYY-MM-DD)", focused),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{}_", app.date_input), input_style),
            Span::styled(confirmed, Style::default().fg(Color::Green)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_time_picker(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.appointment_focus == AppointmentFocus::Time;
    let mut spans = vec![Span::raw("  ")];
    for (i, slot) in registry::TIME_SLOTS.iter().enumerate() {
        let chosen = app.draft.time.as_deref() == Some(*slot);
        let mut style = Style::default();
        if chosen {
            style = style.fg(Color::LightRed).add_modifier(Modifier::BOLD);
        }
        if focused && i == app.time_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {slot} "), style));
        spans.push(Span::raw(" "));
    }
    let lines = vec![section_header("03. PICK TIME", focused), Line::from(spans)];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_appointment_footer(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.appointment_focus == AppointmentFocus::Confirm;
    let label = match app.submission.phase {
        SubmissionPhase::InFlight => "SYNCHRONIZING...",
        _ => "[ LOCK SLOT ]",
    };
    let mut style = if app.can_submit_appointment() {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let mut lines = vec![Line::from(""), Line::from(Span::styled(label, style))];
    push_status_lines(&mut lines, app);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_contact(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(registry::CONTACT_CHANNELS.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .split(area);

    let mut channel_lines = Vec::new();
    for channel in registry::CONTACT_CHANNELS {
        channel_lines.push(Line::from(vec![
            Span::styled(
                format!("{:<18}", channel.label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(channel.value, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  ({})", channel.detail),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    f.render_widget(Paragraph::new(channel_lines), chunks[0]);

    let fields = [
        (ContactField::Name, "NAME", &app.name_input),
        (ContactField::Email, "EMAIL", &app.email_input),
        (ContactField::Message, "MESSAGE", &app.message_input),
    ];
    let mut lines = vec![Line::from("")];
    for (field, label, buffer) in fields {
        let focused = app.contact_focus == field;
        let style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<9}"), Style::default().fg(Color::Yellow)),
            Span::styled(format!("{buffer}_"), style),
        ]));
        lines.push(Line::from(""));
    }

    let button = match app.submission.phase {
        SubmissionPhase::InFlight => "TRANSMITTING...",
        _ => "[ SEND TRANSMISSION ]",
    };
    lines.push(Line::from(Span::styled(
        button,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    push_status_lines(&mut lines, app);

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);
}

fn section_header(text: &str, focused: bool) -> Line<'_> {
    let style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(Span::styled(text, style))
}

fn push_status_lines(lines: &mut Vec<Line<'_>>, app: &App) {
    if let Some(message) = &app.submission.message {
        let color = match app.submission.phase {
            SubmissionPhase::Succeeded => Color::Green,
            SubmissionPhase::Failed => Color::Red,
            _ => Color::White,
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(color),
        )));
    }
    if let Some(hint) = &app.status_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }
}
