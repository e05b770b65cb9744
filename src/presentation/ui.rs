use crate::application::{App, LoadState, SubmitPhase, View};
use crate::domain::wizard::{Field, WizardStep};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    match app.view {
        View::Home => render_home(f),
        View::Dashboard => render_dashboard(f, app),
        View::AddUser => render_add_user(f, app),
    }

    if app.toast_visible() {
        render_success_toast(f);
    }
}

fn render_home(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("User Management Dashboard")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let tagline = Paragraph::new(
        "View and manage users with an intuitive interface.\n\
         Search, filter, and add new users with ease.",
    )
    .style(Style::default().fg(Color::Gray))
    .alignment(Alignment::Center);
    f.render_widget(tagline, chunks[2]);

    let status = Paragraph::new("Enter: go to dashboard | q: quit")
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[4]);
}

fn render_dashboard(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new("User Dashboard")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(header, chunks[0]);

    render_search_bar(f, app, chunks[1]);

    match &app.dashboard.load {
        LoadState::Loading => render_loading(f, chunks[2]),
        LoadState::Failed(message) => render_fetch_error(f, message, chunks[2]),
        LoadState::Loaded => render_user_table(f, app, chunks[2]),
    }

    render_dashboard_status_bar(f, app, chunks[3]);
}

fn render_search_bar(f: &mut Frame, app: &App, area: Rect) {
    let query = &app.dashboard.query;
    let content = if query.is_empty() {
        Span::styled("Search by name or city...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(query.as_str())
    };
    let search = Paragraph::new(Line::from(content))
        .block(Block::default().borders(Borders::ALL).title("Search"));
    f.render_widget(search, area);

    if matches!(app.dashboard.load, LoadState::Loaded) {
        f.set_cursor_position((area.x + 1 + query.chars().count() as u16, area.y + 1));
    }
}

fn render_loading(f: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Loading users...")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Users"));
    f.render_widget(loading, area);
}

fn render_fetch_error(f: &mut Frame, message: &str, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to try again",
            Style::default().fg(Color::Gray),
        )),
    ];
    let error = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Users")
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(error, area);
}

fn render_user_table(f: &mut Frame, app: &App, area: Rect) {
    let dashboard = &app.dashboard;

    if dashboard.visible.is_empty() {
        let empty = Paragraph::new("No users found matching your search criteria.")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Users"));
        f.render_widget(empty, area);
        return;
    }

    let visible_rows = area.height.saturating_sub(3) as usize;
    let end = (dashboard.scroll + visible_rows).min(dashboard.visible.len());

    let header = Row::new(vec!["Name", "Email", "Phone", "City"])
        .style(Style::default().fg(Color::Yellow))
        .height(1);

    let mut rows = Vec::new();
    for (index, user) in dashboard.visible[dashboard.scroll..end].iter().enumerate() {
        let style = if dashboard.scroll + index == dashboard.selected {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        rows.push(
            Row::new(vec![
                Cell::from(user.name.clone()),
                Cell::from(user.email.clone()),
                Cell::from(user.phone.clone()),
                Cell::from(user.city_display().to_string()),
            ])
            .style(style)
            .height(1),
        );
    }

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(30),
        Constraint::Percentage(22),
        Constraint::Percentage(18),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Users ({}/{})",
            dashboard.visible.len(),
            dashboard.users.len()
        )))
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_dashboard_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(ref status) = app.status_message {
        status.clone()
    } else {
        match app.dashboard.load {
            LoadState::Loading => "Loading users...".to_string(),
            LoadState::Failed(_) => "r: try again | Esc: back | type to search".to_string(),
            LoadState::Loaded => {
                "type to search | Up/Down: select | Ctrl+A: add user | Ctrl+Y: copy email | Esc: back"
                    .to_string()
            }
        }
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.dashboard.load {
            LoadState::Failed(_) => Style::default().fg(Color::Red),
            _ => Style::default(),
        });
    f.render_widget(status, area);
}

fn render_add_user(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let back = Paragraph::new("< Back to Dashboard (Esc)").style(Style::default().fg(Color::Gray));
    f.render_widget(back, chunks[0]);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Add New User",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Complete the form below to add a new user to the system.",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(header, chunks[1]);

    render_progress(f, app, chunks[2]);

    match app.add_user.step {
        WizardStep::Review => render_review(f, app, chunks[3]),
        _ => render_form_fields(f, app, chunks[3]),
    }

    render_wizard_status_bar(f, app, chunks[4]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let current = app.add_user.step;
    let mut spans = Vec::new();

    for (index, step) in WizardStep::all_steps().into_iter().enumerate() {
        let style = if step < current {
            Style::default().fg(Color::Green)
        } else if step == current {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let marker = if step < current {
            "[x]".to_string()
        } else {
            format!("[{}]", step.number())
        };
        spans.push(Span::styled(format!("{marker} {}", step.title()), style));

        if index + 1 < WizardStep::total_steps() {
            spans.push(Span::styled("  --  ", Style::default().fg(Color::DarkGray)));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_form_fields(f: &mut Frame, app: &App, area: Rect) {
    let state = &app.add_user;
    let fields = state.step.fields();

    // One bordered input plus an error line per field
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(4))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, &field) in fields.iter().enumerate() {
        render_field(f, app, field, index, rows[index]);
    }
}

fn render_field(f: &mut Frame, app: &App, field: Field, index: usize, area: Rect) {
    let state = &app.add_user;
    let focused = state.focus == index;
    let value = state.form.get(field);
    let error = state.errors.get(field);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = if !error.is_empty() {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let content = if value.is_empty() {
        Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} *", field.label()))
            .border_style(border_style),
    );
    f.render_widget(input, parts[0]);

    if focused {
        let x = parts[0].x + 1 + state.cursor.min(u16::MAX as usize) as u16;
        f.set_cursor_position((x, parts[0].y + 1));
    }

    if !error.is_empty() {
        let message = Paragraph::new(format!("! {error}")).style(Style::default().fg(Color::Red));
        f.render_widget(message, parts[1]);
    }
}

fn render_review(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.add_user.form;
    let label = Style::default().fg(Color::Yellow);

    let lines = vec![
        Line::from(Span::styled(
            "Basic Information",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![Span::styled("  Name:     ", label), Span::raw(form.name.clone())]),
        Line::from(vec![Span::styled("  Email:    ", label), Span::raw(form.email.clone())]),
        Line::from(""),
        Line::from(Span::styled(
            "Address",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![Span::styled("  Street:   ", label), Span::raw(form.street.clone())]),
        Line::from(vec![Span::styled("  City:     ", label), Span::raw(form.city.clone())]),
        Line::from(vec![Span::styled("  ZIP Code: ", label), Span::raw(form.zip.clone())]),
        Line::from(""),
        Line::from(Span::styled(
            "Please review the information above before submitting",
            Style::default().fg(Color::Gray),
        )),
    ];

    let review = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Review & Confirm"));
    f.render_widget(review, area);
}

fn render_wizard_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.add_user.phase {
        SubmitPhase::InFlight { .. } => (
            "Submitting...".to_string(),
            Style::default().fg(Color::Yellow),
        ),
        SubmitPhase::Toast { .. } => (
            "Success! User has been added.".to_string(),
            Style::default().fg(Color::Green),
        ),
        SubmitPhase::Idle => {
            let text = match app.add_user.step {
                WizardStep::Review => {
                    "Enter: submit | Ctrl+B: back | Esc: back to dashboard".to_string()
                }
                step if step.is_first() => {
                    "Enter: next | Tab: next field | Esc: back to dashboard".to_string()
                }
                _ => "Enter: next | Ctrl+B: back | Tab: next field | Esc: back to dashboard"
                    .to_string(),
            };
            (text, Style::default())
        }
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn render_success_toast(f: &mut Frame) {
    let area = f.area();
    let width = 36.min(area.width);
    let toast_area = Rect {
        x: area.width.saturating_sub(width + 2),
        y: area.height.saturating_sub(6),
        width,
        height: 3,
    };

    f.render_widget(Clear, toast_area);
    let toast = Paragraph::new("Success! User has been added.")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    f.render_widget(toast, toast_area);
}
