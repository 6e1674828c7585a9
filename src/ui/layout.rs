//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{PASTE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::forms::FieldKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title line
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        " Form Validation",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {}", get_focus_hints(app.state.focused_kind())),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused element (`None` is the submit button)
fn get_focus_hints(kind: Option<FieldKind>) -> String {
    match kind {
        None => "Enter:submit  Tab:next".to_string(),
        Some(FieldKind::Select) => "←/→/Space:choose  Bksp:clear  Tab:next".to_string(),
        Some(FieldKind::Checkboxes) => "Space:toggle  Tab:next".to_string(),
        Some(FieldKind::Number) => format!("↑/↓:step  Tab:next  {SUBMIT_SHORTCUT}:submit"),
        Some(FieldKind::Date) => {
            format!("↑/↓:day  PgUp/PgDn:year  Tab:next  {SUBMIT_SHORTCUT}:submit")
        }
        Some(FieldKind::Password) => {
            format!("Tab:next  {SUBMIT_SHORTCUT}:submit  Ctrl+R:show/hide  {PASTE_SHORTCUT}:paste")
        }
        Some(FieldKind::Text) | Some(FieldKind::Email) => {
            format!("Tab:next  {SUBMIT_SHORTCUT}:submit  {PASTE_SHORTCUT}:paste")
        }
    }
}
