//! Profile form rendering

use super::field_renderer::{error_line, field_line};
use crate::app::App;
use crate::state::forms::Field;
use crate::state::FocusTarget;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows in the order they are drawn
const FIELD_ROWS: [Field; 10] = [
    Field::FirstName,
    Field::LastName,
    Field::PhoneNumber,
    Field::Email,
    Field::Password,
    Field::ConfirmPassword,
    Field::Age,
    Field::Gender,
    Field::Interests,
    Field::BirthDate,
];

/// Draw the profile form with its action panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(18), // Action panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw every field as an input line followed by its error line
fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form_focused = app.state.focus != FocusTarget::Submit;
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let lines: Vec<Line> = FIELD_ROWS
        .into_iter()
        .flat_map(|field| [field_line(&app.state, field), error_line(&app.state, field)])
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the action panel holding the submit button
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.focus == FocusTarget::Submit;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_area = Rect {
        height: BUTTON_HEIGHT.min(inner_area.height),
        ..inner_area
    };
    render_action_button(frame, button_area, "Submit", is_focused, Color::Green);
}
