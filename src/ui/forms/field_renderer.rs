//! Field rendering utilities for forms

use crate::state::forms::{Field, FieldKind, Gender, Interest};
use crate::state::{AppState, FocusTarget};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width of the right-aligned label column, including the ": " separator
pub const LABEL_WIDTH: usize = 18;

const MASK_CHAR: char = '•';
const CURSOR: &str = "▌";

fn label_span(field: Field, is_active: bool) -> Span<'static> {
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let label = format!("{:>width$}: ", field.label(), width = LABEL_WIDTH - 2);
    Span::styled(label, style)
}

/// Text shown for a typed input, masked for passwords
pub fn display_text(value: &str, kind: FieldKind, hide_passwords: bool) -> String {
    if kind == FieldKind::Password && hide_passwords {
        MASK_CHAR.to_string().repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

/// Build the input line for a typed field (text, email, password, number, date)
pub fn text_line(state: &AppState, field: Field) -> Line<'static> {
    let is_active = state.focus.field() == Some(field);
    let value = state.form.values().text(field).unwrap_or_default();

    let mut spans = vec![label_span(field, is_active)];

    if value.is_empty() && !is_active {
        match field.placeholder().filter(|_| state.show_placeholders) {
            Some(placeholder) => spans.push(Span::styled(
                placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
            None => spans.push(Span::styled("(empty)", Style::default().fg(Color::DarkGray))),
        }
        return Line::from(spans);
    }

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    spans.push(Span::styled(
        display_text(value, field.kind(), state.passwords_hidden()),
        value_style,
    ));
    if is_active {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

/// Build the gender select line
pub fn select_line(state: &AppState) -> Line<'static> {
    let is_active = state.focus == FocusTarget::Gender;
    let choice = state.form.values().gender.map(Gender::label);

    let value_style = match (is_active, choice.is_some()) {
        (true, _) => Style::default().fg(Color::Cyan),
        (false, true) => Style::default(),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let mut spans = vec![label_span(Field::Gender, is_active)];
    if is_active {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::styled(choice.unwrap_or("(select)"), value_style));
    if is_active {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

/// Build the interests checkbox line
pub fn checkbox_line(state: &AppState) -> Line<'static> {
    let row_active = matches!(state.focus, FocusTarget::Interest(_));
    let mut spans = vec![label_span(Field::Interests, row_active)];

    for (idx, interest) in Interest::ALL.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let checked = state.form.values().has_interest(interest);
        let mark = if checked { "[x]" } else { "[ ]" };
        let style = if state.focus == FocusTarget::Interest(interest) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if checked {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{mark} {}", interest.label()), style));
    }
    Line::from(spans)
}

/// Build the input line for any field
pub fn field_line(state: &AppState, field: Field) -> Line<'static> {
    match field.kind() {
        FieldKind::Select => select_line(state),
        FieldKind::Checkboxes => checkbox_line(state),
        _ => text_line(state, field),
    }
}

/// Build the validation message line shown under a field (blank when valid)
pub fn error_line(state: &AppState, field: Field) -> Line<'static> {
    match state.form.errors().get(field) {
        Some(message) => Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH)),
            Span::styled(message, Style::default().fg(Color::Red)),
        ]),
        None => Line::default(),
    }
}
