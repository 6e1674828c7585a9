//! Application state definitions

use super::focus::FocusTarget;
use super::forms::{FieldKind, Gender, ProfileForm};
use super::input::{step_date, step_number, DateStep};
use crate::config::TuiConfig;
use chrono::NaiveDate;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: ProfileForm,
    pub focus: FocusTarget,
    /// Mask password inputs unless revealed
    pub mask_passwords: bool,
    /// Temporary reveal toggled from the keyboard
    pub reveal_passwords: bool,
    pub show_placeholders: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&TuiConfig::default())
    }
}

impl AppState {
    pub fn from_config(config: &TuiConfig) -> Self {
        Self {
            form: ProfileForm::new(),
            focus: FocusTarget::default(),
            mask_passwords: config.mask_passwords(),
            reveal_passwords: false,
            show_placeholders: config.show_placeholders(),
            status_message: None,
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Kind of the focused input, `None` on the submit button
    pub fn focused_kind(&self) -> Option<FieldKind> {
        self.focus.field().map(|field| field.kind())
    }

    /// Whether passwords are currently drawn as bullets
    pub fn passwords_hidden(&self) -> bool {
        self.mask_passwords && !self.reveal_passwords
    }

    pub fn toggle_reveal_passwords(&mut self) {
        self.reveal_passwords = !self.reveal_passwords;
    }

    /// Type a character into the focused text input.
    /// Characters the input does not accept are dropped.
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if field.is_text_input() && field.kind().accepts(c) {
            self.form.push_char(field, c);
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FocusTarget::Gender => self.form.set_gender(None),
            target => {
                if let Some(field) = target.field() {
                    self.form.pop_char(field);
                }
            }
        }
    }

    /// Insert pasted text into the focused text input, keeping only the
    /// characters it accepts. Returns how many characters were inserted.
    pub fn paste(&mut self, text: &str) -> usize {
        let Some(field) = self.focus.field().filter(|f| f.is_text_input()) else {
            return 0;
        };
        let kind = field.kind();
        let mut inserted = 0;
        for c in text.chars().filter(|c| kind.accepts(*c)) {
            self.form.push_char(field, c);
            inserted += 1;
        }
        inserted
    }

    /// Space on the focused element: toggles a checkbox or advances the select.
    /// Returns false when the focused element has no space action.
    pub fn activate(&mut self) -> bool {
        match self.focus {
            FocusTarget::Interest(interest) => {
                let checked = self.form.values().has_interest(interest);
                self.form.toggle_interest(interest, !checked);
                true
            }
            FocusTarget::Gender => {
                self.cycle_gender(true);
                true
            }
            _ => false,
        }
    }

    pub fn cycle_gender(&mut self, forward: bool) {
        let current = self.form.values().gender;
        let next = if forward {
            Gender::cycle_next(current)
        } else {
            Gender::cycle_prev(current)
        };
        self.form.set_gender(Some(next));
    }

    /// Step the focused number input by `delta`
    pub fn step_number(&mut self, delta: i64) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if field.kind() != FieldKind::Number {
            return;
        }
        let current = self.form.values().text(field).unwrap_or_default();
        let next = step_number(current, delta);
        self.form.set_text(field, next);
    }

    /// Step the focused date input, starting from `today` when it holds no date
    pub fn step_date(&mut self, step: DateStep, today: NaiveDate) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if field.kind() != FieldKind::Date {
            return;
        }
        let current = self.form.values().text(field).unwrap_or_default();
        let next = step_date(current, step, today);
        self.form.set_text(field, next);
    }

    /// Validate the form. Returns true when no field has an error.
    pub fn submit(&mut self) -> bool {
        self.form.submit().is_empty()
    }
}
