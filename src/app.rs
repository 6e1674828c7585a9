//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::forms::FieldKind;
use crate::state::{AppState, DateStep, FocusTarget};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: AppState::from_config(config),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => self.state.toggle_reveal_passwords(),
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::PASTE_MODIFIER) => {
                self.paste_from_clipboard()
            }
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            KeyCode::Up => self.handle_vertical(true),
            KeyCode::Down => self.handle_vertical(false),
            KeyCode::PageUp if self.state.focused_kind() == Some(FieldKind::Date) => {
                self.state.step_date(DateStep::YearForward, today())
            }
            KeyCode::PageDown if self.state.focused_kind() == Some(FieldKind::Date) => {
                self.state.step_date(DateStep::YearBack, today())
            }
            KeyCode::Left if self.state.focus == FocusTarget::Gender => {
                self.state.cycle_gender(false)
            }
            KeyCode::Right if self.state.focus == FocusTarget::Gender => {
                self.state.cycle_gender(true)
            }
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Char(' ')
                if matches!(
                    self.state.focus,
                    FocusTarget::Gender | FocusTarget::Interest(_)
                ) =>
            {
                self.state.activate();
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.state.input_char(c)
            }
            _ => {}
        }
    }

    /// Up/Down step number and date inputs and move focus everywhere else
    fn handle_vertical(&mut self, up: bool) {
        match self.state.focused_kind() {
            Some(FieldKind::Number) => self.state.step_number(if up { 1 } else { -1 }),
            Some(FieldKind::Date) => {
                let step = if up {
                    DateStep::DayForward
                } else {
                    DateStep::DayBack
                };
                self.state.step_date(step, today());
            }
            _ if up => self.state.prev_focus(),
            _ => self.state.next_focus(),
        }
    }

    /// Enter submits from the button and from any typed input;
    /// on a select or checkbox it acts like Space
    fn handle_enter(&mut self) {
        match self.state.focused_kind() {
            Some(FieldKind::Select) | Some(FieldKind::Checkboxes) => {
                self.state.activate();
            }
            _ => self.submit(),
        }
    }

    /// Validate the form and show the resulting errors
    pub fn submit(&mut self) {
        if self.state.submit() {
            tracing::info!("Profile form passed validation");
        }
    }

    fn paste_from_clipboard(&mut self) {
        match read_clipboard() {
            Ok(text) => {
                self.state.paste(&text);
            }
            Err(err) => {
                tracing::warn!("Clipboard paste failed: {err:#}");
                self.state.status_message = Some(format!("Paste failed: {err}"));
            }
        }
    }
}

fn read_clipboard() -> Result<String> {
    let mut clipboard = arboard::Clipboard::new()?;
    Ok(clipboard.get_text()?)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
