//! Form values and the profile form model

use super::error::FormError;
use super::field::{Field, Gender, Interest};
use super::validation::{validate, ErrorState};
use serde::Serialize;
use std::collections::BTreeSet;

/// Live values of every profile field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub interests: BTreeSet<Interest>,
    pub birth_date: String,
}

impl FormState {
    /// Text value of a text input, `None` for select and checkbox fields
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Age => &self.age,
            Field::BirthDate => &self.birth_date,
            Field::Gender | Field::Interests => return None,
        };
        Some(value.as_str())
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::Age => &mut self.age,
            Field::BirthDate => &mut self.birth_date,
            Field::Gender | Field::Interests => return None,
        };
        Some(value)
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }
}

/// The profile form: current values plus the errors of the last submit.
///
/// Updating values never touches the errors; only [`ProfileForm::submit`]
/// replaces them.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    values: FormState,
    errors: ErrorState,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    /// Set a field from its string form.
    ///
    /// Text inputs take any string. `gender` takes `""` (cleared) or one of
    /// the option names; `interests` is changed through
    /// [`ProfileForm::toggle_interest`] instead.
    pub fn update_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let value = value.into();
        match field {
            Field::Gender => {
                self.values.gender = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
                Ok(())
            }
            Field::Interests => Err(FormError::NotTextInput(field)),
            _ => {
                self.set_text(field, value);
                Ok(())
            }
        }
    }

    /// [`ProfileForm::update_field`] keyed by the field's name
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field: Field = name.parse()?;
        self.update_field(field, value)
    }

    /// Replace the value of a text input; ignored for other fields
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        if let Some(slot) = self.values.text_mut(field) {
            *slot = value.into();
        }
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.values.gender = gender;
    }

    /// Append a character to a text input; ignored for other fields
    pub fn push_char(&mut self, field: Field, c: char) {
        if let Some(slot) = self.values.text_mut(field) {
            slot.push(c);
        }
    }

    /// Remove the last character of a text input; ignored for other fields
    pub fn pop_char(&mut self, field: Field) {
        if let Some(slot) = self.values.text_mut(field) {
            slot.pop();
        }
    }

    /// Check or uncheck an interest. Checking twice keeps a single entry.
    pub fn toggle_interest(&mut self, interest: Interest, checked: bool) {
        if checked {
            self.values.interests.insert(interest);
        } else {
            self.values.interests.remove(&interest);
        }
    }

    pub fn toggle_interest_by_name(&mut self, name: &str, checked: bool) -> Result<(), FormError> {
        let interest: Interest = name.parse()?;
        self.toggle_interest(interest, checked);
        Ok(())
    }

    /// Validate the current values, replacing any previous errors
    pub fn submit(&mut self) -> &ErrorState {
        self.errors = submit(&self.values);
        &self.errors
    }
}

/// Validate a form state on submission
pub fn submit(state: &FormState) -> ErrorState {
    validate(state)
}
