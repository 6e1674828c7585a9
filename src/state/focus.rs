//! Keyboard focus over the profile form

use super::forms::{Field, Interest};

/// Something on the form that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    Password,
    ConfirmPassword,
    Age,
    Gender,
    Interest(Interest),
    BirthDate,
    Submit,
}

impl FocusTarget {
    /// Tab order, top to bottom as rendered
    pub const ORDER: [FocusTarget; 13] = [
        FocusTarget::FirstName,
        FocusTarget::LastName,
        FocusTarget::PhoneNumber,
        FocusTarget::Email,
        FocusTarget::Password,
        FocusTarget::ConfirmPassword,
        FocusTarget::Age,
        FocusTarget::Gender,
        FocusTarget::Interest(Interest::Coding),
        FocusTarget::Interest(Interest::Sports),
        FocusTarget::Interest(Interest::Reading),
        FocusTarget::BirthDate,
        FocusTarget::Submit,
    ];

    /// The form field this target edits, if any
    pub fn field(self) -> Option<Field> {
        match self {
            FocusTarget::FirstName => Some(Field::FirstName),
            FocusTarget::LastName => Some(Field::LastName),
            FocusTarget::PhoneNumber => Some(Field::PhoneNumber),
            FocusTarget::Email => Some(Field::Email),
            FocusTarget::Password => Some(Field::Password),
            FocusTarget::ConfirmPassword => Some(Field::ConfirmPassword),
            FocusTarget::Age => Some(Field::Age),
            FocusTarget::Gender => Some(Field::Gender),
            FocusTarget::Interest(_) => Some(Field::Interests),
            FocusTarget::BirthDate => Some(Field::BirthDate),
            FocusTarget::Submit => None,
        }
    }

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|target| *target == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[index - 1]
        }
    }
}
