//! Form field identifiers and choice value objects

use super::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one field of the profile form.
///
/// The serialized and parsed names are the camelCase identifiers used for
/// error keys (`firstName`, `phoneNumber`, ...). Ordering follows the data
/// model, which is also the iteration order of [`super::ErrorState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
    Age,
    Gender,
    Interests,
    BirthDate,
}

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Select,
    Checkboxes,
    Date,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::PhoneNumber,
        Field::Password,
        Field::ConfirmPassword,
        Field::Age,
        Field::Gender,
        Field::Interests,
        Field::BirthDate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Interests => "interests",
            Field::BirthDate => "birthDate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Interests => "Interests",
            Field::BirthDate => "Date of Birth",
        }
    }

    /// Hint shown in an empty, unfocused input
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::FirstName => Some("Enter your first name"),
            Field::LastName => Some("Enter your last name"),
            Field::Email => Some("Enter your Email Id"),
            Field::PhoneNumber => Some("Enter your phone number"),
            Field::Password => Some("Enter your password"),
            Field::ConfirmPassword => Some("Confirm your password"),
            Field::Age => Some("Enter your age"),
            Field::BirthDate => Some("YYYY-MM-DD"),
            Field::Gender | Field::Interests => None,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::FirstName | Field::LastName | Field::PhoneNumber => FieldKind::Text,
            Field::Email => FieldKind::Email,
            Field::Password | Field::ConfirmPassword => FieldKind::Password,
            Field::Age => FieldKind::Number,
            Field::Gender => FieldKind::Select,
            Field::Interests => FieldKind::Checkboxes,
            Field::BirthDate => FieldKind::Date,
        }
    }

    /// Whether the field holds free-form text typed by the user
    pub fn is_text_input(self) -> bool {
        !matches!(self.kind(), FieldKind::Select | FieldKind::Checkboxes)
    }
}

impl FieldKind {
    /// Whether a typed character is accepted by this kind of input
    pub fn accepts(self, c: char) -> bool {
        match self {
            FieldKind::Number => c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'),
            FieldKind::Date => c.is_ascii_digit() || c == '-',
            FieldKind::Text | FieldKind::Email | FieldKind::Password => !c.is_control(),
            FieldKind::Select | FieldKind::Checkboxes => false,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Options of the gender select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Next option, wrapping; an empty select starts at the first option
    pub fn cycle_next(current: Option<Gender>) -> Gender {
        match current {
            None | Some(Gender::Other) => Gender::Male,
            Some(Gender::Male) => Gender::Female,
            Some(Gender::Female) => Gender::Other,
        }
    }

    /// Previous option, wrapping; an empty select starts at the last option
    pub fn cycle_prev(current: Option<Gender>) -> Gender {
        match current {
            None | Some(Gender::Male) => Gender::Other,
            Some(Gender::Female) => Gender::Male,
            Some(Gender::Other) => Gender::Female,
        }
    }
}

impl FromStr for Gender {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| FormError::InvalidChoice {
                field: Field::Gender,
                value: s.to_string(),
            })
    }
}

/// Interest checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Coding,
    Sports,
    Reading,
}

impl Interest {
    pub const ALL: [Interest; 3] = [Interest::Coding, Interest::Sports, Interest::Reading];

    pub fn as_str(self) -> &'static str {
        match self {
            Interest::Coding => "coding",
            Interest::Sports => "sports",
            Interest::Reading => "reading",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interest::Coding => "Coding",
            Interest::Sports => "Sports",
            Interest::Reading => "Reading",
        }
    }
}

impl FromStr for Interest {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interest::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| FormError::UnknownInterest(s.to_string()))
    }
}
