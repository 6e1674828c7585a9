//! Form domain layer
//!
//! Field identifiers, the profile form model and its validation rules.
//! Nothing here knows about the terminal.

mod error;
mod field;
mod form_state;
mod validation;

pub use error::FormError;
pub use field::{Field, FieldKind, Gender, Interest};
pub use form_state::{submit, FormState, ProfileForm};
pub use validation::{
    is_valid_age, is_valid_email, is_valid_password, is_valid_phone_number, parse_leading_int,
    validate, ErrorState, MAX_AGE, MIN_AGE, MIN_PASSWORD_LENGTH,
};
