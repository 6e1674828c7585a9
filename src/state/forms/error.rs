//! Errors for rejected form model operations
//!
//! These cover misuse of the model API (unknown names, impossible values).
//! Validation failures are not errors; they live in [`super::ErrorState`].

use super::field::Field;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),

    #[error("unknown interest `{0}`")]
    UnknownInterest(String),

    #[error("`{value}` is not an option for {field}")]
    InvalidChoice { field: Field, value: String },

    #[error("{0} is not a text input")]
    NotTextInput(Field),
}
