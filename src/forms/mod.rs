//! Request bodies accepted by the JSON API.
//!
//! Every form is a plain `serde` struct validated with `validator` and then
//! converted into the typed domain payload with `TryFrom`. Update forms keep
//! every field optional and reject unknown keys.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod auth;
pub mod blog;
pub mod categories;
pub mod classes;
pub mod locations;
pub mod messages;
pub mod portfolio;
pub mod services;
pub mod team;
pub mod testimonials;

/// Error returned when a request body cannot be turned into domain values.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Form validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Form contains invalid data: {0}")]
    TypeConstraint(#[from] TypeConstraintError),
}

impl FormError {
    /// Field-level details, when `validator` produced them.
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            FormError::Validation(errors) => Some(errors),
            FormError::TypeConstraint(_) => None,
        }
    }
}

/// Convert an optional raw value into an optional domain value.
pub(crate) fn map_opt<T, U, F>(value: Option<T>, f: F) -> Result<Option<U>, TypeConstraintError>
where
    F: FnOnce(T) -> Result<U, TypeConstraintError>,
{
    value.map(f).transpose()
}
