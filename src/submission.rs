//! Submission of a completed form.
//!
//! The final values are validated again before anything is written, since
//! the store may have changed since the last keystroke.

use crate::store::{Record, StoreError, UserStore};
use crate::validation::{validate_email, validate_password, Hasher, ValidationFailure};
use log::*;

/// Errors that end a submission. None of them leaves a record behind.
///
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Final email validation failed
    #[error("Email '{email}' is invalid: {}", .failure.flattened())]
    InvalidEmail {
        email: String,
        failure: ValidationFailure,
    },

    /// Final password validation failed
    #[error("Password is invalid: {}", .0.flattened())]
    InvalidPassword(ValidationFailure),

    /// The email was taken between validation and creation
    #[error("{0}")]
    AlreadyExists(StoreError),
}

/// Validate the raw field values and create the user.
///
pub fn submit(
    store: &dyn UserStore,
    hasher: &Hasher,
    email: &str,
    password: &str,
) -> Result<Record, SubmitError> {
    let valid_email = validate_email(email, store).map_err(|failure| SubmitError::InvalidEmail {
        email: email.to_string(),
        failure,
    })?;

    let hash = validate_password(password, hasher).map_err(SubmitError::InvalidPassword)?;

    info!("Creating user <{}>", valid_email);
    store
        .create(&valid_email, &hash)
        .map_err(SubmitError::AlreadyExists)
}
