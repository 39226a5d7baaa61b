//! Store-specific error types.

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A record is already stored under this email
    #[error("User with email {email} already exists")]
    AlreadyExists { email: String },

    /// No record is stored under this email
    #[error("User not found: {email}")]
    NotFound { email: String },
}
