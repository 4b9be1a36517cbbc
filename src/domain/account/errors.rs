//! Account Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),
}
