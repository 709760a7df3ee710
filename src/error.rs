//! Page Errors
//!
//! Failure taxonomy for page handlers. Declined confirmations are not errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Common result type for page operations
pub type PageResult<T> = Result<T, PageError>;

#[derive(Debug, Error)]
pub enum PageError {
    /// Expected markup is not on the page; handlers log and no-op
    #[error("missing {what} ({selector})")]
    MissingElement { what: &'static str, selector: String },

    /// Title rejected; the user has been alerted
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The page config block is malformed
    #[error("invalid page config: {0}")]
    Config(String),
}

impl PageError {
    pub fn missing(what: &'static str, selector: impl Into<String>) -> Self {
        PageError::MissingElement { what, selector: selector.into() }
    }
}
