//! Title Validation
//!
//! Checks applied to the add/edit forms before the browser submits them.

use thiserror::Error;

/// Longest title the server column accepts
pub const TITLE_MAX_CHARS: usize = 200;

/// Rejection reasons; `Display` is the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task title is required!")]
    Empty,
    #[error("Task title must be less than {max} characters!")]
    TooLong { max: usize, len: usize },
}

/// Trim `raw` and check it against `max_chars`.
///
/// Length is counted in Unicode scalar values, so accented and CJK titles get
/// the same budget as ASCII ones. Returns the trimmed title on success.
pub fn validate_title(raw: &str, max_chars: usize) -> Result<&str, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::Empty);
    }
    let len = title.chars().count();
    if len > max_chars {
        return Err(ValidationError::TooLong { max: max_chars, len });
    }
    Ok(title)
}
