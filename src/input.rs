use crate::{IdentifierKind, InputError};

/// Rejects absent or whitespace-only input before any validation logic runs.
pub fn require_input(input: Option<&str>, identifier: IdentifierKind) -> Result<&str, InputError> {
    match input {
        None => Err(InputError::missing(identifier)),
        Some(input) if input.trim().is_empty() => Err(InputError::empty(identifier)),
        Some(input) => Ok(input),
    }
}
