use crate::IdentifierKind;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputErrorKind {
    /// No input was given at all
    Missing,
    /// The input only contains whitespace
    Empty,
}

impl InputErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            InputErrorKind::Missing => "missing",
            InputErrorKind::Empty => "empty",
        }
    }
}

/// Raised before any validation logic runs when there is nothing to validate.
///
/// Malformed identifiers are never an error, they simply don't validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct InputError {
    pub kind: InputErrorKind,
    pub identifier: IdentifierKind,
}

impl InputError {
    pub fn missing(identifier: IdentifierKind) -> Self {
        Self {
            kind: InputErrorKind::Missing,
            identifier,
        }
    }

    pub fn empty(identifier: IdentifierKind) -> Self {
        Self {
            kind: InputErrorKind::Empty,
            identifier,
        }
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            InputErrorKind::Missing => self.identifier.missing_message(),
            InputErrorKind::Empty => self.identifier.empty_message(),
        }
    }
}
