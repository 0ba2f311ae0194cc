use crate::validator::IdentifierValidator;
use crate::IdentifierKind;
use lazy_static::lazy_static;
use regex::Regex;

/// Only ASCII whitespace ends the last group; other Unicode spaces are part of it.
const EMAIL_PATTERN: &str = r"^(.+)@([^.]+)\.([^ \t\n\x0B\x0C\r]+)$";

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(EMAIL_PATTERN).unwrap();
}

/// Validates email addresses with a single anchored pattern. There is no checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl IdentifierValidator for EmailValidator {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Email
    }

    fn check(&self, email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }
}
