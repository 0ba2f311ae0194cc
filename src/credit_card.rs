use crate::checksum::{LuhnChecksum, Validator};
use crate::validator::IdentifierValidator;
use crate::IdentifierKind;

const MIN_CARD_NUMBER_LENGTH: usize = 8;
const MAX_CARD_NUMBER_LENGTH: usize = 19;

/// Validates payment card numbers with the Luhn checksum.
///
/// Separators are ignored: every non-digit glyph is stripped before the length gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardValidator;

/// Keeps the ASCII digits of a card number.
pub fn canonicalize(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

impl IdentifierValidator for CreditCardValidator {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::CreditCard
    }

    fn check(&self, number: &str) -> bool {
        let clean_number = canonicalize(number);
        if !(MIN_CARD_NUMBER_LENGTH..=MAX_CARD_NUMBER_LENGTH).contains(&clean_number.len()) {
            return false;
        }
        LuhnChecksum.is_valid_match(&clean_number)
    }
}
