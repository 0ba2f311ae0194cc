mod country_patterns;

pub use country_patterns::{country_table, find_country_pattern, CountryPattern, COUNTRY_PATTERNS};

use crate::checksum::{Mod97_10Checksum, Validator};
use crate::validator::IdentifierValidator;
use crate::IdentifierKind;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 34;

/// Validates International Bank Account Numbers that use ISO 7064 MOD 97-10.
///
/// Only the countries listed in [`COUNTRY_PATTERNS`] are supported. Whitespace is ignored
/// and letters are accepted in either case.
#[derive(Debug, Clone, Copy, Default)]
pub struct IbanValidator;

/// Removes whitespace and uppercases the IBAN.
pub fn canonicalize(iban: &str) -> String {
    iban.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Moves the country code and check digits to the end and expands letters to numbers
/// (A = 10 ... Z = 35), yielding the decimal string checked by MOD 97-10.
///
/// Returns `None` if the IBAN is shorter than four glyphs or contains anything other than
/// ASCII digits and uppercase letters.
pub fn transform(iban: &str) -> Option<String> {
    if iban.len() < 4 || !iban.is_ascii() {
        return None;
    }
    let (head, tail) = iban.split_at(4);

    let mut numeric = String::with_capacity(iban.len() * 2);
    for c in tail.chars().chain(head.chars()) {
        match c {
            '0'..='9' => numeric.push(c),
            'A'..='Z' => {
                let value = c as u32 - 'A' as u32 + 10;
                numeric.push_str(&value.to_string());
            }
            _ => return None,
        }
    }
    Some(numeric)
}

impl IdentifierValidator for IbanValidator {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Iban
    }

    fn check(&self, iban: &str) -> bool {
        let iban = canonicalize(iban);
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&iban.chars().count()) {
            return false;
        }
        if find_country_pattern(&iban).is_none() {
            return false;
        }
        match transform(&iban) {
            Some(numeric) => Mod97_10Checksum.is_valid_match(&numeric),
            None => false,
        }
    }
}
