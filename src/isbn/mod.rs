use crate::checksum::{ChecksumAlgorithm, Validator};
use crate::observability::metrics::ValidationMetrics;
use crate::validator::{gate_and_record, IdentifierValidator};
use crate::{IdentifierKind, InputError};
use lazy_static::lazy_static;
use regex::Regex;

const PREFIX_LENGTH: usize = 7;

lazy_static! {
    static ref ISBN10_REGEX: Regex = Regex::new("^[0-9]{9}[0-9X]$").unwrap();
    static ref ISBN13_REGEX: Regex = Regex::new("^97[89][0-9]{10}$").unwrap();
}

/// The two surface syntaxes of an ISBN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnFormat {
    Isbn10,
    Isbn13,
}

impl IsbnFormat {
    /// Number of hyphens a hyphenated form must have (registration group, registrant, publication, check digit).
    pub fn hyphen_count(&self) -> usize {
        match self {
            IsbnFormat::Isbn10 => 3,
            IsbnFormat::Isbn13 => 4,
        }
    }

    pub fn checksum(&self) -> ChecksumAlgorithm {
        match self {
            IsbnFormat::Isbn10 => ChecksumAlgorithm::Isbn10,
            IsbnFormat::Isbn13 => ChecksumAlgorithm::Isbn13,
        }
    }

    fn regex(&self) -> &'static Regex {
        match self {
            IsbnFormat::Isbn10 => &ISBN10_REGEX,
            IsbnFormat::Isbn13 => &ISBN13_REGEX,
        }
    }

    /// Checks the grouping of the raw input and the shape of its canonical form.
    /// The check digit itself is not verified.
    pub fn matches(&self, isbn: &str) -> bool {
        let number = strip_prefix(isbn);
        let hyphens = number.matches('-').count();
        if hyphens != 0 && (hyphens != self.hyphen_count() || !hyphens_separate_groups(number)) {
            return false;
        }
        self.regex().is_match(&canonicalize(isbn))
    }

    /// Structural match plus check digit verification.
    pub fn is_valid(&self, isbn: &str) -> bool {
        self.matches(isbn) && self.checksum().is_valid_match(&canonicalize(isbn))
    }

    /// Returns the input with its check glyph replaced by the correct one, or `None` if the
    /// input is not an ISBN of this format.
    pub fn repair(&self, isbn: &str) -> Option<String> {
        if !self.matches(isbn) {
            return None;
        }
        let canonical = canonicalize(isbn);
        let (body, _) = self.checksum().descriptor().split_check_digits(&canonical)?;
        let valid = self.checksum().calculate(body)?;
        let check = valid.chars().last()?;

        // the last [0-9X] glyph of the input is the check glyph of the canonical form
        let (index, current) = isbn.char_indices().rev().find(|(_, c)| is_isbn_glyph(*c))?;
        if current == check {
            return Some(isbn.to_string());
        }
        let mut repaired = String::with_capacity(isbn.len());
        repaired.push_str(&isbn[..index]);
        repaired.push(check);
        repaired.push_str(&isbn[index + current.len_utf8()..]);
        Some(repaired)
    }
}

fn is_isbn_glyph(c: char) -> bool {
    c.is_ascii_digit() || c == 'X'
}

/// Every hyphen sits between two glyphs of the number: none leading, trailing or doubled.
fn hyphens_separate_groups(number: &str) -> bool {
    let groups: Vec<&str> = number.split('-').collect();
    groups
        .windows(2)
        .all(|pair| pair[0].ends_with(is_isbn_glyph) && pair[1].starts_with(is_isbn_glyph))
}

/// Drops a leading `ISBN-10` or `ISBN-13` (in any case) so its digits don't leak into the number.
fn strip_prefix(isbn: &str) -> &str {
    match isbn.get(..PREFIX_LENGTH) {
        Some(prefix)
            if prefix.eq_ignore_ascii_case("ISBN-10") || prefix.eq_ignore_ascii_case("ISBN-13") =>
        {
            &isbn[PREFIX_LENGTH..]
        }
        _ => isbn,
    }
}

/// Strips the prefix and every glyph other than digits and uppercase `X`.
pub fn canonicalize(isbn: &str) -> String {
    strip_prefix(isbn).chars().filter(|c| is_isbn_glyph(*c)).collect()
}

/// Detects which ISBN format the input is structurally shaped as.
pub fn detect_format(isbn: &str) -> Option<IsbnFormat> {
    [IsbnFormat::Isbn10, IsbnFormat::Isbn13]
        .into_iter()
        .find(|format| format.matches(isbn))
}

/// Validates ISBN-10 and ISBN-13 numbers.
///
/// Accepts an optional `ISBN`, `ISBN-10` or `ISBN-13` prefix, and either compact, space separated
/// or fully hyphenated groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsbnValidator;

impl IsbnValidator {
    pub fn is_valid_isbn10<'a>(&self, isbn: impl Into<Option<&'a str>>) -> Result<bool, InputError> {
        self.validate_format(isbn.into(), IsbnFormat::Isbn10)
    }

    pub fn is_valid_isbn13<'a>(&self, isbn: impl Into<Option<&'a str>>) -> Result<bool, InputError> {
        self.validate_format(isbn.into(), IsbnFormat::Isbn13)
    }

    /// Returns a valid ISBN-10, assuming every glyph before the check digit is correct.
    pub fn validate_isbn10<'a>(
        &self,
        isbn: impl Into<Option<&'a str>>,
    ) -> Result<Option<String>, InputError> {
        self.repair_format(isbn.into(), IsbnFormat::Isbn10)
    }

    /// Returns a valid ISBN-13, assuming every digit before the check digit is correct.
    pub fn validate_isbn13<'a>(
        &self,
        isbn: impl Into<Option<&'a str>>,
    ) -> Result<Option<String>, InputError> {
        self.repair_format(isbn.into(), IsbnFormat::Isbn13)
    }

    fn validate_format(&self, isbn: Option<&str>, format: IsbnFormat) -> Result<bool, InputError> {
        gate_and_record(
            IdentifierKind::Isbn,
            isbn,
            &ValidationMetrics::default(),
            |isbn| {
                let valid = format.is_valid(isbn);
                (valid, valid)
            },
        )
    }

    fn repair_format(
        &self,
        isbn: Option<&str>,
        format: IsbnFormat,
    ) -> Result<Option<String>, InputError> {
        gate_and_record(
            IdentifierKind::Isbn,
            isbn,
            &ValidationMetrics::default(),
            |isbn| {
                let repaired = format.repair(isbn);
                // a valid input comes back unchanged
                let valid = repaired.as_deref() == Some(isbn);
                (repaired, valid)
            },
        )
    }
}

impl IdentifierValidator for IsbnValidator {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Isbn
    }

    fn check(&self, isbn: &str) -> bool {
        IsbnFormat::Isbn10.is_valid(isbn) || IsbnFormat::Isbn13.is_valid(isbn)
    }
}
