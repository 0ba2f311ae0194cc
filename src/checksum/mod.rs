mod isbn10_checksum;
mod isbn13_checksum;
mod iso_7064_checksum;
mod jmbg_checksum;
mod luhn_checksum;

pub use crate::checksum::isbn10_checksum::Isbn10Checksum;
pub use crate::checksum::isbn13_checksum::Isbn13Checksum;
pub use crate::checksum::iso_7064_checksum::Mod97_10Checksum;
pub use crate::checksum::jmbg_checksum::JmbgChecksum;
pub use crate::checksum::luhn_checksum::LuhnChecksum;

pub const DECIMAL_CHARSET: &str = "0123456789";
pub const ISBN10_CHARSET: &str = "0123456789X";

/// Checks a canonical identifier against its check digit(s).
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, canonical: &str) -> bool;
}

/// Produces the canonical identifier from its body (the identifier minus the trailing check glyphs).
pub trait CheckDigitCalculator: Validator {
    /// Returns `None` if the body is not over the algorithm's charset or has the wrong length.
    fn calculate(&self, body: &str) -> Option<String>;
}

/// The arithmetic domain of a check-digit scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumDescriptor {
    modulus: u32,
    radix: u32,
    charset: &'static str,
    two_check_digits: bool,
}

impl ChecksumDescriptor {
    pub const fn new(
        modulus: u32,
        radix: u32,
        charset: &'static str,
        two_check_digits: bool,
    ) -> Self {
        Self {
            modulus,
            radix,
            charset,
            two_check_digits,
        }
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn charset(&self) -> &'static str {
        self.charset
    }

    pub fn has_two_check_digits(&self) -> bool {
        self.two_check_digits
    }

    pub fn check_digit_count(&self) -> usize {
        if self.two_check_digits {
            2
        } else {
            1
        }
    }

    /// Value of `glyph` in the charset. Charsets are ASCII so the byte offset is the value.
    pub fn index_of(&self, glyph: char) -> Option<u32> {
        self.charset.find(glyph).map(|index| index as u32)
    }

    /// Glyph for `value`, the inverse of [`ChecksumDescriptor::index_of`].
    pub fn glyph(&self, value: u32) -> Option<char> {
        self.charset.chars().nth(value as usize)
    }

    /// Splits a canonical identifier into its body and check glyphs.
    pub fn split_check_digits<'a>(&self, canonical: &'a str) -> Option<(&'a str, &'a str)> {
        let body_len = canonical.len().checked_sub(self.check_digit_count())?;
        if !canonical.is_char_boundary(body_len) {
            return None;
        }
        Some(canonical.split_at(body_len))
    }
}

/// The checksum schemes known to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Luhn,
    IbanMod97,
    Isbn10,
    Isbn13,
    Jmbg,
}

impl ChecksumAlgorithm {
    pub fn descriptor(&self) -> ChecksumDescriptor {
        match self {
            ChecksumAlgorithm::Luhn => LuhnChecksum::DESCRIPTOR,
            ChecksumAlgorithm::IbanMod97 => Mod97_10Checksum::DESCRIPTOR,
            ChecksumAlgorithm::Isbn10 => Isbn10Checksum::DESCRIPTOR,
            ChecksumAlgorithm::Isbn13 => Isbn13Checksum::DESCRIPTOR,
            ChecksumAlgorithm::Jmbg => JmbgChecksum::DESCRIPTOR,
        }
    }

    /// Recomputes the check glyph(s) of a body. Luhn is validate-only and always returns `None`.
    pub fn calculate(&self, body: &str) -> Option<String> {
        match self {
            ChecksumAlgorithm::Luhn => None,
            ChecksumAlgorithm::IbanMod97 => Mod97_10Checksum.calculate(body),
            ChecksumAlgorithm::Isbn10 => Isbn10Checksum.calculate(body),
            ChecksumAlgorithm::Isbn13 => Isbn13Checksum.calculate(body),
            ChecksumAlgorithm::Jmbg => JmbgChecksum.calculate(body),
        }
    }
}

impl Validator for ChecksumAlgorithm {
    fn is_valid_match(&self, canonical: &str) -> bool {
        match self {
            ChecksumAlgorithm::Luhn => LuhnChecksum.is_valid_match(canonical),
            ChecksumAlgorithm::IbanMod97 => Mod97_10Checksum.is_valid_match(canonical),
            ChecksumAlgorithm::Isbn10 => Isbn10Checksum.is_valid_match(canonical),
            ChecksumAlgorithm::Isbn13 => Isbn13Checksum.is_valid_match(canonical),
            ChecksumAlgorithm::Jmbg => JmbgChecksum.is_valid_match(canonical),
        }
    }
}

/// Converts every glyph of `input` to its charset value, failing on the first unknown glyph.
fn to_values(descriptor: &ChecksumDescriptor, input: &str) -> Option<Vec<u32>> {
    input
        .chars()
        .map(|glyph| descriptor.index_of(glyph))
        .collect()
}

/// Shared validation for single-check-digit calculators: recompute from the body and compare.
fn recompute_and_compare<C: CheckDigitCalculator + ?Sized>(
    calculator: &C,
    descriptor: &ChecksumDescriptor,
    canonical: &str,
) -> bool {
    match descriptor.split_check_digits(canonical) {
        Some((body, _)) => calculator.calculate(body).as_deref() == Some(canonical),
        None => false,
    }
}
