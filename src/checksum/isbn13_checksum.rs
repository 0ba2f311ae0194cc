use crate::checksum::{
    recompute_and_compare, to_values, CheckDigitCalculator, ChecksumDescriptor, Validator,
    DECIMAL_CHARSET,
};

pub struct Isbn13Checksum;

const BODY_LENGTH: usize = 12;
const WEIGHTS: [u32; 2] = [1, 3];

impl Isbn13Checksum {
    pub const DESCRIPTOR: ChecksumDescriptor = ChecksumDescriptor::new(10, 10, DECIMAL_CHARSET, false);
}

impl Validator for Isbn13Checksum {
    fn is_valid_match(&self, canonical: &str) -> bool {
        recompute_and_compare(self, &Self::DESCRIPTOR, canonical)
    }
}

impl CheckDigitCalculator for Isbn13Checksum {
    fn calculate(&self, body: &str) -> Option<String> {
        let descriptor = &Self::DESCRIPTOR;
        let m = descriptor.modulus();
        let r = descriptor.radix();

        let values = to_values(descriptor, body)?;
        if values.len() != BODY_LENGTH {
            return None;
        }

        let sum: u32 = values
            .iter()
            .enumerate()
            .map(|(i, value)| value * WEIGHTS[i % 2])
            .sum();

        let remainder = sum % m;
        let check_digit = if remainder == 0 { 0 } else { m - remainder };
        // unreachable with m == r, kept as a guard
        let check_digit = if check_digit == r { 0 } else { check_digit };

        let mut result = body.to_string();
        result.push(descriptor.glyph(check_digit)?);
        Some(result)
    }
}
