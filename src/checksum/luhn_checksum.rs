use crate::checksum::{to_values, ChecksumDescriptor, Validator, DECIMAL_CHARSET};

/// Apply the Luhn checksum on a digits-only card number.
pub struct LuhnChecksum;

impl LuhnChecksum {
    pub const DESCRIPTOR: ChecksumDescriptor = ChecksumDescriptor::new(10, 10, DECIMAL_CHARSET, false);
}

impl Validator for LuhnChecksum {
    fn is_valid_match(&self, canonical: &str) -> bool {
        let Some(mut digits) = to_values(&Self::DESCRIPTOR, canonical) else {
            return false;
        };
        let Some(checksum) = digits.pop() else {
            return false;
        };

        // Double every second digit walking left from the one next to the check digit.
        for digit in digits.iter_mut().rev().step_by(2) {
            *digit *= 2;
            if *digit > 9 {
                *digit -= 9;
            }
        }
        let sum: u32 = digits.iter().sum();

        (sum * 9) % 10 == checksum
    }
}
