use crate::checksum::{
    recompute_and_compare, to_values, CheckDigitCalculator, ChecksumDescriptor, Validator,
    DECIMAL_CHARSET,
};

/// Check digit of the Unique Master Citizen Number.
///
/// https://en.wikipedia.org/wiki/Unique_Master_Citizen_Number
pub struct JmbgChecksum;

const BODY_LENGTH: usize = 12;

impl JmbgChecksum {
    pub const DESCRIPTOR: ChecksumDescriptor = ChecksumDescriptor::new(11, 10, DECIMAL_CHARSET, false);
}

impl Validator for JmbgChecksum {
    fn is_valid_match(&self, canonical: &str) -> bool {
        recompute_and_compare(self, &Self::DESCRIPTOR, canonical)
    }
}

impl CheckDigitCalculator for JmbgChecksum {
    fn calculate(&self, body: &str) -> Option<String> {
        let descriptor = &Self::DESCRIPTOR;
        let m = descriptor.modulus();
        let r = descriptor.radix();

        let values = to_values(descriptor, body)?;
        if values.len() != BODY_LENGTH {
            return None;
        }

        // weights 7..2 applied to the pairs (d[i], d[i + 6])
        let sum: u32 = (0..6)
            .map(|i| (7 - i as u32) * (values[i] + values[i + 6]))
            .sum();
        // both 10 and 11 collapse to 0
        let check_digit = (m - sum % m) % r;

        let mut result = body.to_string();
        result.push(descriptor.glyph(check_digit)?);
        Some(result)
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn validate_jmbgs() {
        let jmbgs = vec!["0101006500006", "1212995504350", "0710003730015"];
        for jmbg in jmbgs {
            println!("testing for input {jmbg}");
            assert!(JmbgChecksum.is_valid_match(jmbg));
        }
    }

    #[test]
    fn test_invalid_jmbgs() {
        let invalid_jmbgs = vec![
            "0101006500007",
            "1234567890123",
            // separators are not part of the canonical form
            "01-01-006-50-000-6",
            "010100650000",
        ];
        for jmbg in invalid_jmbgs {
            println!("testing for input {jmbg}");
            assert!(!JmbgChecksum.is_valid_match(jmbg));
        }
    }

    #[test]
    fn check_digit_is_reduced_mod_ten() {
        // sum = 7, 11 - 7 = 4
        assert_eq!(JmbgChecksum.calculate("100000000000").as_deref(), Some("1000000000004"));
        // sum = 31, 31 % 11 = 9, 11 - 9 = 2
        assert_eq!(JmbgChecksum.calculate("300005000000").as_deref(), Some("3000050000002"));
        // sum = 56, 56 % 11 = 1, 11 - 1 = 10 -> 0
        assert_eq!(JmbgChecksum.calculate("800000000000").as_deref(), Some("8000000000000"));
        // sum = 0, 11 - 0 = 11 -> 1
        assert_eq!(JmbgChecksum.calculate("000000000000").as_deref(), Some("0000000000001"));
    }

    #[test]
    fn every_body_produces_a_valid_jmbg() {
        for n in (0..1_000_000_000_000u64).step_by(3_999_999_989) {
            let body = format!("{n:012}");
            let full = JmbgChecksum.calculate(&body).unwrap();
            assert!(JmbgChecksum.is_valid_match(&full), "{full}");
        }
    }
}
