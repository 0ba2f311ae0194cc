use crate::checksum::{
    recompute_and_compare, to_values, CheckDigitCalculator, ChecksumDescriptor, Validator,
    ISBN10_CHARSET,
};

pub struct Isbn10Checksum;

const BODY_LENGTH: usize = 9;

impl Isbn10Checksum {
    pub const DESCRIPTOR: ChecksumDescriptor = ChecksumDescriptor::new(11, 10, ISBN10_CHARSET, false);
}

impl Validator for Isbn10Checksum {
    fn is_valid_match(&self, canonical: &str) -> bool {
        recompute_and_compare(self, &Self::DESCRIPTOR, canonical)
    }
}

impl CheckDigitCalculator for Isbn10Checksum {
    fn calculate(&self, body: &str) -> Option<String> {
        let descriptor = &Self::DESCRIPTOR;
        let m = descriptor.modulus();
        let r = descriptor.radix();

        let values = to_values(descriptor, body)?;
        // 'X' is only allowed as the check glyph
        if values.len() != BODY_LENGTH || values.iter().any(|v| *v >= r) {
            return None;
        }

        // weights run from 10 down to 2
        let sum: u32 = values
            .iter()
            .enumerate()
            .map(|(i, value)| value * (r - i as u32))
            .sum();

        let remainder = sum % m;
        let check_digit = if remainder == 0 { 0 } else { m - remainder };

        let mut result = body.to_string();
        result.push(descriptor.glyph(check_digit)?);
        Some(result)
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn test_valid_isbn10() {
        let valid_ids = vec!["0596520689", "0306406152", "080442957X", "0000000000", "1861972717"];
        for id in valid_ids {
            println!("testing for input {id}");
            assert!(Isbn10Checksum.is_valid_match(id));
        }
    }

    #[test]
    fn test_invalid_isbn10() {
        let invalid_ids = vec![
            // wrong checksum
            "0596520688",
            "0306406153",
            "0804429579",
            // lowercase x is not part of the charset
            "080442957x",
            // X outside the check position
            "X596520689",
            // wrong length
            "059652068",
            "05965206899",
        ];
        for id in invalid_ids {
            println!("testing for input {id}");
            assert!(!Isbn10Checksum.is_valid_match(id));
        }
    }

    #[test]
    fn calculate_emits_x_for_ten() {
        assert_eq!(
            Isbn10Checksum.calculate("080442957").as_deref(),
            Some("080442957X")
        );
        assert_eq!(Isbn10Checksum.calculate("08044295"), None);
        assert_eq!(Isbn10Checksum.calculate("08044295X"), None);
    }

    #[test]
    fn every_body_produces_a_valid_isbn10() {
        for n in (0..1_000_000_000u32).step_by(7_919_993) {
            let body = format!("{n:09}");
            let full = Isbn10Checksum.calculate(&body).unwrap();
            assert!(Isbn10Checksum.is_valid_match(&full), "{full}");
        }
    }
}
