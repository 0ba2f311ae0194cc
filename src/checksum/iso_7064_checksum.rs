use crate::checksum::{
    to_values, CheckDigitCalculator, ChecksumDescriptor, Validator, DECIMAL_CHARSET,
};

/// ISO 7064 MOD 97-10 over a purely decimal string, as used by transformed IBANs.
///
/// The computation streams over the digits so that arbitrarily long inputs never
/// require big integer arithmetic.
pub struct Mod97_10Checksum;

impl Mod97_10Checksum {
    pub const DESCRIPTOR: ChecksumDescriptor = ChecksumDescriptor::new(97, 10, DECIMAL_CHARSET, true);
}

impl Validator for Mod97_10Checksum {
    fn is_valid_match(&self, canonical: &str) -> bool {
        match Self::DESCRIPTOR.split_check_digits(canonical) {
            Some((body, _)) => self.calculate(body).as_deref() == Some(canonical),
            None => false,
        }
    }
}

impl CheckDigitCalculator for Mod97_10Checksum {
    fn calculate(&self, body: &str) -> Option<String> {
        let descriptor = &Self::DESCRIPTOR;
        let m = descriptor.modulus();
        let r = descriptor.radix();

        let p = to_values(descriptor, body)?
            .into_iter()
            .fold(0, |p, value| ((p + value) * r) % m);
        // one more shift for the check digit positions
        let p = (p * r) % m;

        let checksum = (m - p + 1) % m;
        let first = descriptor.glyph(checksum / r)?;
        let second = descriptor.glyph(checksum % r)?;

        let mut result = String::with_capacity(body.len() + 2);
        result.push_str(body);
        result.push(first);
        result.push(second);
        Some(result)
    }
}
