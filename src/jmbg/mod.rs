use crate::checksum::{CheckDigitCalculator, JmbgChecksum, Validator};
use crate::observability::metrics::ValidationMetrics;
use crate::validator::{gate_and_record, IdentifierValidator};
use crate::{IdentifierKind, InputError};
use lazy_static::lazy_static;
use regex::Regex;

const LENGTH: usize = 13;

lazy_static! {
    static ref DAY_OF_BIRTH_REGEX: Regex = Regex::new("^(0[1-9]|[12][0-9]|3[01])$").unwrap();
    static ref MONTH_OF_BIRTH_REGEX: Regex = Regex::new("^(0[1-9]|1[0-2])$").unwrap();
    static ref YEAR_OF_BIRTH_REGEX: Regex = Regex::new("^[0-9]{3}$").unwrap();
    static ref POLITICAL_REGION_REGEX: Regex = Regex::new("^[0-9]{2}$").unwrap();
    static ref SERIAL_NUMBER_REGEX: Regex = Regex::new("^[0-9]{3}$").unwrap();
    static ref CHECK_DIGIT_REGEX: Regex = Regex::new("^[0-9]$").unwrap();
}

/// The fields of a JMBG, in order: DD MM YYY RR BBB K.
const FIELDS: [(usize, usize, Field); 6] = [
    (0, 2, Field::DayOfBirth),
    (2, 4, Field::MonthOfBirth),
    (4, 7, Field::YearOfBirth),
    (7, 9, Field::PoliticalRegion),
    (9, 12, Field::SerialNumber),
    (12, 13, Field::CheckDigit),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    DayOfBirth,
    MonthOfBirth,
    /// Last three digits of the year
    YearOfBirth,
    PoliticalRegion,
    /// 000-499 for men, 500-999 for women
    SerialNumber,
    CheckDigit,
}

impl Field {
    fn regex(&self) -> &'static Regex {
        match self {
            Field::DayOfBirth => &DAY_OF_BIRTH_REGEX,
            Field::MonthOfBirth => &MONTH_OF_BIRTH_REGEX,
            Field::YearOfBirth => &YEAR_OF_BIRTH_REGEX,
            Field::PoliticalRegion => &POLITICAL_REGION_REGEX,
            Field::SerialNumber => &SERIAL_NUMBER_REGEX,
            Field::CheckDigit => &CHECK_DIGIT_REGEX,
        }
    }
}

/// Checks every field of a JMBG. The check digit is only required to be a digit.
pub fn is_structurally_valid(jmbg: &str) -> bool {
    // ASCII guarantees the field offsets are char boundaries
    if jmbg.len() != LENGTH || !jmbg.is_ascii() {
        return false;
    }
    FIELDS
        .iter()
        .all(|(start, end, field)| field.regex().is_match(&jmbg[*start..*end]))
}

/// Validates the Serbian Unique Master Citizen Number (JMBG).
///
/// https://en.wikipedia.org/wiki/Unique_Master_Citizen_Number
#[derive(Debug, Clone, Copy, Default)]
pub struct JmbgValidator;

impl JmbgValidator {
    /// Returns a valid JMBG, assuming every digit before the check digit is correct,
    /// or `None` if the input is not structurally a JMBG.
    pub fn validate<'a>(&self, jmbg: impl Into<Option<&'a str>>) -> Result<Option<String>, InputError> {
        gate_and_record(
            IdentifierKind::Jmbg,
            jmbg.into(),
            &ValidationMetrics::default(),
            |jmbg| {
                if !is_structurally_valid(jmbg) {
                    return (None, false);
                }
                let repaired = JmbgChecksum.calculate(&jmbg[..LENGTH - 1]);
                let valid = repaired.as_deref() == Some(jmbg);
                (repaired, valid)
            },
        )
    }
}

impl IdentifierValidator for JmbgValidator {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Jmbg
    }

    fn check(&self, jmbg: &str) -> bool {
        is_structurally_valid(jmbg) && JmbgChecksum.is_valid_match(jmbg)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::InputErrorKind;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    #[test]
    fn test_valid_jmbg() {
        for jmbg in ["0101006500006", "1212995504350", "3112999999992"] {
            println!("testing for input {jmbg}");
            assert_eq!(JmbgValidator.is_valid(jmbg), Ok(true));
        }
    }

    #[test]
    fn test_invalid_jmbg() {
        let invalid_jmbgs = vec![
            "12345678901x3",
            "123",
            "abcdefghijk",
            "1234567890123",
            // day 00 and 32
            "0001006500006",
            "3201006500006",
            // month 13
            "0113006500006",
            // wrong check digit
            "0101006500007",
            // separators are not accepted
            "01-01-006-50-000-6",
            // 13 chars but not ASCII
            "010100650000٦",
        ];
        for jmbg in invalid_jmbgs {
            println!("testing for input {jmbg}");
            assert_eq!(JmbgValidator.is_valid(jmbg), Ok(false));
        }
    }

    #[test]
    fn null_and_empty_jmbgs_are_errors() {
        let err = JmbgValidator.is_valid(None).unwrap_err();
        assert_eq!(err.kind, InputErrorKind::Missing);
        assert_eq!(err.to_string(), "JMBG cannot be null");

        let err = JmbgValidator.is_valid("").unwrap_err();
        assert_eq!(err.kind, InputErrorKind::Empty);
        assert_eq!(err.to_string(), "JMBG cannot be empty");

        assert!(JmbgValidator.validate(None).is_err());
    }

    #[test]
    fn validate_repairs_the_check_digit() {
        assert_eq!(
            JmbgValidator.validate("0101006500007"),
            Ok(Some("0101006500006".to_string()))
        );
        assert_eq!(
            JmbgValidator.validate("0101006500006"),
            Ok(Some("0101006500006".to_string()))
        );
        assert_eq!(JmbgValidator.validate("3201006500006"), Ok(None));
        assert_eq!(JmbgValidator.validate("010100650000x"), Ok(None));
        assert_eq!(JmbgValidator.validate("123"), Ok(None));
    }

    #[test]
    fn field_boundaries() {
        assert!(is_structurally_valid("3112999999990"));
        assert!(is_structurally_valid("0101000000000"));
        assert!(!is_structurally_valid("3112999999 90"));
        assert!(!is_structurally_valid("31129999999900"));
    }

    #[test]
    fn validate_records_validation_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            JmbgValidator.validate(None).unwrap_err();
            JmbgValidator.validate("0101006500007").unwrap();
            JmbgValidator.validate("123").unwrap();
            JmbgValidator.validate("0101006500006").unwrap();
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let counter = |name: &'static str, label: (&'static str, &'static str)| {
            let key = Key::from_parts(
                name,
                vec![Label::new("identifier", "jmbg"), Label::new(label.0, label.1)],
            );
            snapshot
                .get(&CompositeKey::new(Counter, key))
                .map(|(_, _, value)| match value {
                    DebugValue::Counter(v) => DebugValue::Counter(*v),
                    DebugValue::Gauge(v) => DebugValue::Gauge(*v),
                    DebugValue::Histogram(v) => DebugValue::Histogram(v.clone()),
                })
        };

        assert_eq!(
            counter("validation.input_error", ("reason", "missing")),
            Some(DebugValue::Counter(1))
        );
        assert_eq!(
            counter("validation.checked", ("result", "invalid")),
            Some(DebugValue::Counter(2))
        );
        assert_eq!(
            counter("validation.checked", ("result", "valid")),
            Some(DebugValue::Counter(1))
        );
    }
}
