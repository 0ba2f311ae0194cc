use crate::credit_card::CreditCardValidator;
use crate::email::EmailValidator;
use crate::iban::IbanValidator;
use crate::isbn::IsbnValidator;
use crate::jmbg::JmbgValidator;
use crate::validator::IdentifierValidator;
use crate::InputError;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// The identifier classes that can be validated.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr,
)]
#[serde(tag = "type")]
#[strum(serialize_all = "snake_case")]
pub enum IdentifierKind {
    CreditCard,
    Iban,
    Isbn,
    Jmbg,
    Email,
}

impl IdentifierKind {
    /// Name used in metric labels, e.g. `credit_card`.
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// The message carried by [`InputError`] when the input is absent.
    pub fn missing_message(&self) -> &'static str {
        match self {
            IdentifierKind::CreditCard => "The credit card number cannot be null",
            IdentifierKind::Iban => "The IBAN cannot be null",
            IdentifierKind::Isbn => "The ISBN cannot be null",
            IdentifierKind::Jmbg => "JMBG cannot be null",
            IdentifierKind::Email => "Email cannot be null",
        }
    }

    /// The message carried by [`InputError`] when the input is whitespace only.
    pub fn empty_message(&self) -> &'static str {
        match self {
            IdentifierKind::CreditCard => "The credit card cannot be an empty string",
            IdentifierKind::Iban => "The IBAN cannot be an empty string",
            IdentifierKind::Isbn => "The ISBN cannot be an empty string",
            IdentifierKind::Jmbg => "JMBG cannot be empty",
            IdentifierKind::Email => "Email cannot be an empty string",
        }
    }

    pub fn validator(&self) -> &'static dyn IdentifierValidator {
        match self {
            IdentifierKind::CreditCard => &CreditCardValidator,
            IdentifierKind::Iban => &IbanValidator,
            IdentifierKind::Isbn => &IsbnValidator,
            IdentifierKind::Jmbg => &JmbgValidator,
            IdentifierKind::Email => &EmailValidator,
        }
    }

    pub fn is_valid<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<bool, InputError> {
        self.validator().validate_input(input.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::InputErrorKind;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_are_snake_case() {
        let labels: Vec<&str> = IdentifierKind::iter().map(|kind| kind.label()).collect();
        assert_eq!(labels, vec!["credit_card", "iban", "isbn", "jmbg", "email"]);
    }

    #[test]
    fn should_deserialize_tagged_kind() {
        let kind: IdentifierKind = serde_json::from_str(r#"{"type": "CreditCard"}"#).unwrap();
        assert_eq!(kind, IdentifierKind::CreditCard);

        let json = serde_json::to_string(&IdentifierKind::Jmbg).unwrap();
        assert_eq!(json, r#"{"type":"Jmbg"}"#);

        assert!(serde_json::from_str::<IdentifierKind>(r#"{"type": "Passport"}"#).is_err());
    }

    #[test]
    fn dispatches_to_the_matching_validator() {
        let cases = [
            (IdentifierKind::CreditCard, "4111-1111-1111-1111"),
            (IdentifierKind::Iban, "DE89370400440532013000"),
            (IdentifierKind::Isbn, "0-596-52068-9"),
            (IdentifierKind::Jmbg, "0101006500006"),
            (IdentifierKind::Email, "someone@example.com"),
        ];
        for (kind, input) in cases {
            assert_eq!(kind.validator().kind(), kind);
            assert_eq!(kind.is_valid(input), Ok(true), "{kind:?} rejected {input}");
            for (other, _) in cases.iter().filter(|(other, _)| *other != kind) {
                if *other == IdentifierKind::Email {
                    continue;
                }
                assert_eq!(other.is_valid(input), Ok(false), "{other:?} accepted {input}");
            }
        }
    }

    #[test]
    fn every_kind_gates_missing_and_empty_input() {
        for kind in IdentifierKind::iter() {
            let missing = kind.is_valid(None).unwrap_err();
            assert_eq!(missing.kind, InputErrorKind::Missing);
            assert_eq!(missing.identifier, kind);
            assert_eq!(missing.to_string(), kind.missing_message());

            let empty = kind.is_valid(" \t\n").unwrap_err();
            assert_eq!(empty.kind, InputErrorKind::Empty);
            assert_eq!(empty.to_string(), kind.empty_message());
        }
    }
}
