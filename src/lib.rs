// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod config;
mod credit_card;
mod email;
mod error;
mod iban;
mod identifier;
mod input;
mod isbn;
mod jmbg;
mod observability;
mod validator;

// This is the public API of the checkmate library
pub use checksum::{
    CheckDigitCalculator, ChecksumAlgorithm, ChecksumDescriptor, Isbn10Checksum, Isbn13Checksum,
    JmbgChecksum, LuhnChecksum, Mod97_10Checksum, Validator,
};
pub use config::{CompiledValidationRule, ValidationRuleConfig};
pub use credit_card::{canonicalize as canonicalize_card_number, CreditCardValidator};
pub use email::EmailValidator;
pub use error::{InputError, InputErrorKind};
pub use iban::{
    canonicalize as canonicalize_iban, country_table, find_country_pattern,
    transform as transform_iban, CountryPattern, IbanValidator, COUNTRY_PATTERNS,
};
pub use identifier::IdentifierKind;
pub use isbn::{canonicalize as canonicalize_isbn, detect_format, IsbnFormat, IsbnValidator};
pub use jmbg::{is_structurally_valid as is_structurally_valid_jmbg, JmbgValidator};
pub use observability::labels::Labels;
pub use observability::metrics::ValidationMetrics;
pub use validator::IdentifierValidator;
