use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

/// Every supported IBAN shape, country code(s) included. Each entry covers the whole
/// whitespace-free, uppercased IBAN including its two check digits.
///
/// Country codes are mutually exclusive between entries so the order is not observable.
pub const COUNTRY_PATTERNS: &[&str] = &[
    r"AD\d{10}[A-Z0-9]{12}",                               // Andorra
    r"AE\d{21}",                                           // United Arab Emirates
    r"AL\d{10}[A-Z0-9]{16}",                               // Albania
    r"AT\d{18}",                                           // Austria
    r"AZ\d{2}[A-Z]{4}[A-Z0-9]{20}",                        // Azerbaijan
    r"BA\d{18}",                                           // Bosnia and Herzegovina
    r"BE\d{14}",                                           // Belgium
    r"BG\d{2}[A-Z]{4}\d{6}[A-Z0-9]{8}",                    // Bulgaria
    r"BH\d{2}[A-Z]{4}[A-Z0-9]{14}",                        // Bahrain
    r"BI\d{25}",                                           // Burundi
    r"BR\d{25}[A-Z][A-Z0-9]",                              // Brazil
    r"BY\d{2}[A-Z0-9]{4}\d{4}[A-Z0-9]{16}",                // Belarus
    r"CH\d{7}[A-Z0-9]{12}",                                // Switzerland
    r"CR\d{20}",                                           // Costa Rica
    r"CY\d{10}[A-Z0-9]{16}",                               // Cyprus
    r"CZ\d{22}",                                           // Czechia
    r"DE\d{20}",                                           // Germany
    r"DJ\d{25}",                                           // Djibouti
    r"DK\d{16}",                                           // Denmark
    r"DO\d{2}[A-Z0-9]{4}\d{20}",                           // Dominican Republic
    r"EE\d{18}",                                           // Estonia
    r"EG\d{27}",                                           // Egypt
    r"ES\d{22}",                                           // Spain
    r"(FI|AX)\d{16}",                                      // Finland, Åland Islands
    r"FO\d{16}",                                           // Faroe Islands
    r"(FR|BL|GF|GP|MF|MQ|NC|PF|PM|RE|TF|WF|YT)\d{12}[A-Z0-9]{11}\d{2}", // France and territories
    r"GB\d{2}[A-Z]{4}\d{14}",                              // United Kingdom
    r"GE\d{2}[A-Z]{2}\d{16}",                              // Georgia
    r"GI\d{2}[A-Z]{4}[A-Z0-9]{15}",                        // Gibraltar
    r"GL\d{16}",                                           // Greenland
    r"GR\d{9}[A-Z0-9]{16}",                                // Greece
    r"GT\d{2}[A-Z0-9]{24}",                                // Guatemala
    r"HR\d{19}",                                           // Croatia
    r"HU\d{26}",                                           // Hungary
    r"IE\d{2}[A-Z]{4}\d{14}",                              // Ireland
    r"IL\d{21}",                                           // Israel
    r"IQ\d{2}[A-Z]{4}\d{15}",                              // Iraq
    r"IS\d{24}",                                           // Iceland
    r"IT\d{2}[A-Z]\d{10}[A-Z0-9]{12}",                     // Italy
    r"JO\d{2}[A-Z]{4}\d{4}[A-Z0-9]{18}",                   // Jordan
    r"KW\d{2}[A-Z]{4}[A-Z0-9]{22}",                        // Kuwait
    r"KZ\d{5}[A-Z0-9]{13}",                                // Kazakhstan
    r"LB\d{6}[A-Z0-9]{20}",                                // Lebanon
    r"LC\d{2}[A-Z]{4}[A-Z0-9]{24}",                        // Saint Lucia
    r"LI\d{7}[A-Z0-9]{12}",                                // Liechtenstein
    r"LT\d{18}",                                           // Lithuania
    r"LU\d{5}[A-Z0-9]{13}",                                // Luxembourg
    r"LV\d{2}[A-Z]{4}[A-Z0-9]{13}",                        // Latvia
    r"LY\d{23}",                                           // Libya
    r"MC\d{12}[A-Z0-9]{11}\d{2}",                          // Monaco
    r"MD\d{2}[A-Z0-9]{20}",                                // Moldova
    r"ME\d{20}",                                           // Montenegro
    r"MK\d{5}[A-Z0-9]{10}\d{2}",                           // North Macedonia
    r"MR\d{25}",                                           // Mauritania
    r"MT\d{2}[A-Z]{4}\d{5}[A-Z0-9]{18}",                   // Malta
    r"MU\d{2}[A-Z]{4}\d{19}[A-Z]{3}",                      // Mauritius
    r"NL\d{2}[A-Z]{4}\d{10}",                              // Netherlands
    r"NO\d{13}",                                           // Norway
    r"PK\d{2}[A-Z]{4}[A-Z0-9]{16}",                        // Pakistan
    r"PL\d{26}",                                           // Poland
    r"PS\d{2}[A-Z]{4}[A-Z0-9]{21}",                        // Palestine
    r"PT\d{23}",                                           // Portugal
    r"QA\d{2}[A-Z]{4}[A-Z0-9]{21}",                        // Qatar
    r"RO\d{2}[A-Z]{4}[A-Z0-9]{16}",                        // Romania
    r"RS\d{20}",                                           // Serbia
    r"RU\d{31}",                                           // Russia
    r"SA\d{4}[A-Z0-9]{18}",                                // Saudi Arabia
    r"SC\d{2}[A-Z]{4}\d{20}[A-Z]{3}",                      // Seychelles
    r"SD\d{16}",                                           // Sudan
    r"SE\d{22}",                                           // Sweden
    r"SI\d{17}",                                           // Slovenia
    r"SK\d{22}",                                           // Slovakia
    r"SM\d{2}[A-Z]\d{10}[A-Z0-9]{12}",                     // San Marino
    r"ST\d{23}",                                           // Sao Tome and Principe
    r"SV\d{2}[A-Z]{4}\d{20}",                              // El Salvador
    r"TL\d{21}",                                           // Timor-Leste
    r"TN\d{22}",                                           // Tunisia
    r"TR\d{8}[A-Z0-9]{16}",                                // Turkey
    r"UA\d{8}[A-Z0-9]{19}",                                // Ukraine
    r"VA\d{20}",                                           // Vatican City State
    r"VG\d{2}[A-Z]{4}\d{16}",                              // Virgin Islands
    r"XK\d{18}",                                           // Kosovo
];

/// A compiled entry of [`COUNTRY_PATTERNS`].
pub struct CountryPattern {
    source: &'static str,
    regex: Regex,
}

impl CountryPattern {
    fn compile(source: &'static str) -> Result<Self, regex::Error> {
        // `\d` must only match ASCII digits, everything downstream assumes a decimal charset
        let regex = RegexBuilder::new(&format!("^(?:{source})$"))
            .unicode(false)
            .build()?;
        Ok(Self { source, regex })
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn is_match(&self, iban: &str) -> bool {
        self.regex.is_match(iban)
    }

    /// The two-letter country codes this pattern accepts.
    pub fn country_codes(&self) -> Vec<&'static str> {
        let prefix = match self.source.strip_prefix('(') {
            Some(group) => group.split(')').next().unwrap_or_default(),
            None => self.source.get(..2).unwrap_or_default(),
        };
        prefix.split('|').collect()
    }
}

lazy_static! {
    static ref COUNTRY_TABLE: Vec<CountryPattern> = COUNTRY_PATTERNS
        .iter()
        .map(|source| CountryPattern::compile(source).unwrap())
        .collect();
    static ref COUNTRY_INDEX: HashMap<&'static str, usize> = COUNTRY_TABLE
        .iter()
        .enumerate()
        .flat_map(|(index, pattern)| {
            pattern
                .country_codes()
                .into_iter()
                .map(move |code| (code, index))
        })
        .collect();
}

pub fn country_table() -> &'static [CountryPattern] {
    &COUNTRY_TABLE
}

/// Finds the pattern matching the whole canonical IBAN, looked up by its country code.
pub fn find_country_pattern(iban: &str) -> Option<&'static CountryPattern> {
    let index = *COUNTRY_INDEX.get(iban.get(..2)?)?;
    let pattern = &COUNTRY_TABLE[index];
    pattern.is_match(iban).then_some(pattern)
}
