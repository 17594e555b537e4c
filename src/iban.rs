use crate::checksum::{check_digits_for, mod97, EXPECTED_REMAINDER};
use crate::splitter::{split_iban, IbanParts};
use crate::translator::{translate_to_numeric, NumericString, TranslationError};
use strum::Display;
use thiserror::Error;

const CHECK_DIGITS_LENGTH: usize = 2;
const COUNTRY_CODE_LENGTH: usize = 2;

/// The IBAN segment a character was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Segment {
    #[strum(serialize = "country code")]
    CountryCode,
    #[strum(serialize = "BBAN")]
    Bban,
}

/// Why a candidate is not a valid IBAN.
///
/// [is_valid_iban] collapses all of these into `false`; [check_iban] returns the first one hit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IbanError {
    #[error("an IBAN needs at least 5 characters besides whitespace")]
    TooShort,

    #[error("{character:?} in the {segment} is not a digit or an upper-case ASCII letter")]
    UnmappableCharacter { character: char, segment: Segment },

    #[error("check digits {0:?} are not numeric")]
    NonNumericChecksum(String),

    #[error("country code {0:?} must be exactly two characters")]
    InvalidCountryCode(String),

    #[error("the check value leaves a remainder of {remainder} modulo 97 instead of 1")]
    ChecksumMismatch { remainder: u32 },
}

impl IbanError {
    fn from_translation(err: TranslationError, segment: Segment) -> Self {
        match err {
            TranslationError::UnmappableCharacter(character) => {
                IbanError::UnmappableCharacter { character, segment }
            }
        }
    }
}

fn translate_segment(input: &str, segment: Segment) -> Result<NumericString, IbanError> {
    translate_to_numeric(input).map_err(|err| IbanError::from_translation(err, segment))
}

/// Returns true if `raw` is a structurally valid IBAN whose check digits pass ISO 7064
/// MOD 97-10. Whitespace anywhere in the input is ignored.
///
/// Country-specific BBAN formats are not checked.
pub fn is_valid_iban(raw: &str) -> bool {
    check_iban(raw).is_ok()
}

/// Same as [is_valid_iban], but reports why the candidate was rejected.
pub fn check_iban(raw: &str) -> Result<(), IbanError> {
    check_parts(&split_iban(raw))
}

pub(crate) fn check_parts(parts: &IbanParts) -> Result<(), IbanError> {
    if parts.is_empty() {
        return Err(IbanError::TooShort);
    }

    let country_code = translate_segment(&parts.country_code, Segment::CountryCode)?;

    // Parsing rejects empty and alphabetic check digits but lets a sign through, so the
    // digits are translated as well.
    let non_numeric = || IbanError::NonNumericChecksum(parts.check_sum.clone());
    parts.check_sum.parse::<u8>().map_err(|_| non_numeric())?;
    let check_sum = translate_to_numeric(&parts.check_sum).map_err(|_| non_numeric())?;

    let bban = translate_segment(&parts.bban, Segment::Bban)?;

    // ISO 7064 rearrangement: country code and check digits move behind the BBAN.
    let check_value = NumericString::concat(&[&bban, &country_code, &check_sum]);
    match mod97(&check_value) {
        EXPECTED_REMAINDER => Ok(()),
        remainder => Err(IbanError::ChecksumMismatch { remainder }),
    }
}

/// Computes the two check digits of the IBAN made of `country_code` and `bban`.
///
/// Whitespace in `bban` is ignored. `country_code + check digits + bban` always passes
/// [is_valid_iban].
pub fn compute_check_digits(country_code: &str, bban: &str) -> Result<String, IbanError> {
    if country_code.chars().count() != COUNTRY_CODE_LENGTH {
        return Err(IbanError::InvalidCountryCode(country_code.to_owned()));
    }
    let bban: String = bban.chars().filter(|c| !c.is_whitespace()).collect();
    if bban.is_empty() {
        return Err(IbanError::TooShort);
    }

    let country_code = translate_segment(country_code, Segment::CountryCode)?;
    let bban = translate_segment(&bban, Segment::Bban)?;
    let placeholder = NumericString::zeros(CHECK_DIGITS_LENGTH);

    let check_digits = check_digits_for(&NumericString::concat(&[
        &bban,
        &country_code,
        &placeholder,
    ]));
    Ok(format!("{:0width$}", check_digits, width = CHECK_DIGITS_LENGTH))
}

#[cfg(test)]
mod test {
    use crate::iban::*;

    #[test]
    fn valid_ibans() {
        let valid_ibans = vec![
            "DE89370400440532013000",
            "DE89 3704 0044 0532 0130 00",
            "GB29 NWBK 6016 1331 9268 19",
            "AT611904300234573201",
            "CH9300762011623852957",
        ];
        for iban in valid_ibans {
            assert!(is_valid_iban(iban), "{} should be valid", iban);
            assert_eq!(check_iban(iban), Ok(()));
        }
    }

    #[test]
    fn too_short() {
        assert!(!is_valid_iban("AB12"));
        assert_eq!(check_iban("AB12"), Err(IbanError::TooShort));
        assert_eq!(check_iban(" A B 1 2 "), Err(IbanError::TooShort));
        assert_eq!(check_iban(""), Err(IbanError::TooShort));
    }

    #[test]
    fn wrong_checksum() {
        assert_eq!(
            check_iban("GB29 RBOS 6016 1331 9268 19"),
            Err(IbanError::ChecksumMismatch { remainder: 41 })
        );
        assert_eq!(
            check_iban("ES81 2310 0001 1800 0001 2345"),
            Err(IbanError::ChecksumMismatch { remainder: 2 })
        );
    }

    #[test]
    fn unmappable_character() {
        assert_eq!(
            check_iban("DE89 3704 0Ä44 0532 0130 00"),
            Err(IbanError::UnmappableCharacter {
                character: 'Ä',
                segment: Segment::Bban
            })
        );
        assert_eq!(
            check_iban("gb29 NWBK 6016 1331 9268 19"),
            Err(IbanError::UnmappableCharacter {
                character: 'g',
                segment: Segment::CountryCode
            })
        );
    }

    #[test]
    fn non_numeric_checksum() {
        assert_eq!(
            check_iban("ABA51"),
            Err(IbanError::NonNumericChecksum("A5".to_string()))
        );
        assert_eq!(
            check_iban("DE+9370400440532013000"),
            Err(IbanError::NonNumericChecksum("+9".to_string()))
        );
        assert_eq!(
            check_iban("DE-9370400440532013000"),
            Err(IbanError::NonNumericChecksum("-9".to_string()))
        );
    }

    #[test]
    fn country_code_is_checked_before_checksum() {
        assert_eq!(
            check_iban("ÄBCD12345"),
            Err(IbanError::UnmappableCharacter {
                character: 'Ä',
                segment: Segment::CountryCode
            })
        );
    }

    #[test]
    fn no_country_specific_format() {
        // Passes MOD 97-10 even though the Albanian BBAN format requires digits only
        assert!(is_valid_iban("AL84212110090000AB023569874"));
        // Shortest splittable candidate
        assert!(is_valid_iban("AB451"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            IbanError::UnmappableCharacter {
                character: 'Ä',
                segment: Segment::Bban
            }
            .to_string(),
            "'Ä' in the BBAN is not a digit or an upper-case ASCII letter"
        );
        assert_eq!(
            IbanError::ChecksumMismatch { remainder: 41 }.to_string(),
            "the check value leaves a remainder of 41 modulo 97 instead of 1"
        );
    }

    #[test]
    fn compute_check_digits_of_known_ibans() {
        assert_eq!(
            compute_check_digits("DE", "370400440532013000"),
            Ok("89".to_string())
        );
        assert_eq!(
            compute_check_digits("GB", "NWBK 6016 1331 9268 19"),
            Ok("29".to_string())
        );
        assert_eq!(
            compute_check_digits("AT", "1904300234573201"),
            Ok("61".to_string())
        );
    }

    #[test]
    fn compute_check_digits_pads_to_two_digits() {
        let check_digits = compute_check_digits("CH", "00762011623852957").unwrap();
        assert_eq!(check_digits, "93");
        for bban in ["1", "12", "123456", "0000000000"] {
            let check_digits = compute_check_digits("NL", bban).unwrap();
            assert_eq!(check_digits.len(), 2);
            assert!(is_valid_iban(&format!("NL{}{}", check_digits, bban)));
        }
    }

    #[test]
    fn compute_check_digits_rejects_bad_input() {
        assert_eq!(
            compute_check_digits("DEU", "370400440532013000"),
            Err(IbanError::InvalidCountryCode("DEU".to_string()))
        );
        assert_eq!(compute_check_digits("DE", "   "), Err(IbanError::TooShort));
        assert_eq!(
            compute_check_digits("de", "370400440532013000"),
            Err(IbanError::UnmappableCharacter {
                character: 'd',
                segment: Segment::CountryCode
            })
        );
    }
}
