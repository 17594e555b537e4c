// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod alphabet;
mod checksum;
mod config;
mod iban;
mod observability;
mod secondary_validation;
mod splitter;
mod translator;

// This is the public API of the IBAN check library
pub use alphabet::ALPHABET;
pub use checksum::{is_valid_check_value, mod97};
pub use config::IbanCheckerConfig;
pub use iban::{check_iban, compute_check_digits, is_valid_iban, IbanError, Segment};
pub use observability::labels::Labels;
pub use observability::metrics::VALIDATIONS;
pub use secondary_validation::{IbanChecker, Validator};
pub use splitter::{split_iban, IbanParts, MIN_IBAN_LENGTH};
pub use translator::{translate_char, translate_to_numeric, NumericString, TranslationError};
