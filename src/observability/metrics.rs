use crate::iban::IbanError;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

pub const VALIDATIONS: &str = "iban.validations";

const OUTCOME: &str = "outcome";

/// Counts the validations done by one checker, labelled by outcome.
pub struct CheckerMetrics {
    pub valid: Counter,
    pub too_short: Counter,
    pub unmappable_character: Counter,
    pub non_numeric_checksum: Counter,
    pub invalid_country_code: Counter,
    pub checksum_mismatch: Counter,
}

fn outcome_counter(labels: &Labels, outcome: &str) -> Counter {
    counter!(
        VALIDATIONS,
        labels.clone_with_labels(&[(OUTCOME, outcome)])
    )
}

impl CheckerMetrics {
    pub fn new(labels: &Labels) -> Self {
        CheckerMetrics {
            valid: outcome_counter(labels, "valid"),
            too_short: outcome_counter(labels, "too_short"),
            unmappable_character: outcome_counter(labels, "unmappable_character"),
            non_numeric_checksum: outcome_counter(labels, "non_numeric_checksum"),
            invalid_country_code: outcome_counter(labels, "invalid_country_code"),
            checksum_mismatch: outcome_counter(labels, "checksum_mismatch"),
        }
    }

    pub fn record(&self, result: &Result<(), IbanError>) {
        let counter = match result {
            Ok(()) => &self.valid,
            Err(IbanError::TooShort) => &self.too_short,
            Err(IbanError::UnmappableCharacter { .. }) => &self.unmappable_character,
            Err(IbanError::NonNumericChecksum(_)) => &self.non_numeric_checksum,
            Err(IbanError::InvalidCountryCode(_)) => &self.invalid_country_code,
            Err(IbanError::ChecksumMismatch { .. }) => &self.checksum_mismatch,
        };
        counter.increment(1);
    }
}
