use crate::config::IbanCheckerConfig;
use crate::iban::{check_parts, IbanError};
use crate::observability::metrics::CheckerMetrics;
use crate::secondary_validation::Validator;
use crate::splitter::split_iban_with;

/// IBAN validation with configurable input normalization, reporting every outcome to metrics.
pub struct IbanChecker {
    separators: Vec<char>,
    case_insensitive: bool,
    metrics: CheckerMetrics,
}

impl IbanChecker {
    pub fn new(config: &IbanCheckerConfig) -> Self {
        IbanChecker {
            separators: config.separators.clone(),
            case_insensitive: config.case_insensitive,
            metrics: CheckerMetrics::new(&config.labels),
        }
    }

    /// Validates `candidate` without recording metrics.
    pub fn check(&self, candidate: &str) -> Result<(), IbanError> {
        let parts = split_iban_with(candidate, |c| {
            c.is_whitespace() || self.separators.contains(&c)
        });
        if self.case_insensitive {
            check_parts(&parts.to_ascii_uppercase())
        } else {
            check_parts(&parts)
        }
    }
}

impl Default for IbanChecker {
    fn default() -> Self {
        IbanChecker::new(&IbanCheckerConfig::default())
    }
}

impl Validator for IbanChecker {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let result = self.check(candidate);
        self.metrics.record(&result);
        result.is_ok()
    }
}
