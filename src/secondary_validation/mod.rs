mod iban_checker;

pub use crate::secondary_validation::iban_checker::IbanChecker;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}
