use crate::observability::labels::Labels;
use crate::secondary_validation::IbanChecker;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Configuration of an [IbanChecker].
///
/// The default configuration accepts exactly what [crate::is_valid_iban] accepts.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IbanCheckerConfig {
    /// Characters removed before splitting, on top of whitespace.
    pub separators: Vec<char>,
    /// Upper-case ASCII letters before translation.
    pub case_insensitive: bool,
    /// Extra labels attached to the checker's metrics.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub labels: Labels,
}

impl IbanCheckerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separators(&self, separators: Vec<char>) -> Self {
        self.mutate_clone(|x| x.separators = separators)
    }

    pub fn case_insensitive(&self, case_insensitive: bool) -> Self {
        self.mutate_clone(|x| x.case_insensitive = case_insensitive)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> IbanChecker {
        IbanChecker::new(self)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
