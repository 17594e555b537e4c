use metrics::{IntoLabels, Label};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Holder of metric labels keyed by name, providing some methods to easily clone and add new
/// labels to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    /// Clone the actual [Labels] with additional key-value labels. An additional label replaces
    /// an existing one with the same key.
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(impl Into<String> + Clone, impl Into<String> + Clone)],
    ) -> Labels {
        let mut labels = self.clone();
        labels.extend(additional_labels);
        labels
    }

    pub fn new(labels: &[(impl Into<String> + Clone, impl Into<String> + Clone)]) -> Self {
        let mut new_labels = Labels::default();
        new_labels.extend(labels);
        new_labels
    }

    fn extend(&mut self, labels: &[(impl Into<String> + Clone, impl Into<String> + Clone)]) {
        self.0.extend(
            labels
                .iter()
                .cloned()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
            .into_iter()
            .map(|(key, value)| Label::new(key, value))
            .collect()
    }
}
