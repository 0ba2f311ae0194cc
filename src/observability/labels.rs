use metrics::{IntoLabels, Label};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Holder of metric labels providing some methods to easily clone and add new labels to it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    pub fn empty() -> Self {
        Labels(BTreeMap::new())
    }

    pub fn new(labels: &[(impl Into<String> + Clone, impl Into<String> + Clone)]) -> Self {
        Labels(
            labels
                .iter()
                .cloned()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Clone the actual [Labels] with additional key-value labels. Keys already present are overridden.
    pub fn clone_with_labels(&self, additional_labels: Labels) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.0);
        Labels(labels)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
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
