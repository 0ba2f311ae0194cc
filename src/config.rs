use crate::observability::metrics::ValidationMetrics;
use crate::{IdentifierKind, InputError, Labels};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

/// Serializable description of a validation: which identifier class to check and
/// which labels to attach to the emitted metrics.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValidationRuleConfig {
    pub identifier: IdentifierKind,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl ValidationRuleConfig {
    pub fn new(identifier: IdentifierKind) -> Self {
        Self {
            identifier,
            labels: Labels::empty(),
        }
    }

    pub fn identifier(&self, identifier: IdentifierKind) -> Self {
        self.mutate_clone(|x| x.identifier = identifier)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> CompiledValidationRule {
        CompiledValidationRule {
            identifier: self.identifier,
            metrics: ValidationMetrics::new(&self.labels),
        }
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

/// A configured validator, ready to be shared across threads.
#[derive(Clone, Debug)]
pub struct CompiledValidationRule {
    identifier: IdentifierKind,
    metrics: ValidationMetrics,
}

impl CompiledValidationRule {
    pub fn identifier(&self) -> IdentifierKind {
        self.identifier
    }

    pub fn is_valid<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<bool, InputError> {
        self.identifier
            .validator()
            .validate_input_with_metrics(input.into(), &self.metrics)
    }
}
