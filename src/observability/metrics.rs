use crate::{IdentifierKind, InputError, Labels};
use metrics::counter;

const IDENTIFIER: &str = "identifier";
const RESULT: &str = "result";
const REASON: &str = "reason";

/// Counters emitted by the validator façades.
///
/// Counters are resolved when recorded so that whichever recorder is installed at
/// call time receives them.
#[derive(Clone, Debug, Default)]
pub struct ValidationMetrics {
    labels: Labels,
}

impl ValidationMetrics {
    pub fn new(labels: &Labels) -> Self {
        Self {
            labels: labels.clone(),
        }
    }

    pub fn record_outcome(&self, identifier: IdentifierKind, valid: bool) {
        let result = if valid { "valid" } else { "invalid" };
        counter!(
            "validation.checked",
            self.labels.clone_with_labels(Labels::new(&[
                (IDENTIFIER, identifier.label()),
                (RESULT, result),
            ]))
        )
        .increment(1);
    }

    pub fn record_input_error(&self, error: &InputError) {
        counter!(
            "validation.input_error",
            self.labels.clone_with_labels(Labels::new(&[
                (IDENTIFIER, error.identifier.label()),
                (REASON, error.kind.label()),
            ]))
        )
        .increment(1);
    }
}
