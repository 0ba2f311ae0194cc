use crate::input::require_input;
use crate::observability::metrics::ValidationMetrics;
use crate::{IdentifierKind, InputError};

/// Public entry point for one identifier class.
///
/// Implementors only provide [`IdentifierValidator::check`], which receives input that already
/// passed the missing/empty gate. The provided methods apply the gate and record metrics.
pub trait IdentifierValidator: Send + Sync {
    fn kind(&self) -> IdentifierKind;

    /// Structural and checksum checks on a non-blank input.
    fn check(&self, input: &str) -> bool;

    /// Same as [`IdentifierValidator::is_valid`], usable through a trait object.
    fn validate_input(&self, input: Option<&str>) -> Result<bool, InputError> {
        self.validate_input_with_metrics(input, &ValidationMetrics::default())
    }

    fn validate_input_with_metrics(
        &self,
        input: Option<&str>,
        metrics: &ValidationMetrics,
    ) -> Result<bool, InputError> {
        gate_and_record(self.kind(), input, metrics, |input| {
            let valid = self.check(input);
            (valid, valid)
        })
    }

    /// Returns `Ok(true)` iff the input passes the structural and checksum checks of its class.
    fn is_valid<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<bool, InputError>
    where
        Self: Sized,
    {
        self.validate_input(input.into())
    }
}

/// Runs `check` on non-blank input and records its outcome.
///
/// `check` returns the caller's result along with whether the input itself was valid.
/// Absent or blank input is recorded as an input error and never reaches `check`.
pub(crate) fn gate_and_record<T>(
    identifier: IdentifierKind,
    input: Option<&str>,
    metrics: &ValidationMetrics,
    check: impl FnOnce(&str) -> (T, bool),
) -> Result<T, InputError> {
    let input = require_input(input, identifier).map_err(|err| {
        metrics.record_input_error(&err);
        err
    })?;
    let (result, valid) = check(input);
    metrics.record_outcome(identifier, valid);
    Ok(result)
}
