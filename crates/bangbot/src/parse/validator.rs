//! Required-field enforcement.

use crate::dispatch::ValidationError;
use crate::schema::ArgumentDefinition;

/// Fails when a required argument has no value.
///
/// The pipeline calls this twice per argument: on the raw value after the
/// default is applied, and again after sanitization, because resolution can
/// turn a present value into `None`.
///
/// # Errors
///
/// Returns [`ValidationError::missing_required`] when `value` is `None` and
/// the argument is required.
pub fn validate<T>(
    key: &str,
    argument: &ArgumentDefinition,
    value: Option<&T>,
) -> Result<(), ValidationError> {
    if value.is_none() && argument.required {
        return Err(ValidationError::missing_required(key));
    }
    Ok(())
}
