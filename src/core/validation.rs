//! Transfer object validation
//!
//! Static constraints live on [`OrderDto`] as `validator` attributes; the
//! id-policy dependent checks are added here so callers get one aggregated
//! list of violations.

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::order::{IdPolicy, OrderDto};
use validator::Validate;

const NOT_NULL: &str = "must not be null";

/// JSON property name of a transfer object field
fn wire_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}

/// Validate a transfer object for the given id policy
///
/// Returns every violated field by its JSON property name, sorted by name.
pub fn validate_order(dto: &OrderDto, ids: IdPolicy) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if let Err(report) = dto.validate() {
        for (field, violations) in report.field_errors() {
            for violation in violations.iter() {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| violation.code.to_string());
                errors.push(FieldValidationError::new(wire_name(&field), message));
            }
        }
    }

    if ids == IdPolicy::ClientSupplied {
        if dto.id.is_none() {
            errors.push(FieldValidationError::new("id", NOT_NULL));
        }
        if dto.priority.is_none() {
            errors.push(FieldValidationError::new("priority", NOT_NULL));
        }
    }

    if errors.is_empty() {
        return Ok(());
    }

    errors.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    Err(ValidationError::FieldErrors(errors))
}
