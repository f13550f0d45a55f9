//! Reusable field validators
//!
//! Required-field presence is the only validation contract of the service;
//! the email check is a shape check, not an RFC parser. Validators are
//! closures over `(field, value)` so the payload check below stays a flat
//! table of field names.

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::client::ClientRecord;

/// Validator: field must be non-empty (ignoring surrounding whitespace)
pub fn required() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if value.trim().is_empty() {
            Err(format!("'{}' is required", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: value must look like an email address
///
/// Accepts `local@domain` where both sides are non-empty and the domain
/// contains a dot. Empty values pass; pair with [`required`] for mandatory
/// email fields.
pub fn email_shaped() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if value.is_empty() {
            return Ok(());
        }
        let Some((local, domain)) = value.split_once('@') else {
            return Err(format!("'{}' must be a valid email address", field));
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(format!("'{}' must be a valid email address", field));
        }
        Ok(())
    }
}

/// Validate a client record payload before it is stored or submitted
///
/// Checks the same set of fields the form marks as required. `client_id`
/// and `currency` are exempt: the former is store-assigned, the latter is
/// derived and may legitimately be empty in degraded mode.
pub fn validate_record(record: &ClientRecord) -> Result<(), ValidationError> {
    let require = required();
    let email = email_shaped();

    let checks: [(&str, &str, &dyn Fn(&str, &str) -> Result<(), String>); 7] = [
        ("client_name", record.client_name.as_str(), &require),
        ("bu", record.bu.as_str(), &require),
        ("location", record.location.as_str(), &require),
        ("billing_method", record.billing_method.as_str(), &require),
        ("email_id", record.email_id.as_str(), &require),
        ("first_name", record.first_name.as_str(), &require),
        ("last_name", record.last_name.as_str(), &require),
    ];

    let mut errors: Vec<FieldValidationError> = Vec::new();

    for (field, value, validator) in checks {
        if let Err(message) = validator(field, value) {
            errors.push(FieldValidationError {
                field: field.to_string(),
                message,
            });
        }
    }

    if let Err(message) = email("email_id", &record.email_id) {
        errors.push(FieldValidationError {
            field: "email_id".to_string(),
            message,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::FieldErrors(errors))
    }
}
