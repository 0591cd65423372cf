//! Payload validation
//!
//! Declarative field validation applied to bill payloads before they reach
//! the store collaborator. Each rule is a closure over the field name and
//! its JSON value; all failures for a payload are collected and reported
//! together.

pub mod validators;

use crate::core::bill::{CreateBillPayload, EXPENSE_TYPES};
use crate::core::error::{FieldValidationError, ValidationError};
use serde_json::Value;
use validators::{date_format, in_list, non_empty, positive, required};

type Rule = Box<dyn Fn(&str, &Value) -> Result<(), String>>;

fn check(errors: &mut Vec<FieldValidationError>, value: &Value, field: &str, rules: &[Rule]) {
    let field_value = value.get(field).cloned().unwrap_or(Value::Null);
    for rule in rules {
        if let Err(message) = rule(field, &field_value) {
            errors.push(FieldValidationError {
                field: field.to_string(),
                message,
            });
            break; // first failure per field is enough
        }
    }
}

/// Validate a create payload before sending it to the store
///
/// Checks the fields the form is expected to fill: a well-formed date,
/// a positive amount, one of the known expense categories, the
/// submitter's email and the proof file reference.
pub fn validate_create_payload(payload: &CreateBillPayload) -> Result<(), ValidationError> {
    let value = serde_json::to_value(payload).map_err(|e| ValidationError::InvalidJson {
        message: e.to_string(),
    })?;

    let mut errors = Vec::new();
    check(
        &mut errors,
        &value,
        "date",
        &[
            Box::new(required()) as Rule,
            Box::new(date_format("%Y-%m-%d")),
        ],
    );
    check(
        &mut errors,
        &value,
        "amount",
        &[Box::new(required()) as Rule, Box::new(positive())],
    );
    check(
        &mut errors,
        &value,
        "type",
        &[
            Box::new(required()) as Rule,
            Box::new(in_list(
                EXPENSE_TYPES.iter().map(|t| t.to_string()).collect(),
            )),
        ],
    );
    check(
        &mut errors,
        &value,
        "email",
        &[Box::new(required()) as Rule, Box::new(non_empty())],
    );
    check(
        &mut errors,
        &value,
        "fileName",
        &[Box::new(required()) as Rule, Box::new(non_empty())],
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::FieldErrors(errors))
    }
}
