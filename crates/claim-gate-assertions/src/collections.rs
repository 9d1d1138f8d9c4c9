// crates/claim-gate-assertions/src/collections.rs
// ============================================================================
// Module: Collection Assertions
// Description: Built-in containment, emptiness, length, and satisfaction.
// Purpose: Cover structural checks over strings, arrays, and objects.
// Dependencies: claim-gate-core, claim-gate-schemas
// ============================================================================

//! ## Overview
//! Collection assertions fail closed on subjects without the relevant
//! structure: containment over scalars, length of booleans, and satisfaction
//! of non-objects are reported as validation issues, never coerced.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use claim_gate_core::AnyDefinition;
use claim_gate_core::AssertionFailure;
use claim_gate_core::AssertionOutcome;
use claim_gate_core::CheckError;
use claim_gate_core::ImplementationError;
use claim_gate_core::Part;
use claim_gate_core::SchemaIssue;
use claim_gate_core::value_kind;
use claim_gate_schemas::AnySchema;
use claim_gate_schemas::TypeSchema;
use claim_gate_schemas::contains_value;
use claim_gate_schemas::values_equal;
use serde_json::Value;
use serde_json::json;

use crate::builders::arg;
use crate::builders::function_assertion;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Returns the built-in collection assertions.
///
/// # Errors
///
/// Returns [`ImplementationError`] when a declaration is malformed; built-in
/// declarations failing is a packaging defect surfaced at gate construction.
pub fn definitions() -> Result<Vec<AnyDefinition>, ImplementationError> {
    Ok(vec![
        contains_assertion()?,
        empty_assertion()?,
        length_assertion()?,
        satisfy_assertion()?,
    ])
}

/// Builds `to contain <needle>` over strings and arrays.
fn contains_assertion() -> Result<AnyDefinition, ImplementationError> {
    function_assertion(
        vec![Part::phrase("to contain")?, Part::schema(Arc::new(AnySchema::new()))],
        |values| {
            let subject = arg(values, 0)?;
            let needle = arg(values, 1)?;
            match contains_value(subject, needle) {
                Some(found) => Ok(AssertionOutcome::from(found)),
                None => Err(CheckError::Invalid(vec![SchemaIssue::root(format!(
                    "cannot search {} values for content",
                    value_kind(subject)
                ))])),
            }
        },
    )
}

/// Builds `to be empty` over strings, arrays, and objects.
fn empty_assertion() -> Result<AnyDefinition, ImplementationError> {
    function_assertion(vec![Part::phrase("to be empty")?], |values| {
        let subject = arg(values, 0)?;
        match subject_len(subject) {
            Some(length) => Ok(AssertionOutcome::from(length == 0)),
            None => Err(CheckError::Invalid(vec![SchemaIssue::root(format!(
                "{} values have no emptiness",
                value_kind(subject)
            ))])),
        }
    })
}

/// Builds `to have length <expected>` over strings, arrays, and objects.
fn length_assertion() -> Result<AnyDefinition, ImplementationError> {
    function_assertion(
        vec![Part::phrase("to have length")?, Part::schema(Arc::new(TypeSchema::integer()))],
        |values| {
            let subject = arg(values, 0)?;
            let expected = arg(values, 1)?.as_u64();
            let Some(length) = subject_len(subject) else {
                return Err(CheckError::Invalid(vec![SchemaIssue::root(format!(
                    "{} values have no length",
                    value_kind(subject)
                ))]));
            };
            let length = u64::try_from(length).unwrap_or(u64::MAX);
            if Some(length) == expected {
                Ok(AssertionOutcome::Pass)
            } else {
                let failure = AssertionFailure {
                    message: None,
                    actual: Some(json!(length)),
                    expected: Some(json!(expected)),
                    diff: None,
                };
                Ok(AssertionOutcome::Fail(failure))
            }
        },
    )
}

/// Builds `to satisfy <shape>`: structural subset match against an object.
fn satisfy_assertion() -> Result<AnyDefinition, ImplementationError> {
    function_assertion(
        vec![Part::phrase("to satisfy")?, Part::schema(Arc::new(TypeSchema::object()))],
        |values| {
            let subject = arg(values, 0)?;
            let shape = arg(values, 1)?;
            let Value::Object(expected) = shape else {
                return Err(CheckError::Broken("satisfaction shape must be an object".into()));
            };
            let Value::Object(actual) = subject else {
                return Err(CheckError::Invalid(vec![SchemaIssue::root(format!(
                    "expected object but received {}",
                    value_kind(subject)
                ))]));
            };
            for (key, expected_value) in expected {
                let Some(actual_value) = actual.get(key) else {
                    return Ok(AssertionOutcome::Fail(AssertionFailure::message(format!(
                        "missing key {key:?}"
                    ))));
                };
                if !satisfies(actual_value, expected_value) {
                    return Ok(AssertionOutcome::Fail(
                        AssertionFailure::mismatch(actual_value.clone(), expected_value.clone())
                            .with_diff(format!("key {key:?} does not satisfy its shape")),
                    ));
                }
            }
            Ok(AssertionOutcome::Pass)
        },
    )
}

/// Length of a value when it has one: characters, elements, or entries.
fn subject_len(value: &Value) -> Option<usize> {
    match value {
        Value::String(text) => Some(text.chars().count()),
        Value::Array(items) => Some(items.len()),
        Value::Object(entries) => Some(entries.len()),
        _ => None,
    }
}

/// Structural subset: objects recurse per key, everything else compares
/// with decimal-aware equality.
fn satisfies(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => {
            expected.iter().all(|(key, expected_value)| {
                actual.get(key).is_some_and(|actual_value| satisfies(actual_value, expected_value))
            })
        }
        _ => values_equal(actual, expected),
    }
}
